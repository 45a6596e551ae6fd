//! Shared identifier and key types for the analysis tables.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, AnalysisResult};

/// Identifier of a retail location (store). Opaque string from the source
/// data; never parsed or normalized here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationId(String);

impl LocationId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for LocationId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<&str> for LocationId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for LocationId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Join key between the aggregate performance table and the enriched
/// transaction table. Matching is exact equality on both fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordKey {
    pub location_id: LocationId,
    pub date: NaiveDate,
}

impl RecordKey {
    pub fn new(location_id: impl Into<LocationId>, date: NaiveDate) -> Self {
        Self {
            location_id: location_id.into(),
            date,
        }
    }
}

impl core::fmt::Display for RecordKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}/{}", self.location_id, self.date)
    }
}

/// Parse a caller-supplied date argument (ISO `YYYY-MM-DD`).
pub fn parse_record_date(s: &str) -> AnalysisResult<NaiveDate> {
    s.parse::<NaiveDate>()
        .map_err(|e| AnalysisError::invalid_input(format!("date {s:?}: {e}")))
}
