//! Row types for the two source tables.
//!
//! Field names ARE the wire contract: they must match the CSV headers of the
//! backing datasets exactly.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use storesight_core::{LocationId, RecordKey};

/// One row of the daily aggregated performance table: a (location, date)
/// roll-up. Loaded read-only; never mutated after load.
///
/// `is_returned` holds the number of units returned. The source does not
/// guarantee `is_returned <= quantity`; rows are passed through as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceRecord {
    pub location_id: LocationId,
    pub date: NaiveDate,
    pub quantity: i64,
    pub is_returned: i64,
    pub gross_sales_amt: f64,
    pub discount_percentage: f64,
}

impl PerformanceRecord {
    pub fn key(&self) -> RecordKey {
        RecordKey::new(self.location_id.clone(), self.date)
    }
}

/// One row of the enriched per-transaction table. Many transactions relate
/// to one `PerformanceRecord` through the (location_id, date) key; the
/// relation is not enforced by the source, and a key with zero transactions
/// is a valid state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub location_id: LocationId,
    pub date: NaiveDate,
    pub product_name: String,
    pub return_reason: String,
    pub discount_amount: f64,
    pub gross_sales_amt: f64,
}

impl TransactionRecord {
    pub fn key(&self) -> RecordKey {
        RecordKey::new(self.location_id.clone(), self.date)
    }
}
