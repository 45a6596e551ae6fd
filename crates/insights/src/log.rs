//! Append-only insight log.
//!
//! Single-writer assumption: appends are not serialized across processes,
//! and the header-then-row sequencing is only safe with one writer.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use storesight_core::{AnalysisError, AnalysisResult};

/// Status of a recorded insight. The pipeline only ever records findings
/// that passed validation, so this has exactly one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InsightStatus {
    Validated,
}

/// One durable finding. Created once at write time, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    pub timestamp: DateTime<Utc>,
    pub insight: String,
    pub status: InsightStatus,
}

/// The append-only CSV log of validated insights.
///
/// The header row (`timestamp,insight,status`) is written exactly once, when
/// the backing file is first created; every later call appends one data row.
#[derive(Debug, Clone)]
pub struct InsightLog {
    path: PathBuf,
}

impl InsightLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one validated insight, stamping it with the current time.
    /// Returns the record as written, as confirmation.
    pub fn record(&self, insight_text: &str) -> AnalysisResult<Insight> {
        let needs_header = match std::fs::metadata(&self.path) {
            Ok(meta) => meta.len() == 0,
            Err(_) => true,
        };

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| AnalysisError::write_failure(e.to_string()))?;

        let insight = Insight {
            timestamp: Utc::now(),
            insight: insight_text.to_string(),
            status: InsightStatus::Validated,
        };

        let mut writer = csv::WriterBuilder::new()
            .has_headers(needs_header)
            .from_writer(file);
        writer
            .serialize(&insight)
            .map_err(|e| AnalysisError::write_failure(e.to_string()))?;
        writer
            .flush()
            .map_err(|e| AnalysisError::write_failure(e.to_string()))?;

        tracing::info!(path = %self.path.display(), "insight recorded");
        Ok(insight)
    }

    /// Read back every insight in append order. A log that was never written
    /// to reads as empty.
    pub fn read_all(&self) -> AnalysisResult<Vec<Insight>> {
        let file = match std::fs::File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(AnalysisError::io(e.to_string())),
        };

        let mut reader = csv::Reader::from_reader(file);
        let mut insights = Vec::new();
        for result in reader.deserialize::<Insight>() {
            let row = result.map_err(|e| AnalysisError::io(format!("insight log: {e}")))?;
            insights.push(row);
        }
        Ok(insights)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh_log() -> (tempfile::TempDir, InsightLog) {
        let dir = tempfile::tempdir().unwrap();
        let log = InsightLog::new(dir.path().join("validated_insights.csv"));
        (dir, log)
    }

    fn raw_lines(log: &InsightLog) -> Vec<String> {
        std::fs::read_to_string(log.path())
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn first_record_creates_header_and_one_row() {
        let (_dir, log) = fresh_log();
        log.record("LOC-001 return spike traced to damaged shipment").unwrap();

        let lines = raw_lines(&log);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "timestamp,insight,status");
        assert!(lines[1].ends_with(",Validated"));
    }

    #[test]
    fn later_records_append_without_repeating_header() {
        let (_dir, log) = fresh_log();
        log.record("first").unwrap();
        log.record("second").unwrap();

        let lines = raw_lines(&log);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines.iter().filter(|l| *l == "timestamp,insight,status").count(), 1);
    }

    #[test]
    fn n_records_yield_n_plus_one_lines() {
        let (_dir, log) = fresh_log();
        for i in 0..7 {
            log.record(&format!("finding {i}")).unwrap();
        }
        assert_eq!(raw_lines(&log).len(), 8);
    }

    #[test]
    fn read_all_round_trips_recorded_insights() {
        let (_dir, log) = fresh_log();
        let first = log.record("phantom inventory at LOC-002").unwrap();
        let second = log.record("unauthorized 20% discount at LOC-002").unwrap();

        let all = log.read_all().unwrap();
        assert_eq!(all, vec![first, second]);
        assert!(all.iter().all(|i| i.status == InsightStatus::Validated));
    }

    #[test]
    fn read_all_on_never_written_log_is_empty() {
        let (_dir, log) = fresh_log();
        assert!(log.read_all().unwrap().is_empty());
    }

    #[test]
    fn insight_text_with_commas_and_newlines_survives() {
        let (_dir, log) = fresh_log();
        let text = "returns up 40%, cause: \"Adverse Reaction\"\nsee SOP-QA-001";
        log.record(text).unwrap();

        let all = log.read_all().unwrap();
        assert_eq!(all[0].insight, text);
    }

    #[test]
    fn record_into_missing_directory_is_write_failure() {
        let log = InsightLog::new("/nonexistent-dir-for-test/insights.csv");
        let err = log.record("x").unwrap_err();
        assert!(matches!(err, AnalysisError::WriteFailure(_)));
    }
}
