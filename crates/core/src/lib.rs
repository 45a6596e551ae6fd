//! `storesight-core` — foundation types for the analysis core.
//!
//! This crate contains **pure** primitives (no I/O): the error taxonomy and
//! the shared key types that relate the two source tables.

pub mod error;
pub mod keys;

pub use error::{AnalysisError, AnalysisResult};
pub use keys::{parse_record_date, LocationId, RecordKey};
