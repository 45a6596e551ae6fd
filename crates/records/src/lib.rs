//! `storesight-records`
//!
//! **Responsibility:** the Record Store — loading the two source tables
//! (daily aggregated performance, enriched transactions) from CSV resources
//! into typed in-memory rows, with explicit schema validation.

pub mod model;
pub mod store;

pub use model::{PerformanceRecord, TransactionRecord};
pub use store::{RecordStore, DAILY_PERFORMANCE, ENRICHED_TRANSACTIONS};
