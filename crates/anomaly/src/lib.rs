//! `storesight-anomaly`
//!
//! **Responsibility:** the deterministic rule core — threshold anomaly
//! detection over the performance table, and evidence linking from a flagged
//! aggregate key down to its transactions.
//!
//! Everything in this crate is a pure function over already-loaded rows; no
//! I/O, no clock, no ordering assumptions beyond "table order is scan order".

pub mod detector;
pub mod evidence;

pub use detector::{
    AnomalyDetector, AuditReport, DiscountSample, DEFAULT_DISCOUNT_PCT_THRESHOLD,
    DEFAULT_RETURN_RATE_THRESHOLD, DEFAULT_SAMPLE_SIZE,
};
pub use evidence::{link_evidence, EvidenceRow};
