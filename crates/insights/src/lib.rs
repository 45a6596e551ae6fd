//! `storesight-insights`
//!
//! **Responsibility:** the Insight Recorder — a durable, append-only log of
//! validated findings, header written once on creation.

pub mod log;

pub use log::{Insight, InsightLog, InsightStatus};
