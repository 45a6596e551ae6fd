//! `storesight-tools`
//!
//! **Responsibility:** the tool-call boundary — the five independently
//! callable operations (scan, drill-down, policy lookup, audit, record
//! insight) behind explicit configuration, each returning formatted text.

pub mod boundary;
pub mod config;

pub use boundary::Tools;
pub use config::{ToolsConfig, INSIGHT_LOG};
