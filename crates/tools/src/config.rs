//! Explicit configuration for the tool boundary.
//!
//! Every durable resource the tools touch is named here and passed in at
//! construction; no operation assumes a working directory or an ambient
//! file layout.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use storesight_records::{DAILY_PERFORMANCE, ENRICHED_TRANSACTIONS};

/// Name of the insight log under the conventional data directory.
pub const INSIGHT_LOG: &str = "validated_insights";

/// Locations of the four durable resources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolsConfig {
    /// CSV file backing the daily aggregated performance table.
    pub performance_dataset: PathBuf,
    /// CSV file backing the enriched per-transaction table.
    pub transactions_dataset: PathBuf,
    /// Directory holding one `<policy_id>.txt` per policy document.
    pub policy_root: PathBuf,
    /// CSV file the insight recorder appends to.
    pub insight_log: PathBuf,
}

impl ToolsConfig {
    /// Conventional single-directory layout: both datasets, the policy
    /// documents, and the insight log all live under `dir`.
    pub fn from_data_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            performance_dataset: dir.join(format!("{DAILY_PERFORMANCE}.csv")),
            transactions_dataset: dir.join(format!("{ENRICHED_TRANSACTIONS}.csv")),
            policy_root: dir.to_path_buf(),
            insight_log: dir.join(format!("{INSIGHT_LOG}.csv")),
        }
    }
}
