//! Analysis error model.

use thiserror::Error;

/// Result type used across the analysis core.
pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Failure of an analysis-core operation.
///
/// Keep this focused on the taxonomy callers can act on. A lookup that finds
/// nothing is NOT an error anywhere in this core: empty evidence is an empty
/// sequence, and a missing policy is `PolicyText::NotFound`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// The backing resource for a named dataset is missing. Fatal to the
    /// calling operation; no partial table is returned.
    #[error("dataset not found: {name}")]
    DatasetNotFound { name: String },

    /// A dataset exists but does not satisfy its column contract, or a row
    /// failed to parse under that contract. Fatal to the calling operation.
    #[error("schema error in dataset {dataset}: {detail}")]
    Schema { dataset: String, detail: String },

    /// The insight log could not be appended.
    #[error("insight log write failed: {0}")]
    WriteFailure(String),

    /// A caller-supplied argument was malformed (bad date, unsafe policy id).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Residual I/O failure not covered by the cases above.
    #[error("i/o error: {0}")]
    Io(String),
}

impl AnalysisError {
    pub fn dataset_not_found(name: impl Into<String>) -> Self {
        Self::DatasetNotFound { name: name.into() }
    }

    pub fn schema(dataset: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::Schema {
            dataset: dataset.into(),
            detail: detail.into(),
        }
    }

    pub fn write_failure(detail: impl Into<String>) -> Self {
        Self::WriteFailure(detail.into())
    }

    pub fn invalid_input(detail: impl Into<String>) -> Self {
        Self::InvalidInput(detail.into())
    }

    pub fn io(detail: impl Into<String>) -> Self {
        Self::Io(detail.into())
    }
}
