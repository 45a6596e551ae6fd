//! CSV-backed record store.
//!
//! Each load reads the full backing file fresh; there is no cache, so
//! sequential callers always see the file as it currently is.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use storesight_core::{AnalysisError, AnalysisResult};

use crate::model::{PerformanceRecord, TransactionRecord};

/// Dataset name of the daily aggregated performance table.
pub const DAILY_PERFORMANCE: &str = "gold_daily_performance";
/// Dataset name of the enriched per-transaction table.
pub const ENRICHED_TRANSACTIONS: &str = "fact_enriched";

const PERFORMANCE_COLUMNS: &[&str] = &[
    "location_id",
    "date",
    "quantity",
    "is_returned",
    "gross_sales_amt",
    "discount_percentage",
];

const TRANSACTION_COLUMNS: &[&str] = &[
    "location_id",
    "date",
    "product_name",
    "return_reason",
    "discount_amount",
    "gross_sales_amt",
];

/// Loads the two source tables from CSV resources.
///
/// Paths are explicit construction-time configuration; nothing in here
/// assumes a working directory or an ambient layout.
#[derive(Debug, Clone)]
pub struct RecordStore {
    performance_path: PathBuf,
    transactions_path: PathBuf,
}

impl RecordStore {
    pub fn new(performance_path: impl Into<PathBuf>, transactions_path: impl Into<PathBuf>) -> Self {
        Self {
            performance_path: performance_path.into(),
            transactions_path: transactions_path.into(),
        }
    }

    /// Conventional layout: `<dir>/gold_daily_performance.csv` and
    /// `<dir>/fact_enriched.csv`.
    pub fn from_data_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self::new(
            dir.join(format!("{DAILY_PERFORMANCE}.csv")),
            dir.join(format!("{ENRICHED_TRANSACTIONS}.csv")),
        )
    }

    /// Load the daily aggregated performance table.
    pub fn load_performance(&self) -> AnalysisResult<Vec<PerformanceRecord>> {
        load_table(&self.performance_path, DAILY_PERFORMANCE, PERFORMANCE_COLUMNS)
    }

    /// Load the enriched per-transaction table.
    pub fn load_transactions(&self) -> AnalysisResult<Vec<TransactionRecord>> {
        load_table(
            &self.transactions_path,
            ENRICHED_TRANSACTIONS,
            TRANSACTION_COLUMNS,
        )
    }
}

/// Read a CSV resource into typed rows, validating the header against the
/// column contract first so a wrong file fails with the missing columns
/// named instead of an opaque per-row parse error.
fn load_table<T: DeserializeOwned>(
    path: &Path,
    dataset: &str,
    required: &[&str],
) -> AnalysisResult<Vec<T>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => AnalysisError::dataset_not_found(dataset),
        _ => AnalysisError::io(format!("{dataset}: {e}")),
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| AnalysisError::schema(dataset, e.to_string()))?;

    let missing: Vec<&str> = required
        .iter()
        .copied()
        .filter(|col| !headers.iter().any(|h| h == *col))
        .collect();
    if !missing.is_empty() {
        return Err(AnalysisError::schema(
            dataset,
            format!("missing columns: {}", missing.join(", ")),
        ));
    }

    let mut rows = Vec::new();
    for (i, result) in reader.deserialize::<T>().enumerate() {
        // Data row 1 is the line after the header.
        let row = result.map_err(|e| AnalysisError::schema(dataset, format!("row {}: {e}", i + 1)))?;
        rows.push(row);
    }

    tracing::debug!(dataset, rows = rows.len(), "loaded dataset");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    fn write_file(dir: &Path, name: &str, contents: &str) {
        let mut f = File::create(dir.join(name)).unwrap();
        f.write_all(contents.as_bytes()).unwrap();
    }

    const PERF_CSV: &str = "\
location_id,date,quantity,is_returned,gross_sales_amt,discount_percentage
LOC-001,2025-11-01,100,15,900.00,5.0
LOC-002,2025-11-01,50,2,0.00,20.0
";

    const TX_CSV: &str = "\
location_id,date,product_name,return_reason,discount_amount,gross_sales_amt
LOC-001,2025-11-01,Velvet Matte Lipstick,Damaged,0.00,24.99
LOC-001,2025-11-01,Hydra Serum,Adverse Reaction,5.00,44.99
";

    #[test]
    fn loads_performance_rows_in_file_order() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "gold_daily_performance.csv", PERF_CSV);
        write_file(dir.path(), "fact_enriched.csv", TX_CSV);

        let store = RecordStore::from_data_dir(dir.path());
        let rows = store.load_performance().unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].location_id.as_str(), "LOC-001");
        assert_eq!(rows[0].quantity, 100);
        assert_eq!(rows[0].is_returned, 15);
        assert_eq!(rows[1].discount_percentage, 20.0);
    }

    #[test]
    fn loads_transaction_rows() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "fact_enriched.csv", TX_CSV);

        let store = RecordStore::from_data_dir(dir.path());
        let rows = store.load_transactions().unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].product_name, "Hydra Serum");
        assert_eq!(rows[1].return_reason, "Adverse Reaction");
    }

    #[test]
    fn missing_file_is_dataset_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = RecordStore::from_data_dir(dir.path());

        let err = store.load_performance().unwrap_err();
        assert_eq!(
            err,
            AnalysisError::dataset_not_found(DAILY_PERFORMANCE)
        );
    }

    #[test]
    fn missing_column_is_schema_error_naming_the_column() {
        let dir = tempfile::tempdir().unwrap();
        write_file(
            dir.path(),
            "gold_daily_performance.csv",
            "location_id,date,quantity,gross_sales_amt,discount_percentage\nLOC-001,2025-11-01,1,1.0,0.0\n",
        );

        let store = RecordStore::from_data_dir(dir.path());
        let err = store.load_performance().unwrap_err();
        match err {
            AnalysisError::Schema { dataset, detail } => {
                assert_eq!(dataset, DAILY_PERFORMANCE);
                assert!(detail.contains("is_returned"), "detail was: {detail}");
            }
            _ => panic!("expected Schema error, got {err:?}"),
        }
    }

    #[test]
    fn unparseable_row_is_schema_error_with_row_number() {
        let dir = tempfile::tempdir().unwrap();
        write_file(
            dir.path(),
            "gold_daily_performance.csv",
            "location_id,date,quantity,is_returned,gross_sales_amt,discount_percentage\n\
             LOC-001,2025-11-01,not-a-number,0,1.0,0.0\n",
        );

        let store = RecordStore::from_data_dir(dir.path());
        let err = store.load_performance().unwrap_err();
        match err {
            AnalysisError::Schema { detail, .. } => {
                assert!(detail.contains("row 1"), "detail was: {detail}");
            }
            _ => panic!("expected Schema error, got {err:?}"),
        }
    }

    #[test]
    fn extra_columns_are_tolerated() {
        let dir = tempfile::tempdir().unwrap();
        write_file(
            dir.path(),
            "gold_daily_performance.csv",
            "location_id,date,quantity,is_returned,gross_sales_amt,discount_percentage,region\n\
             LOC-001,2025-11-01,10,1,99.0,0.0,north\n",
        );

        let store = RecordStore::from_data_dir(dir.path());
        let rows = store.load_performance().unwrap();
        assert_eq!(rows.len(), 1);
    }
}
