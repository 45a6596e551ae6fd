//! Evidence linking: aggregate anomaly key → transaction-level rows.

use serde::{Deserialize, Serialize};

use storesight_core::RecordKey;
use storesight_records::TransactionRecord;

/// One transaction projected to the evidence schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceRow {
    pub product_name: String,
    pub return_reason: String,
    pub discount_amount: f64,
    pub gross_sales_amt: f64,
}

impl From<&TransactionRecord> for EvidenceRow {
    fn from(tx: &TransactionRecord) -> Self {
        Self {
            product_name: tx.product_name.clone(),
            return_reason: tx.return_reason.clone(),
            discount_amount: tx.discount_amount,
            gross_sales_amt: tx.gross_sales_amt,
        }
    }
}

/// Select the transactions matching `key` exactly (equality on both
/// location and date) and project them to the evidence schema.
///
/// Zero matches is a valid outcome: the relation between the two tables is
/// not enforced by the source, so absence of evidence is an empty vector,
/// never an error.
pub fn link_evidence(transactions: &[TransactionRecord], key: &RecordKey) -> Vec<EvidenceRow> {
    transactions
        .iter()
        .filter(|tx| tx.location_id == key.location_id && tx.date == key.date)
        .map(EvidenceRow::from)
        .collect()
}
