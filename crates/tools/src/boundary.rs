//! The five tool operations.
//!
//! This is the surface an external orchestrator calls, in whatever order it
//! chooses: each operation stands alone, takes primitive/string arguments,
//! and returns formatted text or a clearly tagged failure. Nothing here
//! assumes a call sequence.

use storesight_anomaly::{link_evidence, AnomalyDetector};
use storesight_core::{parse_record_date, AnalysisResult, RecordKey};
use storesight_insights::InsightLog;
use storesight_policy::{PolicyStore, PolicyText};
use storesight_records::{PerformanceRecord, RecordStore};

use crate::config::ToolsConfig;

/// The tool boundary: Record Store, detector, policy store and insight log
/// wired together behind five string-in/string-out operations.
#[derive(Debug, Clone)]
pub struct Tools {
    store: RecordStore,
    detector: AnomalyDetector,
    policies: PolicyStore,
    log: InsightLog,
}

impl Tools {
    pub fn new(config: ToolsConfig) -> Self {
        Self {
            store: RecordStore::new(config.performance_dataset, config.transactions_dataset),
            detector: AnomalyDetector::new(),
            policies: PolicyStore::new(config.policy_root),
            log: InsightLog::new(config.insight_log),
        }
    }

    /// Override the default rule thresholds.
    pub fn with_detector(mut self, detector: AnomalyDetector) -> Self {
        self.detector = detector;
        self
    }

    /// Scan the performance table for return-rate anomalies and report the
    /// most recent flagged rows.
    pub fn scan_daily_performance(&self) -> AnalysisResult<String> {
        let records = self.store.load_performance()?;
        let flagged = self.detector.recent_return_rate_anomalies(&records);
        tracing::info!(flagged = flagged.len(), "return-rate scan complete");

        if flagged.is_empty() {
            return Ok("No return-rate anomalies found.".to_string());
        }

        let mut out = format!(
            "--- Return-Rate Scan (last {} flagged) ---",
            self.detector.sample_size()
        );
        for r in &flagged {
            out.push('\n');
            out.push_str(&format_performance_row(r));
        }
        Ok(out)
    }

    /// Retrieve the transaction-level evidence for one (location, date) key.
    pub fn drill_down(&self, location_id: &str, date: &str) -> AnalysisResult<String> {
        let key = RecordKey::new(location_id, parse_record_date(date)?);
        let transactions = self.store.load_transactions()?;
        let evidence = link_evidence(&transactions, &key);
        tracing::info!(key = %key, rows = evidence.len(), "drill-down complete");

        if evidence.is_empty() {
            return Ok(format!("No matching transactions for {key}."));
        }

        let mut out = format!("--- Transactions for {key} ---");
        for row in &evidence {
            out.push_str(&format!(
                "\n{} | {} | discount={:.2} | sales={:.2}",
                row.product_name,
                if row.return_reason.is_empty() { "-" } else { row.return_reason.as_str() },
                row.discount_amount,
                row.gross_sales_amt,
            ));
        }
        Ok(out)
    }

    /// Resolve a policy document to its full text. A missing document is a
    /// normal, reported outcome.
    pub fn load_policy(&self, policy_id: &str) -> AnalysisResult<String> {
        match self.policies.load(policy_id)? {
            PolicyText::Found(text) => Ok(text),
            PolicyText::NotFound => Ok(format!("Policy {policy_id} not found.")),
        }
    }

    /// Run the combined discount / phantom-inventory audit.
    pub fn audit_anomalies(&self) -> AnalysisResult<String> {
        let records = self.store.load_performance()?;
        let report = self.detector.audit(&records);
        tracing::info!(
            unauthorized_discounts = report.unauthorized_discounts,
            phantom_inventory = report.phantom_inventory,
            "audit complete"
        );
        Ok(report.to_string())
    }

    /// Append a validated insight to the durable log.
    pub fn record_insight(&self, insight_text: &str) -> AnalysisResult<String> {
        self.log.record(insight_text)?;
        Ok(format!("Insight saved to {}", self.log.path().display()))
    }
}

fn format_performance_row(r: &PerformanceRecord) -> String {
    format!(
        "{}  {}  qty={}  returned={}  sales={:.2}  discount={:.1}%",
        r.location_id, r.date, r.quantity, r.is_returned, r.gross_sales_amt, r.discount_percentage,
    )
}
