//! Threshold-rule anomaly detection over the daily performance table.
//!
//! Every rule is a single order-preserving pass: no sorting, no ranking.
//! The bounded samples are positional (suffix for the return-rate scan,
//! prefix for the audit's discount sample), not top-N by magnitude.

use serde::{Deserialize, Serialize};

use storesight_core::LocationId;
use storesight_records::PerformanceRecord;

/// Default return-rate threshold: flag when returns exceed 10% of units sold.
pub const DEFAULT_RETURN_RATE_THRESHOLD: f64 = 0.10;
/// Default discount ceiling: flag when the discount percentage exceeds 15.
pub const DEFAULT_DISCOUNT_PCT_THRESHOLD: f64 = 15.0;
/// Default bounded-sample size for scan and audit output.
pub const DEFAULT_SAMPLE_SIZE: usize = 5;

/// Rule engine for the aggregate performance table.
///
/// Thresholds default to the fixed policy values above and are carried as
/// explicit configuration rather than baked into the rule bodies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnomalyDetector {
    return_rate_threshold: f64,
    discount_pct_threshold: f64,
    sample_size: usize,
}

impl Default for AnomalyDetector {
    fn default() -> Self {
        Self {
            return_rate_threshold: DEFAULT_RETURN_RATE_THRESHOLD,
            discount_pct_threshold: DEFAULT_DISCOUNT_PCT_THRESHOLD,
            sample_size: DEFAULT_SAMPLE_SIZE,
        }
    }
}

impl AnomalyDetector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_return_rate_threshold(mut self, threshold: f64) -> Self {
        self.return_rate_threshold = threshold;
        self
    }

    pub fn with_discount_pct_threshold(mut self, threshold: f64) -> Self {
        self.discount_pct_threshold = threshold;
        self
    }

    pub fn with_sample_size(mut self, sample_size: usize) -> Self {
        self.sample_size = sample_size;
        self
    }

    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    /// All records whose returned units exceed the return-rate threshold,
    /// in table order.
    pub fn return_rate_anomalies(&self, records: &[PerformanceRecord]) -> Vec<PerformanceRecord> {
        records
            .iter()
            .filter(|r| r.is_returned as f64 > r.quantity as f64 * self.return_rate_threshold)
            .cloned()
            .collect()
    }

    /// The return-rate scan: the LAST `sample_size` matches in table order.
    ///
    /// This is a recency-biased suffix of the match subsequence, not the
    /// worst offenders. Rows later in the table are assumed more recent.
    pub fn recent_return_rate_anomalies(
        &self,
        records: &[PerformanceRecord],
    ) -> Vec<PerformanceRecord> {
        let matches = self.return_rate_anomalies(records);
        let start = matches.len().saturating_sub(self.sample_size);
        matches[start..].to_vec()
    }

    /// All records discounted above the authorized ceiling, in table order.
    pub fn unauthorized_discounts(&self, records: &[PerformanceRecord]) -> Vec<PerformanceRecord> {
        records
            .iter()
            .filter(|r| r.discount_percentage > self.discount_pct_threshold)
            .cloned()
            .collect()
    }

    /// All records showing stock movement with zero gross sales, in table
    /// order. Units left the shelf but no revenue was booked.
    pub fn phantom_inventory(&self, records: &[PerformanceRecord]) -> Vec<PerformanceRecord> {
        records
            .iter()
            .filter(|r| r.gross_sales_amt == 0.0 && r.quantity > 0)
            .cloned()
            .collect()
    }

    /// Combined audit: discount and phantom-inventory rules in one report,
    /// with a prefix sample of the discount matches.
    pub fn audit(&self, records: &[PerformanceRecord]) -> AuditReport {
        let discounts = self.unauthorized_discounts(records);
        let phantom = self.phantom_inventory(records);

        let discount_sample = discounts
            .iter()
            .take(self.sample_size)
            .map(|r| DiscountSample {
                location_id: r.location_id.clone(),
                discount_percentage: r.discount_percentage,
            })
            .collect();

        AuditReport {
            unauthorized_discounts: discounts.len(),
            phantom_inventory: phantom.len(),
            discount_sample,
        }
    }
}

/// One entry of the audit's discount sample: the flagged location and the
/// discount it applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscountSample {
    pub location_id: LocationId,
    pub discount_percentage: f64,
}

/// Output of the combined audit over the performance table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditReport {
    /// Exact count of records with `discount_percentage` above the ceiling.
    pub unauthorized_discounts: usize,
    /// Exact count of records with stock movement but zero gross sales.
    pub phantom_inventory: usize,
    /// The FIRST ≤`sample_size` discount matches, in table order.
    pub discount_sample: Vec<DiscountSample>,
}

impl core::fmt::Display for AuditReport {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "--- Anomaly Audit Report ---")?;
        writeln!(f, "Unauthorized Discounts Found: {}", self.unauthorized_discounts)?;
        write!(f, "Phantom Inventory Records Found: {}", self.phantom_inventory)?;

        if !self.discount_sample.is_empty() {
            write!(f, "\n\nSample of Discounts:")?;
            for s in &self.discount_sample {
                write!(f, "\n{}  {:.1}%", s.location_id, s.discount_percentage)?;
            }
        }
        Ok(())
    }
}
