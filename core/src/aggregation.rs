//! Aggregation functions over a transaction collection.
//!
//! RULES:
//!   - Every function is pure and total. Empty input yields 0 (or an
//!     empty / zeroed grouping), never an error.
//!   - Ratios are rounded once, on the already-summed totals.
//!   - Monetary sums are integers; they are never rounded.

use crate::{
    transaction::Transaction,
    types::{Amount, RiskStatus},
};
use serde::{Deserialize, Serialize};

/// One bar/slice of a grouped series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryValue {
    pub category: String,
    pub value:    u64,
}

impl CategoryValue {
    pub fn new(category: impl Into<String>, value: u64) -> Self {
        Self { category: category.into(), value }
    }
}

pub fn total_revenue(txns: &[Transaction]) -> Amount {
    txns.iter().map(|t| t.amount).sum()
}

pub fn total_leakage(txns: &[Transaction]) -> Amount {
    txns.iter().map(|t| t.leakage).sum()
}

/// Leakage as a share of revenue, in percent, two decimals.
pub fn leakage_percentage(txns: &[Transaction]) -> f64 {
    let revenue = total_revenue(txns);
    if revenue == 0 {
        return 0.0;
    }
    round2(total_leakage(txns) as f64 / revenue as f64 * 100.0)
}

pub fn average_transaction(txns: &[Transaction]) -> f64 {
    if txns.is_empty() {
        return 0.0;
    }
    round2(total_revenue(txns) as f64 / txns.len() as f64)
}

pub fn suspicious_count(txns: &[Transaction]) -> usize {
    txns.iter().filter(|t| t.is_suspicious()).count()
}

/// Revenue per calendar month name, first-encountered order.
/// Months from different years share a bucket.
pub fn group_revenue_by_month(txns: &[Transaction]) -> Vec<CategoryValue> {
    group_sum(txns, |t| t.month_name())
}

/// Revenue per region, first-encountered order.
pub fn group_revenue_by_region(txns: &[Transaction]) -> Vec<CategoryValue> {
    group_sum(txns, |t| t.region.as_str())
}

/// Always exactly `[Normal, Suspicious]`, zero counts included.
pub fn group_risk_distribution(txns: &[Transaction]) -> Vec<CategoryValue> {
    RiskStatus::ALL
        .iter()
        .map(|status| {
            let count = txns.iter().filter(|t| t.status == *status).count();
            CategoryValue::new(status.as_str(), count as u64)
        })
        .collect()
}

// ── Risk analysis helpers ────────────────────────────────────────────────────

pub fn suspicious_transactions(txns: &[Transaction]) -> Vec<Transaction> {
    txns.iter().filter(|t| t.is_suspicious()).copied().collect()
}

/// Σ amount over suspicious records.
pub fn suspicious_amount(txns: &[Transaction]) -> Amount {
    txns.iter().filter(|t| t.is_suspicious()).map(|t| t.amount).sum()
}

/// Suspicious share of the collection, in percent, one decimal.
pub fn suspicious_percentage(txns: &[Transaction]) -> f64 {
    if txns.is_empty() {
        return 0.0;
    }
    round1(suspicious_count(txns) as f64 / txns.len() as f64 * 100.0)
}

pub fn highest_risk_score(txns: &[Transaction]) -> f64 {
    txns.iter().map(|t| t.risk_score).fold(0.0, f64::max)
}

// ── Rounding ─────────────────────────────────────────────────────────────────

/// Round half away from zero to two decimals.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round half away from zero to one decimal.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn group_sum(
    txns: &[Transaction],
    key: impl Fn(&Transaction) -> &'static str,
) -> Vec<CategoryValue> {
    let mut groups: Vec<(&'static str, u64)> = Vec::new();
    for txn in txns {
        let k = key(txn);
        match groups.iter_mut().find(|(name, _)| *name == k) {
            Some((_, sum)) => *sum += txn.amount,
            None => groups.push((k, txn.amount)),
        }
    }
    groups
        .into_iter()
        .map(|(name, sum)| CategoryValue::new(name, sum))
        .collect()
}
