//! Page-level views. Each is a plain serializable snapshot computed from
//! a collection; rebuild it whenever the filtered collection changes.

use crate::{
    aggregation::{self, CategoryValue},
    transaction::Transaction,
    types::Amount,
};
use serde::{Deserialize, Serialize};

/// KPIs and chart series for the overview page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub total_revenue:        Amount,
    pub total_leakage:        Amount,
    pub leakage_percentage:   f64,
    pub average_transaction:  f64,
    pub total_transactions:   usize,
    pub suspicious_count:     usize,
    /// Suspicious share of all transactions, one decimal.
    pub suspicious_share:     f64,
    pub revenue_by_month:     Vec<CategoryValue>,
    pub revenue_by_region:    Vec<CategoryValue>,
    pub risk_distribution:    Vec<CategoryValue>,
}

impl DashboardView {
    pub fn build(txns: &[Transaction]) -> Self {
        Self {
            total_revenue:       aggregation::total_revenue(txns),
            total_leakage:       aggregation::total_leakage(txns),
            leakage_percentage:  aggregation::leakage_percentage(txns),
            average_transaction: aggregation::average_transaction(txns),
            total_transactions:  txns.len(),
            suspicious_count:    aggregation::suspicious_count(txns),
            suspicious_share:    aggregation::suspicious_percentage(txns),
            revenue_by_month:    aggregation::group_revenue_by_month(txns),
            revenue_by_region:   aggregation::group_revenue_by_region(txns),
            risk_distribution:   aggregation::group_risk_distribution(txns),
        }
    }
}

/// Suspicious-activity KPIs over a filtered collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskAnalysisView {
    pub total_suspicious:   usize,
    /// Suspicious / filtered × 100, one decimal. 0 when nothing matched.
    pub suspicious_rate:    f64,
    pub suspicious_amount:  Amount,
    pub highest_risk_score: f64,
    /// Suspicious revenue per month name.
    pub suspicious_trend:   Vec<CategoryValue>,
}

impl RiskAnalysisView {
    pub fn build(filtered: &[Transaction]) -> Self {
        let suspicious = aggregation::suspicious_transactions(filtered);
        Self {
            total_suspicious:   suspicious.len(),
            suspicious_rate:    aggregation::suspicious_percentage(filtered),
            suspicious_amount:  aggregation::suspicious_amount(filtered),
            highest_risk_score: aggregation::highest_risk_score(filtered),
            suspicious_trend:   aggregation::group_revenue_by_month(&suspicious),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn toggle(self) -> Self {
        match self {
            Self::Asc  => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

impl std::str::FromStr for SortOrder {
    type Err = crate::error::DashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc"  => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other  => Err(crate::error::DashError::UnknownVariant {
                kind:  "sort order",
                value: other.to_string(),
            }),
        }
    }
}

/// Filtered rows ordered by amount. Ties keep their input order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionTable {
    pub order: SortOrder,
    pub rows:  Vec<Transaction>,
}

impl TransactionTable {
    pub fn build(filtered: &[Transaction], order: SortOrder) -> Self {
        let mut rows = filtered.to_vec();
        match order {
            SortOrder::Asc  => rows.sort_by(|a, b| a.amount.cmp(&b.amount)),
            SortOrder::Desc => rows.sort_by(|a, b| b.amount.cmp(&a.amount)),
        }
        Self { order, rows }
    }

    /// Re-sort in the opposite direction.
    pub fn toggled(&self) -> Self {
        Self::build(&self.rows, self.order.toggle())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
