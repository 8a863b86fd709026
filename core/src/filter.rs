//! The filter predicate shared by every view.
//!
//! A transaction matches iff every active constraint holds. Inactive
//! constraints are `Selection::All` and empty date bounds.

use crate::{
    error::{DashError, DashResult},
    transaction::Transaction,
    types::{Region, RiskStatus, Selection, TxnType},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterSet {
    /// Inclusive lower bound. `""` in text form when unset.
    #[serde(with = "date_or_empty")]
    pub start_date: Option<NaiveDate>,
    /// Inclusive upper bound. `""` in text form when unset.
    #[serde(with = "date_or_empty")]
    pub end_date:   Option<NaiveDate>,
    pub region:     Selection<Region>,
    pub risk_level: Selection<RiskStatus>,
    #[serde(rename = "type")]
    pub txn_type:   Selection<TxnType>,
}

impl FilterSet {
    pub fn matches(&self, txn: &Transaction) -> bool {
        self.region.admits(&txn.region)
            && self.risk_level.admits(&txn.status)
            && self.txn_type.admits(&txn.txn_type)
            && self.start_date.map_or(true, |start| txn.date >= start)
            && self.end_date.map_or(true, |end| txn.date <= end)
    }

    /// True when no constraint is active.
    pub fn is_identity(&self) -> bool {
        *self == Self::default()
    }
}

/// Free-function form of `FilterSet::matches`.
pub fn matches(txn: &Transaction, filters: &FilterSet) -> bool {
    filters.matches(txn)
}

/// The matching records, in their original order. The input is untouched.
pub fn apply(txns: &[Transaction], filters: &FilterSet) -> Vec<Transaction> {
    txns.iter().filter(|t| filters.matches(t)).copied().collect()
}

/// Parse a date bound. `""` clears the bound; anything else must be a
/// fixed-width `YYYY-MM-DD` calendar date.
pub fn parse_date_bound(raw: &str) -> DashResult<Option<NaiveDate>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    if raw.len() != 10 {
        return Err(DashError::InvalidDate { value: raw.to_string() });
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| DashError::InvalidDate { value: raw.to_string() })
}

mod date_or_empty {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &Option<NaiveDate>, s: S) -> Result<S::Ok, S::Error> {
        match date {
            Some(d) => s.collect_str(&d.format("%Y-%m-%d")),
            None    => s.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveDate>, D::Error> {
        let raw = Option::<String>::deserialize(d)?.unwrap_or_default();
        super::parse_date_bound(&raw).map_err(de::Error::custom)
    }
}
