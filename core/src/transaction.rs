//! The transaction record. Immutable once built.

use crate::types::{Amount, Region, RiskStatus, TxnId, TxnType, MONTH_NAMES};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id:         TxnId,
    /// Serialized as `YYYY-MM-DD`.
    pub date:       NaiveDate,
    pub region:     Region,
    #[serde(rename = "type")]
    pub txn_type:   TxnType,
    pub amount:     Amount,
    pub leakage:    Amount,
    pub risk_score: f64,
    pub status:     RiskStatus,
}

impl Transaction {
    /// Build a record, deriving `status` from `risk_score`.
    pub fn new(
        id: TxnId,
        date: NaiveDate,
        region: Region,
        txn_type: TxnType,
        amount: Amount,
        leakage: Amount,
        risk_score: f64,
    ) -> Self {
        Self {
            id,
            date,
            region,
            txn_type,
            amount,
            leakage,
            risk_score,
            status: RiskStatus::from_score(risk_score),
        }
    }

    pub fn is_suspicious(&self) -> bool {
        self.status == RiskStatus::Suspicious
    }

    /// Calendar month abbreviation ("Jan".."Dec"). Year is ignored.
    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[self.date.month0() as usize]
    }
}
