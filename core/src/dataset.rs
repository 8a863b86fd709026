//! Static dataset source: a JSON array of transaction records.
//!
//! Records loaded here must satisfy the same invariants the generator
//! guarantees, so views never see a record the generator could not make.

use crate::{
    error::{DashError, DashResult},
    transaction::Transaction,
    types::RiskStatus,
};
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

/// Parse and validate a dataset. Any bad record rejects the whole set.
pub fn load_json<R: Read>(reader: R) -> DashResult<Vec<Transaction>> {
    let txns: Vec<Transaction> = serde_json::from_reader(reader)?;
    validate(&txns)?;
    log::debug!("Loaded {} transactions from static source", txns.len());
    Ok(txns)
}

pub fn load_file(path: impl AsRef<Path>) -> DashResult<Vec<Transaction>> {
    let file = std::fs::File::open(path.as_ref())?;
    load_json(std::io::BufReader::new(file))
}

/// Serialize in the same shape `load_json` accepts.
pub fn to_json(txns: &[Transaction]) -> DashResult<String> {
    Ok(serde_json::to_string_pretty(txns)?)
}

pub fn validate(txns: &[Transaction]) -> DashResult<()> {
    let mut seen = HashSet::with_capacity(txns.len());
    for txn in txns {
        if let Err(reason) = check_record(txn) {
            log::warn!("Rejected transaction {}: {reason}", txn.id);
            return Err(DashError::InvalidRecord { id: txn.id, reason });
        }
        if !seen.insert(txn.id) {
            log::warn!("Rejected transaction {}: duplicate id", txn.id);
            return Err(DashError::InvalidRecord {
                id:     txn.id,
                reason: "duplicate id".into(),
            });
        }
    }
    Ok(())
}

fn check_record(txn: &Transaction) -> Result<(), String> {
    if !(0.0..=1.0).contains(&txn.risk_score) {
        return Err(format!("risk score {} outside [0, 1]", txn.risk_score));
    }
    let expected = RiskStatus::from_score(txn.risk_score);
    if txn.status != expected {
        return Err(format!(
            "status {} does not match risk score {} (expected {expected})",
            txn.status, txn.risk_score
        ));
    }
    if txn.leakage > txn.amount {
        return Err(format!("leakage {} exceeds amount {}", txn.leakage, txn.amount));
    }
    Ok(())
}
