//! Static dataset loading and validation.

use leakwatch_core::{
    dataset,
    error::DashError,
    generator,
    types::{Region, RiskStatus, TxnType},
};

const SAMPLE: &str = r#"[
  { "id": 1, "date": "2025-03-01", "region": "North", "type": "Online",
    "amount": 10000, "leakage": 1100, "riskScore": 0.8, "status": "Suspicious" },
  { "id": 2, "date": "2025-04-15", "region": "South", "type": "POS",
    "amount": 5000, "leakage": 300, "riskScore": 0.2, "status": "Normal" }
]"#;

#[test]
fn loads_well_formed_records() {
    let txns = dataset::load_json(SAMPLE.as_bytes()).expect("load");
    assert_eq!(txns.len(), 2);
    assert_eq!(txns[0].region, Region::North);
    assert_eq!(txns[1].txn_type, TxnType::Pos);
    assert_eq!(txns[1].status, RiskStatus::Normal);
    assert_eq!(txns[0].date.to_string(), "2025-03-01");
}

#[test]
fn export_reloads_to_the_same_records() {
    let txns = generator::generate(42, 25, chrono::NaiveDate::from_ymd_opt(2025, 6, 30).unwrap());
    let json = dataset::to_json(&txns).unwrap();
    assert!(json.contains("\"riskScore\""));
    assert!(json.contains("\"type\""));
    let reloaded = dataset::load_json(json.as_bytes()).unwrap();
    assert_eq!(reloaded.len(), txns.len());
    for (a, b) in reloaded.iter().zip(txns.iter()) {
        assert_eq!((a.id, a.date, a.region, a.txn_type), (b.id, b.date, b.region, b.txn_type));
        assert_eq!((a.amount, a.leakage, a.status), (b.amount, b.leakage, b.status));
        assert!((a.risk_score - b.risk_score).abs() < 1e-12);
    }
}

#[test]
fn rejects_status_inconsistent_with_score() {
    let bad = SAMPLE.replace(r#""riskScore": 0.2, "status": "Normal""#, r#""riskScore": 0.75, "status": "Normal""#);
    match dataset::load_json(bad.as_bytes()) {
        Err(DashError::InvalidRecord { id, .. }) => assert_eq!(id, 2),
        other => panic!("expected InvalidRecord, got {other:?}"),
    }
}

#[test]
fn rejects_leakage_above_amount() {
    let bad = SAMPLE.replace(r#""leakage": 300"#, r#""leakage": 6000"#);
    assert!(matches!(
        dataset::load_json(bad.as_bytes()),
        Err(DashError::InvalidRecord { id: 2, .. })
    ));
}

#[test]
fn rejects_duplicate_ids() {
    let bad = SAMPLE.replace(r#""id": 2"#, r#""id": 1"#);
    assert!(matches!(
        dataset::load_json(bad.as_bytes()),
        Err(DashError::InvalidRecord { id: 1, .. })
    ));
}

#[test]
fn rejects_unknown_enum_text() {
    let bad = SAMPLE.replace(r#""region": "North""#, r#""region": "NortH""#);
    assert!(matches!(
        dataset::load_json(bad.as_bytes()),
        Err(DashError::Serialization(_))
    ));
}
