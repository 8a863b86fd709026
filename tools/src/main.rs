//! leak-runner: headless renderer for the revenue-leakage dashboard.
//!
//! Usage:
//!   leak-runner --seed 42 --count 100
//!   leak-runner --session-db session.db --region North --risk Suspicious
//!   leak-runner --data-file transactions.json --from 2025-03-01 --to 2025-03-31 --json

use anyhow::{Context, Result};
use leakwatch_core::{
    clock::{Clock, SystemClock},
    config::GeneratorConfig,
    dataset,
    generator::TransactionGenerator,
    seed::{FixedSeed, SeedSource, SessionSeed},
    state::FilterState,
    store::{Session, SessionStore},
    transaction::Transaction,
    views::{DashboardView, RiskAnalysisView, SortOrder, TransactionTable},
};
use std::env;

#[derive(serde::Serialize)]
struct Report<'a> {
    filters:       &'a leakwatch_core::filter::FilterSet,
    dashboard:     DashboardView,
    risk_analysis: RiskAnalysisView,
    transactions:  TransactionTable,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let json = args.iter().any(|a| a == "--json");

    let mut config = match flag(&args, "--config") {
        Some(path) => GeneratorConfig::load(path)?,
        None => GeneratorConfig::default(),
    };
    if let Some(count) = flag(&args, "--count") {
        config.count = count.parse().context("--count must be a non-negative integer")?;
    }

    let transactions = load_transactions(&args, config)?;
    let mut state = FilterState::new(transactions);

    if let Some(region) = flag(&args, "--region") {
        state.set_region(region.parse()?);
    }
    if let Some(risk) = flag(&args, "--risk") {
        state.set_risk_level(risk.parse()?);
    }
    if let Some(txn_type) = flag(&args, "--type") {
        state.set_type(txn_type.parse()?);
    }
    if let Some(from) = flag(&args, "--from") {
        state.set_start_date(from)?;
    }
    if let Some(to) = flag(&args, "--to") {
        state.set_end_date(to)?;
    }
    let order: SortOrder = flag(&args, "--sort").unwrap_or("desc").parse()?;

    let report = Report {
        filters:       state.filters(),
        dashboard:     state.dashboard(),
        risk_analysis: state.risk_analysis(),
        transactions:  state.table(order),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn load_transactions(args: &[String], config: GeneratorConfig) -> Result<Vec<Transaction>> {
    if let Some(path) = flag(args, "--data-file") {
        return dataset::load_file(path).with_context(|| format!("Cannot load {path}"));
    }

    let clock = SystemClock;
    let generator = match flag(args, "--seed") {
        Some(seed) => {
            let seed = FixedSeed(seed.parse().context("--seed must be an integer")?);
            TransactionGenerator::new(&seed, &clock, config)?
        }
        None => {
            let db = flag(args, "--session-db").unwrap_or(":memory:");
            let store = SessionStore::open(db)?;
            store.migrate()?;
            let session = match flag(args, "--session") {
                Some(id) => Session::resume(id),
                None => Session::new(),
            };
            let seeds = SessionSeed::new(&store, &session, &clock);
            log::info!("Session {} seed {}", session.id, seeds.seed()?);
            TransactionGenerator::new(&seeds, &clock, config)?
        }
    };

    let (start, end) = generator.window();
    log::info!("Seed {} window {start}..={end} today {}", generator.seed(), clock.today());
    Ok(generator.generate())
}

fn print_report(report: &Report<'_>) {
    let d = &report.dashboard;
    println!("=== DASHBOARD ===");
    println!("  total revenue:       {}", d.total_revenue);
    println!("  revenue leakage:     {}% ({} total)", d.leakage_percentage, d.total_leakage);
    println!("  total transactions:  {}", d.total_transactions);
    println!("  suspicious:          {} ({:.1}% of total)", d.suspicious_count, d.suspicious_share);
    println!("  average transaction: {:.2}", d.average_transaction);
    println!("  revenue by month:");
    for cv in &d.revenue_by_month {
        println!("    {:<10} {}", cv.category, cv.value);
    }
    println!("  revenue by region:");
    for cv in &d.revenue_by_region {
        println!("    {:<10} {}", cv.category, cv.value);
    }
    println!("  risk distribution:");
    for cv in &d.risk_distribution {
        println!("    {:<10} {}", cv.category, cv.value);
    }

    let r = &report.risk_analysis;
    println!();
    println!("=== RISK ANALYSIS ===");
    println!("  total suspicious:    {}", r.total_suspicious);
    println!("  suspicious rate:     {:.1}%", r.suspicious_rate);
    println!("  suspicious amount:   {}", r.suspicious_amount);
    println!("  highest risk score:  {:.2}", r.highest_risk_score);
    for cv in &r.suspicious_trend {
        println!("    {:<10} {}", cv.category, cv.value);
    }

    let t = &report.transactions;
    println!();
    println!("=== TRANSACTIONS ({:?}) ===", t.order);
    println!(
        "  {:<10}  {:<6}  {:>8}  {:>7}  {:>5}  {:<10}  {:<8}",
        "date", "region", "amount", "leakage", "risk", "status", "type"
    );
    for txn in &t.rows {
        println!(
            "  {:<10}  {:<6}  {:>8}  {:>7}  {:>5.2}  {:<10}  {:<8}",
            txn.date.format("%Y-%m-%d").to_string(),
            txn.region.as_str(),
            txn.amount,
            txn.leakage,
            txn.risk_score,
            txn.status.as_str(),
            txn.txn_type.as_str(),
        );
    }
    println!("  Showing {} transactions", t.len());
}

fn flag<'a>(args: &'a [String], name: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == name)
        .map(|w| w[1].as_str())
}
