//! Synthetic transaction generator.
//!
//! DRAW ORDER (fixed, never reordered — every record consumes the
//! stream in this sequence):
//!   1. amount
//!   2. risk score
//!   3. leakage percentage
//!   4. date
//!   5. region
//!   6. type
//!
//! One ParkMiller instance serves the whole batch. Never reseed per record.

use crate::{
    clock::Clock,
    config::GeneratorConfig,
    error::DashResult,
    rng::ParkMiller,
    seed::SeedSource,
    transaction::Transaction,
    types::{Region, TxnId, TxnType},
};
use chrono::{Days, Months, NaiveDate};

pub struct TransactionGenerator {
    seed:   i64,
    today:  NaiveDate,
    config: GeneratorConfig,
}

impl TransactionGenerator {
    /// Resolve the seed and the reference date up front, so every later
    /// `generate()` call on this instance returns the same dataset.
    pub fn new(
        seeds: &dyn SeedSource,
        clock: &dyn Clock,
        config: GeneratorConfig,
    ) -> DashResult<Self> {
        config.validate()?;
        Ok(Self::with_seed(seeds.seed()?, clock.today(), config))
    }

    pub fn with_seed(seed: i64, today: NaiveDate, config: GeneratorConfig) -> Self {
        Self { seed, today, config }
    }

    pub fn seed(&self) -> i64 {
        self.seed
    }

    /// The inclusive date window `[today - window_months, today]`.
    /// Month subtraction clamps to the end of a shorter month.
    pub fn window(&self) -> (NaiveDate, NaiveDate) {
        let start = self
            .today
            .checked_sub_months(Months::new(self.config.window_months))
            .unwrap_or(NaiveDate::MIN);
        (start, self.today)
    }

    /// Generate `config.count` records.
    pub fn generate(&self) -> Vec<Transaction> {
        self.generate_n(self.config.count)
    }

    /// Generate exactly `count` records with ids 1..=count.
    pub fn generate_n(&self, count: usize) -> Vec<Transaction> {
        let (start, end) = self.window();
        let span_days = (end - start).num_days().max(0) as usize;
        log::debug!(
            "Generating {count} transactions (seed {}, window {start}..={end})",
            self.seed
        );

        let mut rng = ParkMiller::new(self.seed);
        (1..=count)
            .map(|i| self.draw_record(i as TxnId, start, span_days, &mut rng))
            .collect()
    }

    fn draw_record(
        &self,
        id: TxnId,
        start: NaiveDate,
        span_days: usize,
        rng: &mut ParkMiller,
    ) -> Transaction {
        let cfg = &self.config;

        let amount = rng
            .uniform(cfg.amount_min as f64, cfg.amount_max as f64)
            .round() as u64;
        let risk_score = round_to(rng.next_f64(), 2);
        let leakage_pct = round_to(rng.uniform(cfg.leakage_pct_min, cfg.leakage_pct_max), 2);
        let leakage = (amount as f64 * (leakage_pct / 100.0)).round() as u64;

        let offset = rng.index_below(span_days + 1) as u64;
        let date = start.checked_add_days(Days::new(offset)).unwrap_or(start);

        let region = rng.pick(&Region::ALL);
        let txn_type = rng.pick(&TxnType::ALL);

        Transaction::new(id, date, region, txn_type, amount, leakage, risk_score)
    }
}

/// Generate `count` records with the default config.
pub fn generate(seed: i64, count: usize, today: NaiveDate) -> Vec<Transaction> {
    TransactionGenerator::with_seed(seed, today, GeneratorConfig::default()).generate_n(count)
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
