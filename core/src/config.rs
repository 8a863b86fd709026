use crate::error::{DashError, DashResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Knobs for the synthetic dataset. `Default` is the canonical dashboard
/// dataset: 100 records, amounts 8000..=20000, leakage 5..15%, six months.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub count:           usize,
    pub amount_min:      u64,
    pub amount_max:      u64,
    pub leakage_pct_min: f64,
    pub leakage_pct_max: f64,
    pub window_months:   u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            count:           100,
            amount_min:      8_000,
            amount_max:      20_000,
            leakage_pct_min: 5.0,
            leakage_pct_max: 15.0,
            window_months:   6,
        }
    }
}

impl GeneratorConfig {
    /// Load from a JSON file. Absent fields keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> DashResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {}: {e}", path.display()))?;
        let config: GeneratorConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> DashResult<()> {
        if self.amount_min > self.amount_max {
            return Err(DashError::InvalidConfig(format!(
                "amount_min {} exceeds amount_max {}",
                self.amount_min, self.amount_max
            )));
        }
        if !(0.0..=100.0).contains(&self.leakage_pct_min)
            || !(0.0..=100.0).contains(&self.leakage_pct_max)
        {
            return Err(DashError::InvalidConfig(
                "leakage percentages must lie in [0, 100]".into(),
            ));
        }
        if self.leakage_pct_min > self.leakage_pct_max {
            return Err(DashError::InvalidConfig(format!(
                "leakage_pct_min {} exceeds leakage_pct_max {}",
                self.leakage_pct_min, self.leakage_pct_max
            )));
        }
        Ok(())
    }
}
