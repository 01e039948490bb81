use crate::domain::ports::LoanConfiguration;
use crate::error::{LoanError, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Process-wide loan bounds.
///
/// `min_period` is only used to validate incoming requests; evaluation itself reads
/// the three bounds exposed through [`LoanConfiguration`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoanConfig {
    pub min_amount: Decimal,
    pub max_amount: Decimal,
    pub min_period: u32,
    pub max_period: u32,
}

impl Default for LoanConfig {
    fn default() -> Self {
        Self {
            min_amount: dec!(2000),
            max_amount: dec!(10000),
            min_period: 12,
            max_period: 60,
        }
    }
}

impl LoanConfig {
    /// Reads a JSON document. Missing fields keep their defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let config: Self = serde_json::from_reader(BufReader::new(file))?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_amount <= Decimal::ZERO {
            return Err(LoanError::ConfigError(
                "min_amount must be positive".to_string(),
            ));
        }
        if self.min_amount > self.max_amount {
            return Err(LoanError::ConfigError(format!(
                "min_amount {} exceeds max_amount {}",
                self.min_amount, self.max_amount
            )));
        }
        if self.max_period == 0 {
            return Err(LoanError::ConfigError(
                "max_period must be positive".to_string(),
            ));
        }
        if self.min_period > self.max_period {
            return Err(LoanError::ConfigError(format!(
                "min_period {} exceeds max_period {}",
                self.min_period, self.max_period
            )));
        }
        Ok(())
    }
}

impl LoanConfiguration for LoanConfig {
    fn min_amount(&self) -> Decimal {
        self.min_amount
    }

    fn max_amount(&self) -> Decimal {
        self.max_amount
    }

    fn max_period(&self) -> u32 {
        self.max_period
    }
}
