//! Application configuration loading and validation.
//!
//! Configuration is loaded from a TOML file; every section has working
//! defaults so the CLI runs without a config file present.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::path::Path;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{ConfigError, Result};

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub budget: BudgetConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Budget defaults applied when the CLI is not given an explicit amount.
#[derive(Debug, Clone, Deserialize)]
pub struct BudgetConfig {
    /// Total budget to allocate across platforms.
    #[serde(default = "default_total_budget")]
    pub total: Decimal,
}

fn default_total_budget() -> Decimal {
    Decimal::from(10_000)
}

impl Default for BudgetConfig {
    fn default() -> Self {
        Self {
            total: default_total_budget(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// "pretty" or "json".
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;

        let config: Config = toml::from_str(&content).map_err(ConfigError::Parse)?;

        config.validate()?;

        Ok(config)
    }

    /// Load from `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    fn validate(&self) -> Result<()> {
        if self.budget.total <= Decimal::ZERO {
            return Err(ConfigError::InvalidValue {
                field: "budget.total",
                reason: format!("must be positive, got {}", self.budget.total),
            }
            .into());
        }
        Ok(())
    }

    /// Initialize the global tracing subscriber from the logging section.
    ///
    /// Logs go to stderr so stdout stays clean for CSV/JSON piping.
    pub fn init_logging(&self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.logging.level));

        match self.logging.format.as_str() {
            "json" => {
                fmt()
                    .json()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
            _ => {
                fmt()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            budget: BudgetConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}
