//! CLI configuration management
//!
//! Handles loading configuration from a TOML file, environment variables and
//! CLI arguments. Priority (highest to lowest):
//! 1. CLI arguments
//! 2. Environment variables
//! 3. Config file
//! 4. Default values

use std::path::Path;
use std::str::FromStr;

use market_core::types::{Currency, CurrencyPair, FxMatrix};
use serde::{Deserialize, Deserializer};
use thiserror::Error;

/// Environment variable overriding the log level.
pub const ENV_LOG_LEVEL: &str = "MARKET_LOG_LEVEL";
/// Environment variable overriding the reporting currency.
pub const ENV_REPORTING_CURRENCY: &str = "MARKET_REPORTING_CURRENCY";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid reporting currency: {0}")]
    InvalidCurrency(String),

    #[error("Invalid FX rate '{pair}': {reason}")]
    InvalidFxRate { pair: String, reason: String },

    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// A single FX quote in the config file, e.g. `{ pair = "EUR/USD", rate = 1.10 }`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FxRateEntry {
    pub pair: String,
    pub rate: f64,
}

/// CLI configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log level
    pub log_level: LogLevel,
    /// Currency totals are reported in, when not given on the command line
    #[serde(deserialize_with = "deserialize_currency")]
    pub reporting_currency: Option<Currency>,
    /// FX quotes used for currency conversion
    pub fx_rates: Vec<FxRateEntry>,
}

impl CliConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: CliConfig = toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::FileError(format!("Failed to read config file {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Apply overrides from a variable lookup, such as the process environment
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&level)?;
        }
        if let Some(code) = lookup(ENV_REPORTING_CURRENCY) {
            let currency: Currency = code.parse().map_err(|_| ConfigError::InvalidCurrency(code.clone()))?;
            self.reporting_currency = Some(currency);
        }
        self.validate()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.fx_matrix()?;
        Ok(())
    }

    /// Build the FX rate provider from the configured quotes
    pub fn fx_matrix(&self) -> Result<FxMatrix, ConfigError> {
        self.fx_rates
            .iter()
            .map(|entry| {
                CurrencyPair::from_code(&entry.pair, entry.rate).map_err(|e| ConfigError::InvalidFxRate {
                    pair: entry.pair.clone(),
                    reason: e.to_string(),
                })
            })
            .collect()
    }
}

/// Reads an ISO currency code, accepting any letter case
fn deserialize_currency<'de, D>(deserializer: D) -> Result<Option<Currency>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|code| code.parse::<Currency>().map_err(serde::de::Error::custom))
        .transpose()
}

/// Build configuration from all sources
///
/// A missing file is only an error when the path was given explicitly.
pub fn build_config(path: &Path, explicit: bool, verbose: bool) -> Result<CliConfig, ConfigError> {
    let mut config = if path.exists() || explicit {
        CliConfig::from_file(path)?
    } else {
        CliConfig::default()
    };

    config.apply_env(|key| std::env::var(key).ok())?;

    if verbose {
        config.log_level = LogLevel::Debug;
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use market_core::types::FxRateProvider;
    use std::collections::HashMap;
    use std::io::Write;

    const SAMPLE: &str = r#"
        log_level = "info"
        reporting_currency = "USD"

        [[fx_rates]]
        pair = "EUR/USD"
        rate = 1.10

        [[fx_rates]]
        pair = "USD/JPY"
        rate = 150.0
    "#;

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.log_level, LogLevel::Warn);
        assert!(config.reporting_currency.is_none());
        assert!(config.fx_rates.is_empty());
        assert!(config.fx_matrix().unwrap().is_empty());
    }

    #[test]
    fn test_toml_deserialization() {
        let config = CliConfig::from_toml_str(SAMPLE).unwrap();
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.reporting_currency, Some(Currency::USD));

        let fx = config.fx_matrix().unwrap();
        assert_eq!(fx.len(), 2);
        assert_eq!(fx.fx_rate(Currency::EUR, Currency::USD).unwrap(), 1.10);
    }

    #[test]
    fn test_partial_toml_deserialization() {
        let config = CliConfig::from_toml_str("reporting_currency = \"gbp\"").unwrap();
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.reporting_currency, Some(Currency::GBP));
    }

    #[test]
    fn test_invalid_entries_rejected() {
        match CliConfig::from_toml_str("reporting_currency = \"XXX\"") {
            Err(ConfigError::FileError(msg)) => assert!(msg.contains("XXX")),
            other => panic!("Expected FileError, got {:?}", other),
        }
        assert!(matches!(
            CliConfig::from_toml_str("[[fx_rates]]\npair = \"EURUSD\"\nrate = 1.1"),
            Err(ConfigError::InvalidFxRate { .. })
        ));
        assert!(matches!(
            CliConfig::from_toml_str("[[fx_rates]]\npair = \"EUR/USD\"\nrate = -1.0"),
            Err(ConfigError::InvalidFxRate { .. })
        ));
        assert!(matches!(
            CliConfig::from_toml_str("log_level = 3"),
            Err(ConfigError::FileError(_))
        ));
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [(ENV_LOG_LEVEL, "trace"), (ENV_REPORTING_CURRENCY, "chf")]
            .into_iter()
            .collect();
        let mut config = CliConfig::from_toml_str(SAMPLE).unwrap();
        config
            .apply_env(|key| vars.get(key).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(config.log_level, LogLevel::Trace);
        assert_eq!(config.reporting_currency, Some(Currency::CHF));

        let mut config = CliConfig::default();
        assert!(config
            .apply_env(|key| (key == ENV_LOG_LEVEL).then(|| "loud".to_string()))
            .is_err());
        assert!(matches!(
            config.apply_env(|key| (key == ENV_REPORTING_CURRENCY).then(|| "ZZZ".to_string())),
            Err(ConfigError::InvalidCurrency(_))
        ));
        assert!(config.reporting_currency.is_none());
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("Error").unwrap(), LogLevel::Error);
        assert!(LogLevel::from_str("invalid").is_err());
        assert_eq!(LogLevel::Info.to_string(), "info");
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let config = CliConfig::from_file(file.path()).unwrap();
        assert_eq!(config.fx_rates.len(), 2);

        let missing = file.path().with_extension("missing");
        assert!(matches!(
            CliConfig::from_file(&missing),
            Err(ConfigError::FileError(_))
        ));
    }
}
