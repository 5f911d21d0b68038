//! CLI error types

use market_core::market_data::MarketDataError;
use market_core::types::CurrencyError;
use market_risk::sensitivity::ConversionError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by CLI commands
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input file {path}: {reason}")]
    InvalidInput { path: String, reason: String },

    #[error(transparent)]
    MarketData(#[from] MarketDataError),

    #[error(transparent)]
    Currency(#[from] CurrencyError),

    #[error(transparent)]
    Conversion(#[from] ConversionError<CurrencyError>),
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
