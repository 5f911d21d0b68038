//! Market data error types.
//!
//! This module provides structured error handling for the construction of
//! market data identifiers, curve metadata and sensitivities.

use thiserror::Error;

/// Market data construction errors.
///
/// # Variants
///
/// - `MissingField`: A required name was empty
/// - `InvalidArgument`: Inputs are inconsistent with each other
///
/// # Examples
///
/// ```
/// use market_core::market_data::MarketDataError;
///
/// let err = MarketDataError::MissingField { field: "curve_name" };
/// assert_eq!(format!("{}", err), "Missing required field: curve_name");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MarketDataError {
    /// A required field was absent or empty.
    #[error("Missing required field: {field}")]
    MissingField {
        /// Name of the field
        field: &'static str,
    },

    /// Arguments violate an invariant of the value being built.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result alias for market data construction.
pub type MarketDataResult<T> = Result<T, MarketDataError>;

/// Validates that a required name is present and trims surrounding whitespace.
pub(crate) fn require_name(name: impl Into<String>, field: &'static str) -> MarketDataResult<String> {
    let name = name.into();
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(MarketDataError::MissingField { field });
    }
    if trimmed.len() == name.len() {
        Ok(name)
    } else {
        Ok(trimmed.to_string())
    }
}
