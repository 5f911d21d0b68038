//! Error types for currency and FX operations.
//!
//! This module provides:
//! - `CurrencyError`: Errors from currency parsing, currency pairs,
//!   currency amount arithmetic and FX rate lookups

use thiserror::Error;

use super::currency::Currency;

/// Currency-related errors.
///
/// # Variants
/// - `UnknownCurrency`: Unknown currency code
/// - `ParseError`: Failed to parse a currency or currency pair string
/// - `SameCurrency`: Base and counter currencies are the same
/// - `InvalidSpotRate`: Spot rate is not positive and finite
/// - `CurrencyMismatch`: Arithmetic on amounts in different currencies
/// - `RateUnavailable`: No FX rate known for the requested pair
///
/// # Examples
/// ```
/// use market_core::types::{Currency, CurrencyError};
///
/// let err = CurrencyError::UnknownCurrency("XYZ".to_string());
/// assert_eq!(format!("{}", err), "Unknown currency: XYZ");
///
/// let err = CurrencyError::RateUnavailable { base: Currency::EUR, counter: Currency::JPY };
/// assert_eq!(format!("{}", err), "No FX rate available for EUR/JPY");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurrencyError {
    /// Unknown currency code.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    /// Failed to parse currency or currency pair string.
    #[error("Currency parse error: {0}")]
    ParseError(String),

    /// Base and counter currencies are the same.
    #[error("Base and counter currencies are the same: {0}")]
    SameCurrency(Currency),

    /// Spot rate is not positive.
    #[error("Invalid spot rate {0}: must be positive and finite")]
    InvalidSpotRate(f64),

    /// Two amounts in different currencies were combined.
    #[error("Currency mismatch: expected {expected}, got {actual}")]
    CurrencyMismatch {
        /// Currency of the receiving amount
        expected: Currency,
        /// Currency of the other amount
        actual: Currency,
    },

    /// The rate provider has no rate for the pair.
    #[error("No FX rate available for {base}/{counter}")]
    RateUnavailable {
        /// Currency being converted from
        base: Currency,
        /// Currency being converted to
        counter: Currency,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_error_display() {
        assert_eq!(
            CurrencyError::SameCurrency(Currency::USD).to_string(),
            "Base and counter currencies are the same: USD"
        );
        assert_eq!(
            CurrencyError::CurrencyMismatch {
                expected: Currency::USD,
                actual: Currency::GBP,
            }
            .to_string(),
            "Currency mismatch: expected USD, got GBP"
        );
        assert!(CurrencyError::InvalidSpotRate(-1.0)
            .to_string()
            .contains("-1"));
    }

    #[test]
    fn test_currency_error_is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
        assert_error(&CurrencyError::ParseError("bad".to_string()));
    }
}
