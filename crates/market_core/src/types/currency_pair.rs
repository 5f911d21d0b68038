//! Quoted currency pairs.
//!
//! A [`CurrencyPair`] is a single FX quote: 1 unit of `base` is worth
//! `rate` units of `counter`. Quotes are the raw input of an
//! [`FxMatrix`](super::fx::FxMatrix).
//!
//! # Examples
//!
//! ```
//! use market_core::types::{Currency, CurrencyPair};
//!
//! let pair = CurrencyPair::new(Currency::USD, Currency::JPY, 150.0).unwrap();
//! assert_eq!(pair.code(), "USD/JPY");
//!
//! let inverted = pair.invert();
//! assert_eq!(inverted.base(), Currency::JPY);
//! assert_eq!(inverted.counter(), Currency::USD);
//! ```

use std::fmt;

use super::currency::Currency;
use super::error::CurrencyError;

/// A currency pair quoted at a spot exchange rate.
///
/// The convention is BASE/COUNTER, meaning 1 unit of BASE = `rate` units of
/// COUNTER.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurrencyPair {
    base: Currency,
    counter: Currency,
    rate: f64,
}

impl CurrencyPair {
    /// Creates a new currency pair.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyError::SameCurrency` if base and counter are the same.
    /// Returns `CurrencyError::InvalidSpotRate` if the rate is not positive
    /// and finite.
    pub fn new(base: Currency, counter: Currency, rate: f64) -> Result<Self, CurrencyError> {
        if base == counter {
            return Err(CurrencyError::SameCurrency(base));
        }
        if !(rate.is_finite() && rate > 0.0) {
            return Err(CurrencyError::InvalidSpotRate(rate));
        }
        Ok(Self {
            base,
            counter,
            rate,
        })
    }

    /// Creates a pair from a code in `BASE/COUNTER` form.
    ///
    /// # Examples
    ///
    /// ```
    /// use market_core::types::{Currency, CurrencyPair};
    ///
    /// let pair = CurrencyPair::from_code("eur/usd", 1.10).unwrap();
    /// assert_eq!(pair.base(), Currency::EUR);
    /// assert_eq!(pair.counter(), Currency::USD);
    /// assert!(CurrencyPair::from_code("EURUSD", 1.10).is_err());
    /// ```
    pub fn from_code(code: &str, rate: f64) -> Result<Self, CurrencyError> {
        let (base, counter) = code
            .split_once('/')
            .ok_or_else(|| CurrencyError::ParseError(format!("expected BASE/COUNTER, got '{}'", code)))?;
        Self::new(base.parse()?, counter.parse()?, rate)
    }

    /// Returns the base currency.
    #[inline]
    pub fn base(&self) -> Currency {
        self.base
    }

    /// Returns the counter currency.
    #[inline]
    pub fn counter(&self) -> Currency {
        self.counter
    }

    /// Returns the spot exchange rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the currency pair code in standard format (BASE/COUNTER).
    pub fn code(&self) -> String {
        format!("{}/{}", self.base.code(), self.counter.code())
    }

    /// Creates an inverted currency pair (swaps base and counter).
    ///
    /// The rate is inverted: new_rate = 1 / old_rate.
    pub fn invert(&self) -> Self {
        Self {
            base: self.counter,
            counter: self.base,
            rate: 1.0 / self.rate,
        }
    }

    /// Converts an amount from base currency to counter currency.
    ///
    /// # Examples
    ///
    /// ```
    /// use market_core::types::{Currency, CurrencyPair};
    ///
    /// // EUR/USD = 1.10, so 100 EUR = 110 USD
    /// let pair = CurrencyPair::new(Currency::EUR, Currency::USD, 1.10).unwrap();
    /// assert!((pair.convert(100.0) - 110.0).abs() < 1e-10);
    /// ```
    #[inline]
    pub fn convert(&self, base_amount: f64) -> f64 {
        base_amount * self.rate
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.code(), self.rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_currency_pair_same_currency_error() {
        match CurrencyPair::new(Currency::USD, Currency::USD, 1.0) {
            Err(CurrencyError::SameCurrency(ccy)) => assert_eq!(ccy, Currency::USD),
            other => panic!("Expected SameCurrency error, got {:?}", other),
        }
    }

    #[test]
    fn test_currency_pair_invalid_rate_error() {
        assert!(matches!(
            CurrencyPair::new(Currency::EUR, Currency::USD, 0.0),
            Err(CurrencyError::InvalidSpotRate(_))
        ));
        assert!(CurrencyPair::new(Currency::EUR, Currency::USD, -1.0).is_err());
        assert!(CurrencyPair::new(Currency::EUR, Currency::USD, f64::NAN).is_err());
        assert!(CurrencyPair::new(Currency::EUR, Currency::USD, f64::INFINITY).is_err());
    }

    #[test]
    fn test_currency_pair_from_code() {
        let pair = CurrencyPair::from_code("GBP/CHF", 1.12).unwrap();
        assert_eq!(pair.code(), "GBP/CHF");
        assert_relative_eq!(pair.rate(), 1.12);

        assert!(matches!(
            CurrencyPair::from_code("GBP-CHF", 1.12),
            Err(CurrencyError::ParseError(_))
        ));
        assert!(matches!(
            CurrencyPair::from_code("GBP/XXX", 1.12),
            Err(CurrencyError::UnknownCurrency(_))
        ));
    }

    #[test]
    fn test_currency_pair_invert_roundtrip() {
        let eurusd = CurrencyPair::new(Currency::EUR, Currency::USD, 1.10).unwrap();
        let usdeur = eurusd.invert();

        assert_eq!(usdeur.code(), "USD/EUR");
        assert_relative_eq!(usdeur.rate(), 1.0 / 1.10, epsilon = 1e-12);
        assert_relative_eq!(usdeur.convert(eurusd.convert(100.0)), 100.0, epsilon = 1e-10);
    }

    #[test]
    fn test_currency_pair_equality_includes_rate() {
        let pair = CurrencyPair::new(Currency::EUR, Currency::USD, 1.10).unwrap();
        assert_eq!(pair, CurrencyPair::from_code("EUR/USD", 1.10).unwrap());
        assert_ne!(pair, CurrencyPair::new(Currency::EUR, Currency::USD, 1.20).unwrap());
        assert_ne!(pair, pair.invert());
    }
}
