//! FX rate provision and currency conversion.
//!
//! This module provides:
//! - [`FxRateProvider`]: capability returning the rate between two currencies
//! - [`FxConvertible`]: values that can be re-expressed in another currency
//! - [`FxMatrix`]: an in-memory provider built from [`CurrencyPair`] quotes
//!
//! # Examples
//!
//! ```
//! use market_core::types::{Currency, FxMatrix, FxRateProvider};
//!
//! let matrix = FxMatrix::new()
//!     .with_rate(Currency::EUR, Currency::USD, 1.10)
//!     .unwrap();
//!
//! assert_eq!(matrix.fx_rate(Currency::EUR, Currency::USD).unwrap(), 1.10);
//! assert!((matrix.fx_rate(Currency::USD, Currency::EUR).unwrap() - 1.0 / 1.10).abs() < 1e-12);
//! assert!(matrix.fx_rate(Currency::USD, Currency::JPY).is_err());
//! ```

use std::collections::HashMap;

use tracing::trace;

use super::currency::Currency;
use super::currency_pair::CurrencyPair;
use super::error::CurrencyError;

/// A source of FX rates.
///
/// `fx_rate(base, counter)` returns the number of units of `counter` worth
/// one unit of `base`. Implementations decide what happens when no rate is
/// known; the error type is theirs and callers propagate it unchanged.
pub trait FxRateProvider {
    /// Error returned when a rate cannot be supplied.
    type Error: std::error::Error;

    /// Returns the rate converting `base` amounts into `counter` amounts.
    fn fx_rate(&self, base: Currency, counter: Currency) -> Result<f64, Self::Error>;
}

impl<P: FxRateProvider + ?Sized> FxRateProvider for &P {
    type Error = P::Error;

    fn fx_rate(&self, base: Currency, counter: Currency) -> Result<f64, Self::Error> {
        (**self).fx_rate(base, counter)
    }
}

/// A value that can be converted to another currency.
///
/// Conversion never mutates: the converted value is returned and the
/// original is left intact.
pub trait FxConvertible: Sized {
    /// Converts this value into `result_currency` using rates from `rate_provider`.
    fn converted_to<P>(&self, result_currency: Currency, rate_provider: &P) -> Result<Self, P::Error>
    where
        P: FxRateProvider + ?Sized;
}

/// In-memory FX rate provider.
///
/// Every quote is stored in both directions. A missing pair is
/// triangulated through a single intermediate currency, searched in code
/// order so that the result is deterministic.
#[derive(Debug, Clone, Default)]
pub struct FxMatrix {
    rates: HashMap<(Currency, Currency), f64>,
}

impl FxMatrix {
    /// Creates an empty matrix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a matrix from a set of quotes. Later quotes for the same
    /// pair replace earlier ones.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = CurrencyPair>,
    {
        let mut matrix = Self::new();
        for pair in pairs {
            matrix.add_pair(pair);
        }
        matrix
    }

    /// Returns the matrix with an additional quote.
    ///
    /// # Errors
    ///
    /// Fails with the validation errors of [`CurrencyPair::new`].
    pub fn with_rate(
        mut self,
        base: Currency,
        counter: Currency,
        rate: f64,
    ) -> Result<Self, CurrencyError> {
        self.add_pair(CurrencyPair::new(base, counter, rate)?);
        Ok(self)
    }

    /// Adds a quote, together with its inverse.
    pub fn add_pair(&mut self, pair: CurrencyPair) {
        let inverse = pair.invert();
        self.rates.insert((pair.base(), pair.counter()), pair.rate());
        self.rates.insert((inverse.base(), inverse.counter()), inverse.rate());
    }

    /// Number of directly quoted currency pairs.
    pub fn len(&self) -> usize {
        self.rates.len() / 2
    }

    /// Returns true if no quote has been added.
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    fn direct(&self, base: Currency, counter: Currency) -> Option<f64> {
        self.rates.get(&(base, counter)).copied()
    }
}

impl FxRateProvider for FxMatrix {
    type Error = CurrencyError;

    fn fx_rate(&self, base: Currency, counter: Currency) -> Result<f64, CurrencyError> {
        if base == counter {
            return Ok(1.0);
        }
        if let Some(rate) = self.direct(base, counter) {
            return Ok(rate);
        }
        Currency::ALL
            .into_iter()
            .filter(|via| *via != base && *via != counter)
            .find_map(|via| {
                let rate = self.direct(base, via)? * self.direct(via, counter)?;
                trace!(%base, %counter, %via, rate, "triangulated FX rate");
                Some(rate)
            })
            .ok_or(CurrencyError::RateUnavailable { base, counter })
    }
}

impl FromIterator<CurrencyPair> for FxMatrix {
    fn from_iter<I: IntoIterator<Item = CurrencyPair>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}
