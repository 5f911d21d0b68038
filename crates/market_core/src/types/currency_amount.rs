//! An amount of money in a single currency.

use std::fmt;

use super::currency::Currency;
use super::error::CurrencyError;
use super::fx::{FxConvertible, FxRateProvider};

/// A signed amount in a specific currency.
///
/// # Examples
///
/// ```
/// use market_core::types::{Currency, CurrencyAmount};
///
/// let a = CurrencyAmount::of(Currency::USD, 2.5);
/// let b = CurrencyAmount::of(Currency::USD, 1.5);
/// assert_eq!(a.plus(b).unwrap(), CurrencyAmount::of(Currency::USD, 4.0));
/// assert_eq!(a.to_string(), "USD 2.5");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurrencyAmount {
    currency: Currency,
    amount: f64,
}

impl CurrencyAmount {
    /// Creates an amount in the given currency.
    #[inline]
    pub fn of(currency: Currency, amount: f64) -> Self {
        Self { currency, amount }
    }

    /// Creates a zero amount in the given currency.
    #[inline]
    pub fn zero(currency: Currency) -> Self {
        Self::of(currency, 0.0)
    }

    /// Returns the currency.
    #[inline]
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns the amount.
    #[inline]
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Adds an amount in the same currency.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyError::CurrencyMismatch` if the currencies differ.
    pub fn plus(&self, other: CurrencyAmount) -> Result<Self, CurrencyError> {
        if other.currency != self.currency {
            return Err(CurrencyError::CurrencyMismatch {
                expected: self.currency,
                actual: other.currency,
            });
        }
        Ok(Self::of(self.currency, self.amount + other.amount))
    }

    /// Returns the amount scaled by `factor`.
    pub fn multiplied_by(&self, factor: f64) -> Self {
        self.map_amount(|a| a * factor)
    }

    /// Returns the amount with the sign flipped.
    pub fn negated(&self) -> Self {
        self.map_amount(|a| -a)
    }

    /// Applies `operator` to the amount, keeping the currency.
    pub fn map_amount<F>(&self, operator: F) -> Self
    where
        F: FnOnce(f64) -> f64,
    {
        Self::of(self.currency, operator(self.amount))
    }
}

impl FxConvertible for CurrencyAmount {
    fn converted_to<P>(&self, result_currency: Currency, rate_provider: &P) -> Result<Self, P::Error>
    where
        P: FxRateProvider + ?Sized,
    {
        if self.currency == result_currency {
            return Ok(*self);
        }
        let rate = rate_provider.fx_rate(self.currency, result_currency)?;
        Ok(Self::of(result_currency, self.amount * rate))
    }
}

impl fmt::Display for CurrencyAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.currency, self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FxMatrix;
    use approx::assert_relative_eq;

    #[test]
    fn test_plus_mismatch() {
        let usd = CurrencyAmount::of(Currency::USD, 1.0);
        let eur = CurrencyAmount::of(Currency::EUR, 1.0);
        assert_eq!(
            usd.plus(eur),
            Err(CurrencyError::CurrencyMismatch {
                expected: Currency::USD,
                actual: Currency::EUR,
            })
        );
    }

    #[test]
    fn test_scaling() {
        let a = CurrencyAmount::of(Currency::GBP, 4.0);
        assert_eq!(a.multiplied_by(0.5).amount(), 2.0);
        assert_eq!(a.negated().amount(), -4.0);
        assert_eq!(a.negated().currency(), Currency::GBP);
        assert_eq!(CurrencyAmount::zero(Currency::JPY).amount(), 0.0);
    }

    #[test]
    fn test_converted_to() {
        let fx = FxMatrix::new()
            .with_rate(Currency::EUR, Currency::USD, 1.10)
            .unwrap();
        let eur = CurrencyAmount::of(Currency::EUR, 100.0);

        let usd = eur.converted_to(Currency::USD, &fx).unwrap();
        assert_eq!(usd.currency(), Currency::USD);
        assert_relative_eq!(usd.amount(), 110.0, epsilon = 1e-10);

        assert_eq!(eur.converted_to(Currency::EUR, &fx).unwrap(), eur);
        assert!(eur.converted_to(Currency::CHF, &fx).is_err());
    }
}
