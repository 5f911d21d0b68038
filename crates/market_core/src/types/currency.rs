//! Currency types for financial calculations.
//!
//! This module provides ISO 4217 currency codes. Currencies are compared
//! and ordered by their three-letter code, which gives sensitivities and
//! amounts a stable, reproducible grouping order.
//!
//! # Examples
//!
//! ```
//! use market_core::types::currency::Currency;
//!
//! let usd = Currency::USD;
//! assert_eq!(usd.code(), "USD");
//!
//! // Ordering follows the ISO code, not declaration order
//! assert!(Currency::AUD < Currency::USD);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::error::CurrencyError;

/// ISO 4217 currency codes.
///
/// # Variants
/// - `USD`: United States Dollar
/// - `EUR`: Euro
/// - `GBP`: British Pound Sterling
/// - `JPY`: Japanese Yen
/// - `CHF`: Swiss Franc
/// - `AUD`: Australian Dollar
/// - `CAD`: Canadian Dollar
///
/// # Examples
///
/// ```
/// use market_core::types::currency::Currency;
///
/// // Parse from string (case-insensitive)
/// let eur: Currency = "eur".parse().unwrap();
/// assert_eq!(eur, Currency::EUR);
/// assert_eq!(eur.to_string(), "EUR");
/// ```
#[non_exhaustive]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Currency {
    /// United States Dollar
    USD,
    /// Euro
    EUR,
    /// British Pound Sterling
    GBP,
    /// Japanese Yen, no minor units
    JPY,
    /// Swiss Franc
    CHF,
    /// Australian Dollar
    AUD,
    /// Canadian Dollar
    CAD,
}

impl Currency {
    /// All supported currencies, in code order.
    pub const ALL: [Currency; 7] = [
        Currency::AUD,
        Currency::CAD,
        Currency::CHF,
        Currency::EUR,
        Currency::GBP,
        Currency::JPY,
        Currency::USD,
    ];

    /// Returns the ISO 4217 three-letter currency code.
    ///
    /// # Examples
    ///
    /// ```
    /// use market_core::types::currency::Currency;
    ///
    /// assert_eq!(Currency::GBP.code(), "GBP");
    /// assert_eq!(Currency::CAD.code(), "CAD");
    /// ```
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
            Currency::CHF => "CHF",
            Currency::AUD => "AUD",
            Currency::CAD => "CAD",
        }
    }
}

impl Ord for Currency {
    fn cmp(&self, other: &Self) -> Ordering {
        self.code().cmp(other.code())
    }
}

impl PartialOrd for Currency {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for Currency {
    type Err = CurrencyError;

    /// Parses ISO 4217 currency code (case-insensitive).
    ///
    /// # Examples
    ///
    /// ```
    /// use market_core::types::currency::Currency;
    ///
    /// let usd: Currency = "USD".parse().unwrap();
    /// assert_eq!(usd, Currency::USD);
    ///
    /// // Unknown currency returns error
    /// let result: Result<Currency, _> = "XYZ".parse();
    /// assert!(result.is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, CurrencyError> {
        let code = s.trim().to_uppercase();
        Currency::ALL
            .into_iter()
            .find(|ccy| ccy.code() == code)
            .ok_or_else(|| CurrencyError::UnknownCurrency(s.to_string()))
    }
}

impl fmt::Display for Currency {
    /// Formats as ISO 4217 code.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
