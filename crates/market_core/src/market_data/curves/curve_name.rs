//! Curve names.

use std::fmt;
use std::str::FromStr;

use crate::market_data::error::{require_name, MarketDataError, MarketDataResult};

/// Name of a curve, such as "USD-DSC" or "EUR-EURIBOR-3M".
///
/// Names are compared and ordered lexicographically on their string form.
///
/// # Example
///
/// ```
/// use market_core::market_data::curves::CurveName;
///
/// let name = CurveName::of("USD-DSC").unwrap();
/// assert_eq!(name.as_str(), "USD-DSC");
/// assert!(CurveName::of("EUR-DSC").unwrap() < name);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct CurveName(String);

impl CurveName {
    /// Creates a curve name.
    ///
    /// # Errors
    ///
    /// Returns `MarketDataError::MissingField` if the name is empty.
    pub fn of(name: impl Into<String>) -> MarketDataResult<Self> {
        require_name(name, "curve_name").map(Self)
    }

    /// Return the string representation of the curve name.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for CurveName {
    type Err = MarketDataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::of(s)
    }
}

impl TryFrom<String> for CurveName {
    type Error = MarketDataError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Self::of(name)
    }
}

impl From<CurveName> for String {
    fn from(name: CurveName) -> Self {
        name.0
    }
}

impl AsRef<str> for CurveName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurveName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
