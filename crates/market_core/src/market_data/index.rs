//! Market indices.
//!
//! An [`Index`] names a published rate or price, such as an IBOR fixing, an
//! overnight rate, an FX fixing or an inflation price index. Only identity
//! matters here; fixing calendars and conventions live elsewhere.

use std::fmt;

use super::error::{require_name, MarketDataResult};

/// Family of an index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IndexKind {
    /// Term interbank offered rate (e.g. "GBP-LIBOR-3M", "EUR-EURIBOR-6M")
    Ibor,
    /// Overnight rate (e.g. "USD-SOFR", "JPY-TONAR")
    Overnight,
    /// FX fixing (e.g. "EUR/USD-ECB")
    Fx,
    /// Price index (e.g. "GB-RPI")
    Price,
}

/// Identity of a market index.
///
/// Indices are ordered by name first, then by kind.
///
/// # Examples
///
/// ```
/// use market_core::market_data::{Index, IndexKind};
///
/// let sofr = Index::overnight("USD-SOFR").unwrap();
/// assert_eq!(sofr.name(), "USD-SOFR");
/// assert_eq!(sofr.kind(), IndexKind::Overnight);
/// assert_eq!(sofr.to_string(), "USD-SOFR");
///
/// assert!(Index::ibor("").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawIndex"))]
pub struct Index {
    name: String,
    kind: IndexKind,
}

impl Index {
    /// Creates an index of the given kind.
    ///
    /// # Errors
    ///
    /// Returns `MarketDataError::MissingField` if the name is empty.
    pub fn new(name: impl Into<String>, kind: IndexKind) -> MarketDataResult<Self> {
        Ok(Self {
            name: require_name(name, "index")?,
            kind,
        })
    }

    /// Creates an IBOR index.
    pub fn ibor(name: impl Into<String>) -> MarketDataResult<Self> {
        Self::new(name, IndexKind::Ibor)
    }

    /// Creates an overnight index.
    pub fn overnight(name: impl Into<String>) -> MarketDataResult<Self> {
        Self::new(name, IndexKind::Overnight)
    }

    /// Creates an FX index.
    pub fn fx(name: impl Into<String>) -> MarketDataResult<Self> {
        Self::new(name, IndexKind::Fx)
    }

    /// Creates a price index.
    pub fn price(name: impl Into<String>) -> MarketDataResult<Self> {
        Self::new(name, IndexKind::Price)
    }

    /// Returns the index name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the index family.
    #[inline]
    pub fn kind(&self) -> IndexKind {
        self.kind
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Unvalidated form used to route deserialisation through [`Index::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawIndex {
    name: String,
    kind: IndexKind,
}

#[cfg(feature = "serde")]
impl TryFrom<RawIndex> for Index {
    type Error = super::error::MarketDataError;

    fn try_from(raw: RawIndex) -> Result<Self, Self::Error> {
        Self::new(raw.name, raw.kind)
    }
}
