//! Tags used to address observable market data.
//!
//! This module provides:
//! - [`FieldName`]: which field of a market data record holds the value
//! - [`ObservableSource`]: where the observed value came from
//! - [`ObservableId`]: the common interface of observable identifiers

use std::borrow::Cow;
use std::fmt;

use super::error::{require_name, MarketDataError, MarketDataResult};

/// Name of the field in a market data record that holds a value.
///
/// The most common field is [`FieldName::MARKET_VALUE`], which is also the
/// default.
///
/// # Examples
///
/// ```
/// use market_core::market_data::FieldName;
///
/// assert_eq!(FieldName::default(), FieldName::MARKET_VALUE);
/// assert_eq!(FieldName::MARKET_VALUE.name(), "MarketValue");
///
/// let bid = FieldName::of("Bid").unwrap();
/// assert_eq!(bid.to_string(), "Bid");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct FieldName(Cow<'static, str>);

impl FieldName {
    /// The market value of the item, such as the mid price or rate.
    pub const MARKET_VALUE: FieldName = FieldName(Cow::Borrowed("MarketValue"));

    /// Creates a field name.
    ///
    /// # Errors
    ///
    /// Returns `MarketDataError::MissingField` if the name is empty.
    pub fn of(name: impl Into<String>) -> MarketDataResult<Self> {
        Ok(Self(Cow::Owned(require_name(name, "field_name")?)))
    }

    /// Returns the name.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl Default for FieldName {
    fn default() -> Self {
        Self::MARKET_VALUE
    }
}

impl TryFrom<String> for FieldName {
    type Error = MarketDataError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Self::of(name)
    }
}

impl From<FieldName> for String {
    fn from(value: FieldName) -> Self {
        value.0.into_owned()
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Source of observable market data, such as a vendor or an internal feed.
///
/// [`ObservableSource::NONE`] means that no particular source is required;
/// it is the default.
///
/// # Examples
///
/// ```
/// use market_core::market_data::ObservableSource;
///
/// assert_eq!(ObservableSource::default(), ObservableSource::NONE);
/// assert!(ObservableSource::NONE.is_none());
/// assert!(!ObservableSource::of("Vendor").unwrap().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct ObservableSource(Cow<'static, str>);

impl ObservableSource {
    /// No specific source.
    pub const NONE: ObservableSource = ObservableSource(Cow::Borrowed("None"));

    /// Creates a source tag.
    ///
    /// # Errors
    ///
    /// Returns `MarketDataError::MissingField` if the name is empty.
    pub fn of(name: impl Into<String>) -> MarketDataResult<Self> {
        Ok(Self(Cow::Owned(require_name(name, "observable_source")?)))
    }

    /// Returns the name.
    pub fn name(&self) -> &str {
        &self.0
    }

    /// Returns true for the [`ObservableSource::NONE`] tag.
    pub fn is_none(&self) -> bool {
        *self == Self::NONE
    }
}

impl Default for ObservableSource {
    fn default() -> Self {
        Self::NONE
    }
}

impl TryFrom<String> for ObservableSource {
    type Error = MarketDataError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Self::of(name)
    }
}

impl From<ObservableSource> for String {
    fn from(value: ObservableSource) -> Self {
        value.0.into_owned()
    }
}

impl fmt::Display for ObservableSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a piece of observable market data.
///
/// Implementors are immutable; [`ObservableId::with_observable_source`]
/// returns a new identifier.
pub trait ObservableId: Clone + Eq + std::hash::Hash + fmt::Debug {
    /// Field of the market data record holding the value.
    fn field_name(&self) -> &FieldName;

    /// Source the value must be observed from.
    fn observable_source(&self) -> &ObservableSource;

    /// Returns an identifier equal to this one except for its source.
    fn with_observable_source(&self, source: ObservableSource) -> Self;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owned_equals_borrowed_constant() {
        assert_eq!(FieldName::of("MarketValue").unwrap(), FieldName::MARKET_VALUE);
        assert_eq!(ObservableSource::of("None").unwrap(), ObservableSource::NONE);
    }

    #[test]
    fn test_empty_names_rejected() {
        assert_eq!(
            FieldName::of(""),
            Err(MarketDataError::MissingField {
                field: "field_name"
            })
        );
        assert_eq!(
            ObservableSource::of("\t"),
            Err(MarketDataError::MissingField {
                field: "observable_source"
            })
        );
    }

    #[test]
    fn test_try_from_string_validates() {
        assert_eq!(FieldName::try_from("Bid".to_string()).unwrap().name(), "Bid");
        assert!(FieldName::try_from("  ".to_string()).is_err());
        assert!(ObservableSource::try_from(String::new()).is_err());
        assert_eq!(String::from(ObservableSource::NONE), "None");
    }

    #[test]
    fn test_hash_consistent_with_eq() {
        use std::collections::HashSet;

        let set: HashSet<FieldName> = [
            FieldName::MARKET_VALUE,
            FieldName::of("MarketValue").unwrap(),
            FieldName::of("Ask").unwrap(),
        ]
        .into_iter()
        .collect();
        assert_eq!(set.len(), 2);
    }
}
