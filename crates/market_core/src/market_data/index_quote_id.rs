//! Identifier for the quoted value of an index.
//!
//! An [`IndexQuoteId`] reads as "the value of field F of index I, observed
//! via source S". The same identifier addresses both the current value and
//! the historic time-series of the index.

use std::fmt;

use super::index::Index;
use super::observable::{FieldName, ObservableId, ObservableSource};

/// Identifier used to access the observed value of an index.
///
/// Equality, hashing and ordering are structural over
/// (index, field name, observable source).
///
/// # Examples
///
/// ```
/// use market_core::market_data::{FieldName, Index, IndexQuoteId, ObservableId, ObservableSource};
///
/// let index = Index::ibor("GBP-LIBOR-3M").unwrap();
/// let id = IndexQuoteId::of(index.clone());
/// assert_eq!(id.field_name(), &FieldName::MARKET_VALUE);
/// assert_eq!(id.observable_source(), &ObservableSource::NONE);
///
/// let vendor = ObservableSource::of("Vendor").unwrap();
/// let sourced = id.with_observable_source(vendor.clone());
/// assert_eq!(sourced, IndexQuoteId::new(index, FieldName::MARKET_VALUE, vendor));
/// assert_ne!(sourced, id);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndexQuoteId {
    index: Index,
    field_name: FieldName,
    observable_source: ObservableSource,
}

impl IndexQuoteId {
    /// Identifier for the market value of `index`, from no specific source.
    pub fn of(index: Index) -> Self {
        Self::new(index, FieldName::MARKET_VALUE, ObservableSource::NONE)
    }

    /// Identifier for a specific field of `index`, from no specific source.
    pub fn of_field(index: Index, field_name: FieldName) -> Self {
        Self::new(index, field_name, ObservableSource::NONE)
    }

    /// Fully specified identifier.
    pub fn new(index: Index, field_name: FieldName, observable_source: ObservableSource) -> Self {
        Self {
            index,
            field_name,
            observable_source,
        }
    }

    /// Returns the index.
    #[inline]
    pub fn index(&self) -> &Index {
        &self.index
    }
}

impl ObservableId for IndexQuoteId {
    fn field_name(&self) -> &FieldName {
        &self.field_name
    }

    fn observable_source(&self) -> &ObservableSource {
        &self.observable_source
    }

    fn with_observable_source(&self, source: ObservableSource) -> Self {
        Self::new(self.index.clone(), self.field_name.clone(), source)
    }
}

impl fmt::Display for IndexQuoteId {
    /// Formats as `index/field@source`, e.g. `USD-SOFR/MarketValue@None`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}@{}",
            self.index, self.field_name, self.observable_source
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market_data::IndexKind;
    use proptest::prelude::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn sofr() -> Index {
        Index::overnight("USD-SOFR").unwrap()
    }

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_of_field_keeps_default_source() {
        let bid = FieldName::of("Bid").unwrap();
        let id = IndexQuoteId::of_field(sofr(), bid.clone());
        assert_eq!(id.field_name(), &bid);
        assert!(id.observable_source().is_none());
        assert_eq!(id.index(), &sofr());
    }

    #[test]
    fn test_with_source_replaces_only_source() {
        let id = IndexQuoteId::of_field(sofr(), FieldName::of("Ask").unwrap());
        let feed = ObservableSource::of("Feed").unwrap();
        let updated = id.with_observable_source(feed.clone());

        assert_eq!(updated.index(), id.index());
        assert_eq!(updated.field_name(), id.field_name());
        assert_eq!(updated.observable_source(), &feed);
        // original untouched
        assert!(id.observable_source().is_none());
    }

    #[test]
    fn test_display() {
        let id = IndexQuoteId::of(sofr());
        assert_eq!(id.to_string(), "USD-SOFR/MarketValue@None");
    }

    #[test]
    fn test_usable_as_map_key() {
        use std::collections::HashMap;

        let mut quotes = HashMap::new();
        quotes.insert(IndexQuoteId::of(sofr()), 0.0531);
        let lookup = IndexQuoteId::of_field(
            Index::overnight("USD-SOFR").unwrap(),
            FieldName::of("MarketValue").unwrap(),
        );
        assert_eq!(quotes.get(&lookup), Some(&0.0531));
    }

    fn name_strategy() -> impl Strategy<Value = String> {
        "[A-Z]{2,4}(-[A-Z0-9]{1,6}){0,2}"
    }

    fn index_strategy() -> impl Strategy<Value = Index> {
        let kind = prop::sample::select(vec![
            IndexKind::Ibor,
            IndexKind::Overnight,
            IndexKind::Fx,
            IndexKind::Price,
        ]);
        (name_strategy(), kind).prop_map(|(name, kind)| Index::new(name, kind).unwrap())
    }

    fn field_strategy() -> impl Strategy<Value = FieldName> {
        name_strategy().prop_map(|name| FieldName::of(name).unwrap())
    }

    fn source_strategy() -> impl Strategy<Value = ObservableSource> {
        name_strategy().prop_map(|name| ObservableSource::of(name).unwrap())
    }

    proptest! {
        #[test]
        fn test_of_uses_defaults(index in index_strategy()) {
            prop_assert_eq!(
                IndexQuoteId::of(index.clone()),
                IndexQuoteId::new(index.clone(), FieldName::default(), ObservableSource::default())
            );
            prop_assert_eq!(
                IndexQuoteId::of(index.clone()),
                IndexQuoteId::of_field(index, FieldName::MARKET_VALUE)
            );
        }

        #[test]
        fn test_with_same_source_is_noop(
            index in index_strategy(),
            field in field_strategy(),
            source in source_strategy()
        ) {
            let id = IndexQuoteId::new(index, field, source.clone());
            let updated = id.with_observable_source(source);
            prop_assert_eq!(hash_of(&updated), hash_of(&id));
            prop_assert_eq!(updated, id);
        }

        #[test]
        fn test_equal_ids_hash_equal(
            index in index_strategy(),
            field in field_strategy(),
            first in source_strategy(),
            second in source_strategy()
        ) {
            let a = IndexQuoteId::new(index.clone(), field.clone(), first);
            let b = IndexQuoteId::new(index, field, second);
            if a == b {
                prop_assert_eq!(hash_of(&a), hash_of(&b));
            } else {
                prop_assert_ne!(a.observable_source(), b.observable_source());
            }
        }
    }
}
