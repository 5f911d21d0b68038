//! Aggregated sensitivities across curves and currencies.
//!
//! [`CurveSensitivities`] keeps at most one [`CurveSensitivity`] per
//! (curve name, currency) bucket, sorted by
//! [`CurveSensitivity::compare_key`]. Adding a sensitivity to an occupied
//! bucket sums the values elementwise.

use std::cmp::Ordering;

use market_core::market_data::curves::CurveName;
use market_core::market_data::MarketDataResult;
use market_core::types::{Currency, CurrencyAmount, FxConvertible, FxRateProvider};
use tracing::debug;

use super::curve_sensitivity::CurveSensitivity;
use super::error::ConversionError;

/// Collection of curve sensitivities bucketed by curve and currency.
///
/// # Examples
///
/// ```
/// use market_core::market_data::curves::{CurveMetadata, CurveName};
/// use market_core::types::Currency;
/// use market_risk::sensitivity::{CurveSensitivities, CurveSensitivity};
///
/// let dsc = CurveMetadata::of(CurveName::of("USD-DSC").unwrap());
/// let a = CurveSensitivity::of(dsc.clone(), Currency::USD, vec![1.0, 2.0]).unwrap();
/// let b = CurveSensitivity::of(dsc, Currency::USD, vec![0.5, 0.5]).unwrap();
///
/// let all = CurveSensitivities::of([a, b]).unwrap();
/// assert_eq!(all.len(), 1);
/// assert_eq!(all.iter().next().unwrap().values(), vec![1.5, 2.5]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawCurveSensitivities"))]
pub struct CurveSensitivities {
    sensitivities: Vec<CurveSensitivity>,
}

impl CurveSensitivities {
    /// Creates an empty collection.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a collection, combining entries that share a bucket.
    ///
    /// # Errors
    ///
    /// Returns `MarketDataError::InvalidArgument` if two entries in the same
    /// bucket have different lengths.
    pub fn of<I>(sensitivities: I) -> MarketDataResult<Self>
    where
        I: IntoIterator<Item = CurveSensitivity>,
    {
        let mut result = Self::empty();
        for sensitivity in sensitivities {
            result.insert(sensitivity)?;
        }
        Ok(result)
    }

    fn position(&self, curve_name: &CurveName, currency: Currency) -> Result<usize, usize> {
        self.sensitivities.binary_search_by(|existing| {
            existing
                .curve_name()
                .cmp(curve_name)
                .then_with(|| existing.currency().cmp(&currency))
        })
    }

    fn insert(&mut self, sensitivity: CurveSensitivity) -> MarketDataResult<()> {
        match self.position(sensitivity.curve_name(), sensitivity.currency()) {
            Ok(index) => {
                let merged = self.sensitivities[index].combined_with(&sensitivity)?;
                self.sensitivities[index] = merged;
            }
            Err(index) => self.sensitivities.insert(index, sensitivity),
        }
        Ok(())
    }

    /// Returns a collection with `sensitivity` added to its bucket.
    ///
    /// # Errors
    ///
    /// Returns `MarketDataError::InvalidArgument` if the bucket already holds
    /// a sensitivity of a different length.
    pub fn combined_with(&self, sensitivity: CurveSensitivity) -> MarketDataResult<Self> {
        let mut result = self.clone();
        result.insert(sensitivity)?;
        Ok(result)
    }

    /// Returns a collection holding the entries of both collections.
    pub fn merged_with(&self, other: &CurveSensitivities) -> MarketDataResult<Self> {
        let mut result = self.clone();
        for sensitivity in &other.sensitivities {
            result.insert(sensitivity.clone())?;
        }
        Ok(result)
    }

    /// Finds the sensitivity to a curve in a currency.
    pub fn get(&self, curve_name: &CurveName, currency: Currency) -> Option<&CurveSensitivity> {
        self.position(curve_name, currency)
            .ok()
            .map(|index| &self.sensitivities[index])
    }

    /// Number of buckets.
    pub fn len(&self) -> usize {
        self.sensitivities.len()
    }

    /// Returns true if the collection holds no sensitivity.
    pub fn is_empty(&self) -> bool {
        self.sensitivities.is_empty()
    }

    /// Iterates over the sensitivities in bucket order.
    pub fn iter(&self) -> std::slice::Iter<'_, CurveSensitivity> {
        self.sensitivities.iter()
    }

    /// Returns a collection with every value multiplied by `factor`.
    pub fn multiplied_by(&self, factor: f64) -> Self {
        self.map_sensitivities(|s| s * factor)
    }

    /// Returns a collection with `operator` applied to every value.
    pub fn map_sensitivities<F>(&self, operator: F) -> Self
    where
        F: Fn(f64) -> f64,
    {
        Self {
            sensitivities: self
                .sensitivities
                .iter()
                .map(|s| s.map_sensitivity(&operator))
                .collect(),
        }
    }

    /// Converts every entry to `result_currency`.
    ///
    /// Entries for the same curve in different currencies end up in the
    /// same bucket and are combined.
    ///
    /// # Errors
    ///
    /// Returns `ConversionError::Rate` if the provider has no rate, and
    /// `ConversionError::Combine` if colliding entries cannot be combined.
    pub fn converted_to<P>(
        &self,
        result_currency: Currency,
        rate_provider: &P,
    ) -> Result<Self, ConversionError<P::Error>>
    where
        P: FxRateProvider + ?Sized,
        P::Error: 'static,
    {
        let mut result = Self::empty();
        for sensitivity in &self.sensitivities {
            let converted = sensitivity
                .converted_to(result_currency, rate_provider)
                .map_err(ConversionError::Rate)?;
            result.insert(converted)?;
        }
        debug!(
            currency = %result_currency,
            before = self.len(),
            after = result.len(),
            "converted curve sensitivities"
        );
        Ok(result)
    }

    /// Sums the totals of every entry, expressed in `result_currency`.
    pub fn total<P>(&self, result_currency: Currency, rate_provider: &P) -> Result<CurrencyAmount, P::Error>
    where
        P: FxRateProvider + ?Sized,
    {
        let mut total = 0.0;
        for sensitivity in &self.sensitivities {
            total += sensitivity
                .total()
                .converted_to(result_currency, rate_provider)?
                .amount();
        }
        Ok(CurrencyAmount::of(result_currency, total))
    }
}

impl<'a> IntoIterator for &'a CurveSensitivities {
    type Item = &'a CurveSensitivity;
    type IntoIter = std::slice::Iter<'a, CurveSensitivity>;

    fn into_iter(self) -> Self::IntoIter {
        self.sensitivities.iter()
    }
}

impl IntoIterator for CurveSensitivities {
    type Item = CurveSensitivity;
    type IntoIter = std::vec::IntoIter<CurveSensitivity>;

    fn into_iter(self) -> Self::IntoIter {
        self.sensitivities.into_iter()
    }
}

/// Unvalidated form used to route deserialisation through [`CurveSensitivities::of`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawCurveSensitivities {
    sensitivities: Vec<CurveSensitivity>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawCurveSensitivities> for CurveSensitivities {
    type Error = market_core::market_data::MarketDataError;

    fn try_from(raw: RawCurveSensitivities) -> Result<Self, Self::Error> {
        Self::of(raw.sensitivities)
    }
}

/// Sorting helper for callers holding a plain list of sensitivities.
pub fn sort_by_compare_key(sensitivities: &mut [CurveSensitivity]) {
    sensitivities.sort_by(CurveSensitivity::compare_key);
}

/// Returns true if the slice is sorted by [`CurveSensitivity::compare_key`].
pub fn is_sorted_by_compare_key(sensitivities: &[CurveSensitivity]) -> bool {
    sensitivities
        .windows(2)
        .all(|pair| pair[0].compare_key(&pair[1]) != Ordering::Greater)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use market_core::market_data::curves::{CurveMetadata, ParameterMetadata};
    use market_core::market_data::MarketDataError;
    use market_core::types::{CurrencyError, FxMatrix};

    fn sens(curve: &str, currency: Currency, values: Vec<f64>) -> CurveSensitivity {
        CurveSensitivity::of(CurveMetadata::of(CurveName::of(curve).unwrap()), currency, values).unwrap()
    }

    fn fx() -> FxMatrix {
        FxMatrix::new()
            .with_rate(Currency::EUR, Currency::USD, 1.25)
            .unwrap()
    }

    #[test]
    fn test_of_sorts_and_buckets() {
        let all = CurveSensitivities::of([
            sens("USD-DSC", Currency::USD, vec![1.0]),
            sens("EUR-DSC", Currency::EUR, vec![2.0, 3.0]),
            sens("USD-DSC", Currency::EUR, vec![4.0]),
            sens("USD-DSC", Currency::USD, vec![5.0]),
        ])
        .unwrap();

        assert_eq!(all.len(), 3);
        let keys: Vec<(String, Currency)> = all
            .iter()
            .map(|s| (s.curve_name().to_string(), s.currency()))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("EUR-DSC".to_string(), Currency::EUR),
                ("USD-DSC".to_string(), Currency::EUR),
                ("USD-DSC".to_string(), Currency::USD),
            ]
        );
        let usd = all.get(&CurveName::of("USD-DSC").unwrap(), Currency::USD).unwrap();
        assert_eq!(usd.values(), vec![6.0]);
    }

    #[test]
    fn test_combined_with_length_mismatch() {
        let all = CurveSensitivities::of([sens("USD-DSC", Currency::USD, vec![1.0, 2.0])]).unwrap();
        assert!(matches!(
            all.combined_with(sens("USD-DSC", Currency::USD, vec![1.0])),
            Err(MarketDataError::InvalidArgument(_))
        ));
        // original unchanged
        assert_eq!(all.len(), 1);
    }

    #[test]
    fn test_merged_with() {
        let a = CurveSensitivities::of([sens("A", Currency::USD, vec![1.0])]).unwrap();
        let b = CurveSensitivities::of([
            sens("A", Currency::USD, vec![2.0]),
            sens("B", Currency::USD, vec![3.0]),
        ])
        .unwrap();
        let merged = a.merged_with(&b).unwrap();
        assert_eq!(merged.len(), 2);
        assert_eq!(
            merged.get(&CurveName::of("A").unwrap(), Currency::USD).unwrap().values(),
            vec![3.0]
        );
        assert!(merged.get(&CurveName::of("C").unwrap(), Currency::USD).is_none());
    }

    #[test]
    fn test_converted_to_merges_collisions() {
        let metadata = CurveMetadata::with_parameters(
            CurveName::of("USD-DSC").unwrap(),
            vec![ParameterMetadata::at("1Y", 1.0), ParameterMetadata::at("2Y", 2.0)],
        );
        let all = CurveSensitivities::of([
            CurveSensitivity::of(metadata.clone(), Currency::USD, vec![1.0, 1.0]).unwrap(),
            CurveSensitivity::of(metadata, Currency::EUR, vec![2.0, 4.0]).unwrap(),
        ])
        .unwrap();
        assert_eq!(all.len(), 2);

        let usd = all.converted_to(Currency::USD, &fx()).unwrap();
        assert_eq!(usd.len(), 1);
        let merged = usd.iter().next().unwrap();
        assert_eq!(merged.currency(), Currency::USD);
        assert_relative_eq!(merged.sensitivity()[0], 3.5, epsilon = 1e-12);
        assert_relative_eq!(merged.sensitivity()[1], 6.0, epsilon = 1e-12);
    }

    #[test]
    fn test_converted_to_rate_error() {
        let all = CurveSensitivities::of([sens("GBP-SONIA", Currency::GBP, vec![1.0])]).unwrap();
        match all.converted_to(Currency::USD, &fx()) {
            Err(ConversionError::Rate(CurrencyError::RateUnavailable { base, counter })) => {
                assert_eq!(base, Currency::GBP);
                assert_eq!(counter, Currency::USD);
            }
            other => panic!("Expected rate error, got {:?}", other),
        }
    }

    #[test]
    fn test_total_across_currencies() {
        let all = CurveSensitivities::of([
            sens("USD-DSC", Currency::USD, vec![1.0, 2.0, -0.5]),
            sens("EUR-DSC", Currency::EUR, vec![4.0]),
        ])
        .unwrap();
        let total = all.total(Currency::USD, &fx()).unwrap();
        assert_eq!(total.currency(), Currency::USD);
        assert_relative_eq!(total.amount(), 7.5, epsilon = 1e-12);

        assert_eq!(
            CurveSensitivities::empty().total(Currency::JPY, &fx()).unwrap(),
            CurrencyAmount::zero(Currency::JPY)
        );
    }

    #[test]
    fn test_scaling() {
        let all = CurveSensitivities::of([
            sens("A", Currency::USD, vec![1.0, -2.0]),
            sens("B", Currency::CHF, vec![0.5]),
        ])
        .unwrap();
        let doubled = all.multiplied_by(2.0);
        let values: Vec<Vec<f64>> = doubled.iter().map(CurveSensitivity::values).collect();
        assert_eq!(values, vec![vec![2.0, -4.0], vec![1.0]]);
        let abs: Vec<Vec<f64>> = all.map_sensitivities(f64::abs).into_iter().map(|s| s.values()).collect();
        assert_eq!(abs, vec![vec![1.0, 2.0], vec![0.5]]);
    }

    #[test]
    fn test_sort_helpers() {
        let mut list = vec![
            sens("B", Currency::USD, vec![1.0]),
            sens("A", Currency::USD, vec![1.0]),
            sens("A", Currency::EUR, vec![1.0]),
        ];
        assert!(!is_sorted_by_compare_key(&list));
        sort_by_compare_key(&mut list);
        assert!(is_sorted_by_compare_key(&list));
        assert_eq!(list[0].currency(), Currency::EUR);
    }
}
