//! Sensitivity of a value to the parameters of a single curve.
//!
//! A [`CurveSensitivity`] holds one value per curve parameter, expressed in
//! one currency. It is an immutable value: every operation returns a new
//! instance and the original is never modified.
//!
//! # Ownership of the sensitivity array
//!
//! The values live in an `Arc<[f64]>` that no instance ever mutates.
//! Inputs are copied (or moved) in at construction, and [`CurveSensitivity::values`]
//! hands out a fresh `Vec`, so no caller can observe a change through an
//! existing instance. Clones and same-currency conversions share the buffer.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use market_core::market_data::curves::{CurveMetadata, CurveName};
use market_core::market_data::{MarketDataError, MarketDataResult};
use market_core::types::{Currency, CurrencyAmount, FxConvertible, FxRateProvider};
use tracing::{debug, trace};

/// Per-parameter sensitivity to one curve, in one currency.
///
/// `PartialEq` compares metadata, currency and every value. For grouping
/// by curve and currency use [`CurveSensitivity::compare_key`], which
/// ignores the values.
///
/// # Examples
///
/// ```
/// use market_core::market_data::curves::{CurveMetadata, CurveName};
/// use market_core::types::{Currency, CurrencyAmount};
/// use market_risk::sensitivity::CurveSensitivity;
///
/// let metadata = CurveMetadata::of(CurveName::of("USD-DSC").unwrap());
/// let sens = CurveSensitivity::of(metadata, Currency::USD, vec![1.0, 2.0, -0.5]).unwrap();
///
/// assert_eq!(sens.parameter_count(), 3);
/// assert_eq!(sens.total(), CurrencyAmount::of(Currency::USD, 2.5));
/// assert_eq!(sens.multiplied_by(2.0).values(), vec![2.0, 4.0, -1.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawCurveSensitivity"))]
pub struct CurveSensitivity {
    metadata: CurveMetadata,
    currency: Currency,
    sensitivity: Arc<[f64]>,
}

impl CurveSensitivity {
    /// Creates a sensitivity from curve metadata, a currency and one value per parameter.
    ///
    /// # Errors
    ///
    /// Returns `MarketDataError::InvalidArgument` if the metadata carries a
    /// parameter list whose length differs from the number of values.
    pub fn of(
        metadata: CurveMetadata,
        currency: Currency,
        sensitivity: impl Into<Arc<[f64]>>,
    ) -> MarketDataResult<Self> {
        let result = Self {
            metadata,
            currency,
            sensitivity: sensitivity.into(),
        };
        result.validate()?;
        Ok(result)
    }

    fn validate(&self) -> MarketDataResult<()> {
        match self.metadata.parameter_count() {
            Some(count) if count != self.sensitivity.len() => {
                Err(MarketDataError::InvalidArgument(format!(
                    "Length of sensitivity ({}) and parameter metadata ({}) must match when metadata present for curve {}",
                    self.sensitivity.len(),
                    count,
                    self.curve_name()
                )))
            }
            _ => Ok(()),
        }
    }

    /// Builds a sibling instance that shares the metadata. `sensitivity`
    /// must have the current length, which keeps the metadata invariant.
    fn derived(&self, currency: Currency, sensitivity: Arc<[f64]>) -> Self {
        debug_assert_eq!(sensitivity.len(), self.sensitivity.len());
        Self {
            metadata: self.metadata.clone(),
            currency,
            sensitivity,
        }
    }

    fn mapped<F>(&self, operator: F, currency: Currency) -> Self
    where
        F: Fn(f64) -> f64,
    {
        self.derived(currency, self.sensitivity.iter().map(|&s| operator(s)).collect())
    }

    fn check_length(&self, len: usize) -> MarketDataResult<()> {
        if len != self.sensitivity.len() {
            return Err(MarketDataError::InvalidArgument(format!(
                "Length of sensitivity ({}) must match parameter count ({}) of curve {}",
                len,
                self.sensitivity.len(),
                self.curve_name()
            )));
        }
        Ok(())
    }

    //-------------------------------------------------------------------------
    /// Returns the curve metadata.
    #[inline]
    pub fn metadata(&self) -> &CurveMetadata {
        &self.metadata
    }

    /// Returns the currency of the values.
    #[inline]
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns the name of the curve.
    #[inline]
    pub fn curve_name(&self) -> &CurveName {
        self.metadata.curve_name()
    }

    /// Returns the number of curve parameters, i.e. the number of values.
    #[inline]
    pub fn parameter_count(&self) -> usize {
        self.sensitivity.len()
    }

    /// Returns a read-only view of the values, in parameter order.
    #[inline]
    pub fn sensitivity(&self) -> &[f64] {
        &self.sensitivity
    }

    /// Returns a copy of the values, in parameter order.
    ///
    /// The returned vector is owned by the caller; changing it has no
    /// effect on this instance.
    pub fn values(&self) -> Vec<f64> {
        self.sensitivity.to_vec()
    }

    //-------------------------------------------------------------------------
    /// Compares the grouping key of two sensitivities.
    ///
    /// Orders by curve name, then by currency code. The values are not
    /// considered, so two unequal instances may compare `Equal`: this is a
    /// bucketing order for aggregation, not an ordering consistent with `==`.
    pub fn compare_key(&self, other: &CurveSensitivity) -> Ordering {
        self.curve_name()
            .cmp(other.curve_name())
            .then_with(|| self.currency.cmp(&other.currency))
    }

    /// Returns an instance with every value multiplied by `factor`.
    pub fn multiplied_by(&self, factor: f64) -> Self {
        self.map_sensitivity(|s| s * factor)
    }

    /// Returns an instance with `operator` applied to each value.
    ///
    /// The operator is applied independently to each element, in parameter
    /// order. Currency and metadata are unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use market_core::market_data::curves::{CurveMetadata, CurveName};
    /// use market_core::types::Currency;
    /// use market_risk::sensitivity::CurveSensitivity;
    ///
    /// let metadata = CurveMetadata::of(CurveName::of("GBP-SONIA").unwrap());
    /// let sens = CurveSensitivity::of(metadata, Currency::GBP, vec![2.0, -4.0]).unwrap();
    /// assert_eq!(sens.map_sensitivity(|s| 1.0 / s).values(), vec![0.5, -0.25]);
    /// ```
    pub fn map_sensitivity<F>(&self, operator: F) -> Self
    where
        F: Fn(f64) -> f64,
    {
        self.mapped(operator, self.currency)
    }

    /// Returns an instance holding a copy of `sensitivity` instead of the current values.
    ///
    /// # Errors
    ///
    /// Returns `MarketDataError::InvalidArgument` if the number of values
    /// differs from [`CurveSensitivity::parameter_count`].
    pub fn with_sensitivity(&self, sensitivity: impl Into<Arc<[f64]>>) -> MarketDataResult<Self> {
        let sensitivity = sensitivity.into();
        self.check_length(sensitivity.len())?;
        Ok(self.derived(self.currency, sensitivity))
    }

    /// Returns an instance with `other` added elementwise to the values.
    ///
    /// # Errors
    ///
    /// Returns `MarketDataError::InvalidArgument` if the lengths differ.
    pub fn plus(&self, other: &[f64]) -> MarketDataResult<Self> {
        self.check_length(other.len())?;
        let summed = self
            .sensitivity
            .iter()
            .zip(other)
            .map(|(a, b)| a + b)
            .collect();
        Ok(self.derived(self.currency, summed))
    }

    /// Combines two sensitivities to the same curve in the same currency.
    ///
    /// # Errors
    ///
    /// Returns `MarketDataError::InvalidArgument` if the curve name or
    /// currency differ, or if the lengths differ.
    pub fn combined_with(&self, other: &CurveSensitivity) -> MarketDataResult<Self> {
        if self.compare_key(other) != Ordering::Equal {
            return Err(MarketDataError::InvalidArgument(format!(
                "Cannot combine sensitivity to {} in {} with sensitivity to {} in {}",
                self.curve_name(),
                self.currency,
                other.curve_name(),
                other.currency
            )));
        }
        trace!(curve = %self.curve_name(), currency = %self.currency, "combining curve sensitivities");
        self.plus(&other.sensitivity)
    }

    /// Returns the sum of the values, in this instance's currency.
    ///
    /// Values are summed left to right in parameter order.
    pub fn total(&self) -> CurrencyAmount {
        CurrencyAmount::of(self.currency, self.sensitivity.iter().sum())
    }
}

impl FxConvertible for CurveSensitivity {
    /// Converts the values to `result_currency`.
    ///
    /// When the currency already matches, the instance is returned as is and
    /// the provider is not consulted. Provider errors are returned unchanged.
    fn converted_to<P>(&self, result_currency: Currency, rate_provider: &P) -> Result<Self, P::Error>
    where
        P: FxRateProvider + ?Sized,
    {
        if self.currency == result_currency {
            return Ok(self.clone());
        }
        let fx_rate = rate_provider.fx_rate(self.currency, result_currency)?;
        debug!(
            curve = %self.curve_name(),
            from = %self.currency,
            to = %result_currency,
            fx_rate,
            "converting curve sensitivity"
        );
        Ok(self.mapped(|s| s * fx_rate, result_currency))
    }
}

impl fmt::Display for CurveSensitivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {:?}", self.curve_name(), self.currency, &*self.sensitivity)
    }
}

/// Unvalidated form used to route deserialisation through [`CurveSensitivity::of`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawCurveSensitivity {
    metadata: CurveMetadata,
    currency: Currency,
    sensitivity: Vec<f64>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawCurveSensitivity> for CurveSensitivity {
    type Error = MarketDataError;

    fn try_from(raw: RawCurveSensitivity) -> Result<Self, Self::Error> {
        Self::of(raw.metadata, raw.currency, raw.sensitivity)
    }
}
