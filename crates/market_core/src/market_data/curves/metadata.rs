//! Curve metadata.
//!
//! This module provides:
//! - [`ParameterMetadata`]: description of a single curve parameter
//! - [`CurveMetadata`]: curve name plus optional per-parameter metadata
//!
//! When parameter metadata is present, anything indexed by curve parameter
//! (for example a sensitivity vector) must have exactly one entry per
//! parameter.

use std::sync::Arc;

use super::curve_name::CurveName;

/// Metadata for a single curve parameter, typically a node of the curve.
///
/// # Example
///
/// ```
/// use market_core::market_data::curves::ParameterMetadata;
///
/// let node = ParameterMetadata::at("2Y", 2.0);
/// assert_eq!(node.label(), "2Y");
/// assert_eq!(node.year_fraction(), Some(2.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParameterMetadata {
    label: String,
    year_fraction: Option<f64>,
}

impl ParameterMetadata {
    /// Parameter identified only by a label.
    pub fn labelled(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            year_fraction: None,
        }
    }

    /// Parameter at a curve node, with its time in years.
    pub fn at(label: impl Into<String>, year_fraction: f64) -> Self {
        Self {
            label: label.into(),
            year_fraction: Some(year_fraction),
        }
    }

    /// Returns the label.
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the node time in years, if known.
    #[inline]
    pub fn year_fraction(&self) -> Option<f64> {
        self.year_fraction
    }
}

/// Metadata describing a curve.
///
/// The parameter list is shared between clones, since metadata is attached
/// to every sensitivity computed against the curve.
///
/// # Example
///
/// ```
/// use market_core::market_data::curves::{CurveMetadata, CurveName, ParameterMetadata};
///
/// let name = CurveName::of("USD-DSC").unwrap();
/// let plain = CurveMetadata::of(name.clone());
/// assert_eq!(plain.parameter_count(), None);
///
/// let noded = CurveMetadata::with_parameters(
///     name,
///     vec![ParameterMetadata::at("1Y", 1.0), ParameterMetadata::at("5Y", 5.0)],
/// );
/// assert_eq!(noded.parameter_count(), Some(2));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurveMetadata {
    curve_name: CurveName,
    parameters: Option<Arc<[ParameterMetadata]>>,
}

impl CurveMetadata {
    /// Metadata with a curve name and no parameter list.
    pub fn of(curve_name: CurveName) -> Self {
        Self {
            curve_name,
            parameters: None,
        }
    }

    /// Metadata with one entry per curve parameter, in parameter order.
    pub fn with_parameters<I>(curve_name: CurveName, parameters: I) -> Self
    where
        I: IntoIterator<Item = ParameterMetadata>,
    {
        Self {
            curve_name,
            parameters: Some(parameters.into_iter().collect()),
        }
    }

    /// Returns the curve name.
    #[inline]
    pub fn curve_name(&self) -> &CurveName {
        &self.curve_name
    }

    /// Returns the parameter metadata, if present.
    #[inline]
    pub fn parameters(&self) -> Option<&[ParameterMetadata]> {
        self.parameters.as_deref()
    }

    /// Number of parameters described, or `None` when no parameter list is attached.
    #[inline]
    pub fn parameter_count(&self) -> Option<usize> {
        self.parameters.as_ref().map(|p| p.len())
    }
}
