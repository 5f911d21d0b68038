//! Curve parameter sensitivities.
//!
//! This module provides:
//! - [`CurveSensitivity`]: one value per curve parameter, in one currency
//! - [`CurveSensitivities`]: sensitivities bucketed by curve and currency
//! - [`ConversionError`]: failure while converting a collection to another currency

mod curve_sensitivities;
mod curve_sensitivity;
mod error;

pub use curve_sensitivities::{is_sorted_by_compare_key, sort_by_compare_key, CurveSensitivities};
pub use curve_sensitivity::CurveSensitivity;
pub use error::ConversionError;
