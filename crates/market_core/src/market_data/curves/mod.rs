//! Curve identity and metadata.
//!
//! This module provides:
//! - [`CurveName`]: lexicographically ordered curve name
//! - [`CurveMetadata`]: curve name plus optional per-parameter metadata
//! - [`ParameterMetadata`]: label and node time of a single parameter

mod curve_name;
mod metadata;

pub use curve_name::CurveName;
pub use metadata::{CurveMetadata, ParameterMetadata};
