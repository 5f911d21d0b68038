//! Sensitivity input files
//!
//! Input files are TOML documents holding one table per curve sensitivity:
//!
//! ```toml
//! [[sensitivities]]
//! curve = "USD-DSC"
//! currency = "USD"
//! values = [1.0, 2.0, -0.5]
//! parameters = ["1Y", "2Y", "5Y"]   # optional
//! ```

use std::path::Path;

use market_core::market_data::curves::{CurveMetadata, CurveName, ParameterMetadata};
use market_core::types::Currency;
use market_risk::sensitivity::{CurveSensitivities, CurveSensitivity};
use serde::Deserialize;
use tracing::debug;

use crate::{CliError, Result};

#[derive(Debug, Deserialize)]
struct SensitivityFile {
    #[serde(default)]
    sensitivities: Vec<SensitivityRecord>,
}

#[derive(Debug, Deserialize)]
struct SensitivityRecord {
    curve: String,
    currency: String,
    values: Vec<f64>,
    parameters: Option<Vec<String>>,
}

impl SensitivityRecord {
    fn into_sensitivity(self) -> Result<CurveSensitivity> {
        let name = CurveName::of(self.curve)?;
        let metadata = match self.parameters {
            Some(labels) => {
                CurveMetadata::with_parameters(name, labels.into_iter().map(ParameterMetadata::labelled))
            }
            None => CurveMetadata::of(name),
        };
        let currency: Currency = self.currency.parse()?;
        Ok(CurveSensitivity::of(metadata, currency, self.values)?)
    }
}

/// Parse sensitivities from TOML text, combining entries for the same curve and currency
pub fn parse_sensitivities(content: &str, origin: &str) -> Result<CurveSensitivities> {
    let file: SensitivityFile = toml::from_str(content).map_err(|e| CliError::InvalidInput {
        path: origin.to_string(),
        reason: e.to_string(),
    })?;
    let records = file.sensitivities.len();
    let sensitivities = file
        .sensitivities
        .into_iter()
        .map(SensitivityRecord::into_sensitivity)
        .collect::<Result<Vec<_>>>()?;
    let combined = CurveSensitivities::of(sensitivities)?;
    debug!(origin, records, buckets = combined.len(), "loaded sensitivities");
    Ok(combined)
}

/// Load sensitivities from a file
pub fn load_sensitivities(path: &Path) -> Result<CurveSensitivities> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    parse_sensitivities(&content, &path.display().to_string())
}
