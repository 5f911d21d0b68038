//! Convert command implementation

use std::path::Path;

use market_core::types::{Currency, FxMatrix};
use market_risk::sensitivity::CurveSensitivities;
use tracing::info;

use crate::config::CliConfig;
use crate::input::load_sensitivities;
use crate::Result;

/// Run the convert command
pub fn run(input: &Path, currency: &str, config: &CliConfig) -> Result<()> {
    info!("Converting sensitivities...");
    info!("  Input: {}", input.display());
    info!("  Target currency: {}", currency);

    let target: Currency = currency.parse()?;
    let fx = config.fx_matrix()?;
    let sensitivities = load_sensitivities(input)?;

    for line in convert_report(&sensitivities, target, &fx)? {
        println!("{}", line);
    }

    info!("Conversion complete");
    Ok(())
}

/// Convert every sensitivity into `target` and render one line per result.
///
/// Entries that land on the same curve after conversion are combined.
pub fn convert_report(
    sensitivities: &CurveSensitivities,
    target: Currency,
    fx: &FxMatrix,
) -> Result<Vec<String>> {
    let converted = sensitivities.converted_to(target, fx)?;
    Ok(converted.iter().map(ToString::to_string).collect())
}
