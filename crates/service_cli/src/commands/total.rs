//! Total command implementation
//!
//! Sums sensitivities, either into one reporting currency or per currency.

use std::collections::BTreeMap;
use std::path::Path;

use market_core::types::{Currency, CurrencyAmount, FxMatrix};
use market_risk::sensitivity::CurveSensitivities;
use tracing::info;

use crate::config::CliConfig;
use crate::input::load_sensitivities;
use crate::Result;

/// Run the total command
pub fn run(input: &Path, currency: Option<&str>, config: &CliConfig) -> Result<()> {
    info!("Totalling sensitivities...");
    info!("  Input: {}", input.display());

    let reporting_currency = match currency {
        Some(code) => Some(code.parse::<Currency>()?),
        None => config.reporting_currency,
    };
    let fx = config.fx_matrix()?;
    let sensitivities = load_sensitivities(input)?;

    for line in total_report(&sensitivities, reporting_currency, &fx)? {
        println!("{}", line);
    }

    info!("Total complete");
    Ok(())
}

/// Build the report lines: one per curve sensitivity, then the totals.
///
/// Without a reporting currency no conversion happens and one total is
/// reported for each currency present.
pub fn total_report(
    sensitivities: &CurveSensitivities,
    reporting_currency: Option<Currency>,
    fx: &FxMatrix,
) -> Result<Vec<String>> {
    let mut lines: Vec<String> = sensitivities
        .iter()
        .map(|s| format!("{} {}", s.curve_name(), s.total()))
        .collect();

    match reporting_currency {
        Some(currency) => {
            let total = sensitivities.total(currency, fx)?;
            lines.push(format!("TOTAL {}", total));
        }
        None => {
            let mut by_currency: BTreeMap<Currency, f64> = BTreeMap::new();
            for sensitivity in sensitivities {
                *by_currency.entry(sensitivity.currency()).or_default() += sensitivity.total().amount();
            }
            lines.extend(
                by_currency
                    .into_iter()
                    .map(|(currency, amount)| format!("TOTAL {}", CurrencyAmount::of(currency, amount))),
            );
        }
    }
    Ok(lines)
}
