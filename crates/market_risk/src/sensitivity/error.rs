//! Sensitivity aggregation error types.

use market_core::market_data::MarketDataError;
use thiserror::Error;

/// Errors from converting a set of sensitivities to another currency.
///
/// Conversion can fail either because the rate provider has no rate, or
/// because two converted entries landing in the same bucket cannot be
/// combined.
#[derive(Debug, Error)]
pub enum ConversionError<E>
where
    E: std::error::Error + 'static,
{
    /// The rate provider could not supply a rate.
    #[error("FX rate lookup failed: {0}")]
    Rate(#[source] E),

    /// Converted entries sharing a curve and currency could not be combined.
    #[error(transparent)]
    Combine(#[from] MarketDataError),
}
