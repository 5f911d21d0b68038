//! Currency and FX types.
//!
//! This module provides:
//! - `currency`: ISO 4217 currency codes ordered by code
//! - `currency_pair`: FX quotes between two currencies
//! - `currency_amount`: signed amounts in a single currency
//! - `fx`: the `FxRateProvider` capability, `FxConvertible` values and `FxMatrix`
//! - `error`: `CurrencyError`
//!
//! # Re-exports
//!
//! Commonly used types are re-exported at this module level.

pub mod currency;
pub mod currency_amount;
pub mod currency_pair;
pub mod error;
pub mod fx;

pub use currency::Currency;
pub use currency_amount::CurrencyAmount;
pub use currency_pair::CurrencyPair;
pub use error::CurrencyError;
pub use fx::{FxConvertible, FxMatrix, FxRateProvider};
