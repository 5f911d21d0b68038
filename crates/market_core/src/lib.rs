//! # market_core: Market Data Vocabulary for neutryx-market
//!
//! ## Foundation Layer Role
//!
//! market_core is the bottom layer of the workspace, providing:
//! - Currency types: `Currency`, `CurrencyPair`, `CurrencyAmount` (`types`)
//! - FX conversion: `FxRateProvider`, `FxConvertible`, `FxMatrix` (`types::fx`)
//! - Observable identifiers: `Index`, `FieldName`, `ObservableSource`, `IndexQuoteId` (`market_data`)
//! - Curve metadata: `CurveName`, `CurveMetadata`, `ParameterMetadata` (`market_data::curves`)
//! - Error types: `CurrencyError`, `MarketDataError`
//!
//! All public types are immutable values: every operation that changes a
//! value returns a new one.
//!
//! ## Usage Examples
//!
//! ```rust
//! use market_core::market_data::{Index, IndexQuoteId, ObservableId, ObservableSource};
//! use market_core::types::{Currency, CurrencyAmount, FxConvertible, FxMatrix};
//!
//! // Identify the value of an index
//! let id = IndexQuoteId::of(Index::overnight("USD-SOFR").unwrap());
//! let sourced = id.with_observable_source(ObservableSource::of("Vendor").unwrap());
//! assert_ne!(id, sourced);
//!
//! // Convert an amount between currencies
//! let fx = FxMatrix::new().with_rate(Currency::GBP, Currency::USD, 1.25).unwrap();
//! let usd = CurrencyAmount::of(Currency::GBP, 100.0).converted_to(Currency::USD, &fx).unwrap();
//! assert!((usd.amount() - 125.0).abs() < 1e-10);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for currencies, identifiers and metadata

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod market_data;
pub mod types;
