//! Market data vocabulary.
//!
//! This module provides identifiers for observable market data and the
//! metadata attached to calibrated curves.
//!
//! # Components
//!
//! - [`index`]: market index identity (`Index`, `IndexKind`)
//! - [`observable`]: `FieldName`, `ObservableSource` and the `ObservableId` trait
//! - [`index_quote_id`]: `IndexQuoteId`, the identifier of an index value
//! - [`curves`]: `CurveName`, `CurveMetadata`, `ParameterMetadata`
//! - [`error`]: market data error types (`MarketDataError`)
//!
//! # Example
//!
//! ```
//! use market_core::market_data::{Index, IndexQuoteId, ObservableId, ObservableSource};
//!
//! let id = IndexQuoteId::of(Index::ibor("EUR-EURIBOR-3M").unwrap());
//! assert_eq!(id.observable_source(), &ObservableSource::NONE);
//! ```

pub mod curves;
pub mod error;
pub mod index;
pub mod index_quote_id;
pub mod observable;

pub use curves::{CurveMetadata, CurveName, ParameterMetadata};
pub use error::{MarketDataError, MarketDataResult};
pub use index::{Index, IndexKind};
pub use index_quote_id::IndexQuoteId;
pub use observable::{FieldName, ObservableId, ObservableSource};
