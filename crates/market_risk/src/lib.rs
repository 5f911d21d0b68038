//! # market_risk: Curve Sensitivities
//!
//! Per-curve parameter sensitivities and their aggregation.
//!
//! This crate provides:
//! - [`sensitivity::CurveSensitivity`]: the sensitivity of a value to each
//!   calibration parameter of one curve, in one currency
//! - [`sensitivity::CurveSensitivities`]: sensitivities bucketed by
//!   (curve name, currency), combined elementwise
//! - Currency conversion of both through any
//!   [`FxRateProvider`](market_core::types::FxRateProvider)
//!
//! Sensitivities are computed upstream; this crate only stores, scales,
//! converts and sums them.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            market_risk                  │
//! │  sensitivity/ - CurveSensitivity,      │
//! │                 CurveSensitivities      │
//! └─────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────┐
//! │            market_core                  │
//! │  Currency, FX, curve metadata          │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use market_core::market_data::curves::{CurveMetadata, CurveName};
//! use market_core::types::{Currency, FxConvertible, FxMatrix};
//! use market_risk::sensitivity::CurveSensitivity;
//!
//! let metadata = CurveMetadata::of(CurveName::of("EUR-DSC").unwrap());
//! let eur = CurveSensitivity::of(metadata, Currency::EUR, vec![100.0, -40.0]).unwrap();
//!
//! let fx = FxMatrix::new().with_rate(Currency::EUR, Currency::USD, 1.10).unwrap();
//! let usd = eur.converted_to(Currency::USD, &fx).unwrap();
//! assert_eq!(usd.currency(), Currency::USD);
//! assert!((usd.total().amount() - 66.0).abs() < 1e-10);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation; deserialised sensitivities are validated

#![warn(missing_docs)]

pub mod sensitivity;
