//! # ta-core
//!
//! Core types and traits for the ta-report technical analysis workspace.
//!
//! - [`TaFloat`] - Trait for numeric types (f32/f64)
//! - [`Series`] - Owned output sequence
//! - [`Candle`] - OHLCV price bar
//! - [`CandleField`] and [`FieldSelector`] - Typed choice of which scalar an indicator reads
//! - [`Indicator`] - Batch indicator trait
//! - [`IndicatorError`] - The explicit failure mode
//!
//! ## Feature Flags
//!
//! - `serde` - Enable serialization/deserialization support
//!
//! ## Example
//!
//! ```rust
//! use ta_core::prelude::*;
//!
//! let closes: Series<f64> = Series::from_vec(vec![100.0, 101.5, 99.8, 102.3, 101.0]);
//! assert!((mean(closes.as_slice()) - 100.92).abs() < 1e-9);
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod candle;
pub mod error;
pub mod field;
pub mod num;
pub mod prelude;
pub mod series;
pub mod traits;
pub mod utils;

// Re-export core types at crate root
pub use candle::Candle;
pub use error::{IndicatorError, Result};
pub use field::{CandleField, FieldSelector, ParseFieldError};
pub use num::TaFloat;
pub use series::Series;
pub use traits::{Indicator, IndicatorConfig};
