//! Prelude module for convenient imports.
//!
//! ```rust
//! use ta_core::prelude::*;
//!
//! let candle = Candle::new(0, 100.0, 105.0, 98.0, 103.0, 1_000_000.0);
//! assert_eq!(candle.field(CandleField::Close), 103.0);
//! ```

// Core types
pub use crate::candle::Candle;
pub use crate::field::{CandleField, FieldSelector};
pub use crate::num::TaFloat;
pub use crate::series::Series;

// Error types
pub use crate::error::{IndicatorError, Result};

// Traits
pub use crate::traits::{Indicator, IndicatorConfig};

// Utility functions
pub use crate::utils::{mean, mean_absolute_deviation, population_variance};
