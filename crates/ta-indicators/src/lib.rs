//! # ta-indicators
//!
//! Technical indicators for the ta-report workspace.
//!
//! Every indicator is a pure function over a complete input: nothing is
//! cached between calls and calling twice with the same input gives the same
//! output. Each function also has a config-driven wrapper implementing
//! [`ta_core::Indicator`].
//!
//! - **Trend**: moving average, SMA, SMA envelope, EMA, MACD
//! - **Volatility**: MAD, Bollinger Bands
//! - **Momentum**: RSI
//! - **Volume**: Accumulation/Distribution
//!
//! Only [`moving_average`] fails explicitly. The others report short input
//! through empty or NaN-padded output and let IEEE-754 NaN and infinity
//! propagate from degenerate arithmetic.
//!
//! # Example
//!
//! ```
//! use ta_indicators::prelude::*;
//!
//! let closes = [44.34_f64, 44.09, 44.15, 43.61, 44.33, 44.83, 45.10];
//!
//! let sma = simple_moving_average(&closes, 3);
//! assert_eq!(sma.len(), closes.len() - 3);
//!
//! let bands = bollinger_bands(&closes, 3, 2.0);
//! assert_eq!(bands.len(), closes.len());
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod momentum;
pub mod trend;
pub mod volatility;
pub mod volume;

pub mod prelude;

pub use prelude::*;
