//! Trend indicators.
//!
//! - Moving average of the latest window
//! - SMA (Simple Moving Average) and its percentage envelope
//! - EMA (Exponential Moving Average)
//! - MACD (Moving Average Convergence Divergence)

mod ema;
mod envelope;
mod macd;
mod moving_average;
mod sma;

pub use ema::{ema, Ema, EmaConfig};
pub use envelope::{moving_average_envelope, Envelope, EnvelopeConfig, EnvelopeOutput};
pub use macd::{macd, Macd, MacdConfig, MacdPoint};
pub use moving_average::{moving_average, MovingAverage, MovingAverageConfig};
pub use sma::{simple_moving_average, Sma, SmaConfig};
