//! Momentum indicators.
//!
//! - RSI (Relative Strength Index)

mod rsi;

pub use rsi::{rsi, Rsi, RsiConfig};
