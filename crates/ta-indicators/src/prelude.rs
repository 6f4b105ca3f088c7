//! Prelude for ta-indicators.
//!
//! This module re-exports all commonly used types and functions.

// Momentum indicators
pub use crate::momentum::{rsi, Rsi, RsiConfig};

// Trend indicators
pub use crate::trend::{
    ema, macd, moving_average, moving_average_envelope, simple_moving_average,
    Ema, EmaConfig,
    Envelope, EnvelopeConfig, EnvelopeOutput,
    Macd, MacdConfig, MacdPoint,
    MovingAverage, MovingAverageConfig,
    Sma, SmaConfig,
};

// Volatility indicators
pub use crate::volatility::{
    bollinger_bands, mad,
    BandPoint, BollingerBands, BollingerConfig,
    Mad, MadConfig,
};

// Volume indicators
pub use crate::volume::{calculate_ad, AccumulationDistribution, AdConfig};
