//! Volatility indicators.
//!
//! - MAD (Mean Absolute Deviation)
//! - Bollinger Bands

mod bollinger;
mod mad;

pub use bollinger::{bollinger_bands, BandPoint, BollingerBands, BollingerConfig};
pub use mad::{mad, Mad, MadConfig};
