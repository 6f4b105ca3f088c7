//! Volume indicators.
//!
//! - A/D (Accumulation/Distribution Line)

mod ad;

pub use ad::{calculate_ad, AccumulationDistribution, AdConfig};
