//! Accumulation/Distribution Line (A/D).
//!
//! A running total of money flow volume: each bar adds its volume weighted by
//! where the close sits inside the bar's range.

use ta_core::{candle::Candle, error::Result, num::TaFloat, series::Series, traits::Indicator};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Accumulation/Distribution line over `candles`.
///
/// `AD[i] = AD[i-1] + money_flow_multiplier[i] * volume[i]`, starting from 0.
/// The output has one value per candle. A flat bar (`high == low`) divides by
/// zero; the resulting NaN or infinity is carried into every later value.
///
/// # Example
///
/// ```rust
/// use ta_core::Candle;
/// use ta_indicators::calculate_ad;
///
/// let candles = [
///     Candle::new(0, 10.0_f64, 12.0, 8.0, 12.0, 100.0), // close at high: +100
///     Candle::new(1, 12.0, 14.0, 10.0, 10.0, 50.0),     // close at low: -50
/// ];
/// assert_eq!(calculate_ad(&candles).as_slice(), &[100.0, 50.0]);
/// ```
#[must_use]
pub fn calculate_ad<T: TaFloat>(candles: &[Candle<T>]) -> Series<T> {
    candles
        .iter()
        .scan(T::ZERO, |ad, candle| {
            *ad = *ad + candle.money_flow_multiplier() * candle.volume;
            Some(*ad)
        })
        .collect()
}

/// Configuration for [`AccumulationDistribution`]. The line has no parameters.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct AdConfig {}

/// Accumulation/Distribution indicator.
///
/// # Formula
///
/// Money Flow Multiplier = ((Close - Low) - (High - Close)) / (High - Low)
/// Money Flow Volume = MFM * Volume
/// A/D = previous A/D + Money Flow Volume
#[derive(Debug, Clone)]
pub struct AccumulationDistribution<T: TaFloat> {
    config: AdConfig,
    _marker: core::marker::PhantomData<T>,
}

impl<T: TaFloat> Indicator<T> for AccumulationDistribution<T> {
    type Input = [Candle<T>];
    type Output = Series<T>;
    type Config = AdConfig;

    fn new(config: Self::Config) -> Self {
        Self {
            config,
            _marker: core::marker::PhantomData,
        }
    }

    fn config(&self) -> &Self::Config {
        &self.config
    }

    fn min_periods(&self) -> usize {
        1
    }

    fn calculate(&self, candles: &[Candle<T>]) -> Result<Self::Output> {
        Ok(calculate_ad(candles))
    }
}
