//! Bollinger Bands indicator.
//!
//! Bollinger Bands are volatility bands placed above and below a moving average.

use ta_core::{
    error::Result,
    num::TaFloat,
    traits::Indicator,
    utils::{mean, population_variance},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One Bollinger Bands record.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: TaFloat"))]
pub struct BandPoint<T: TaFloat> {
    /// Upper band (middle + k * std).
    pub upper_band: T,
    /// Middle band (window mean).
    pub middle_band: T,
    /// Lower band (middle - k * std).
    pub lower_band: T,
}

impl<T: TaFloat> BandPoint<T> {
    /// Placeholder record for positions without a full window.
    #[must_use]
    pub fn nan() -> Self {
        Self {
            upper_band: T::NAN,
            middle_band: T::NAN,
            lower_band: T::NAN,
        }
    }

    /// Check if any component is NaN.
    #[must_use]
    pub fn is_nan(&self) -> bool {
        self.upper_band.is_nan() || self.middle_band.is_nan() || self.lower_band.is_nan()
    }
}

/// Bollinger Bands over a trailing window of `period` values.
///
/// The output always has one record per input value. Positions before the
/// first full window (`i < period - 1`) hold [`BandPoint::nan`]. From then on
/// the middle band is the window mean and the outer bands sit `deviation`
/// population standard deviations away from it.
///
/// A zero `period` never forms a window, so every record is NaN.
///
/// # Example
///
/// ```rust
/// use ta_indicators::bollinger_bands;
///
/// let bands = bollinger_bands(&[1.0_f64, 2.0, 3.0], 2, 2.0);
/// assert_eq!(bands.len(), 3);
/// assert!(bands[0].is_nan());
/// assert_eq!(bands[1].middle_band, 1.5);
/// assert_eq!(bands[1].upper_band, 2.5);
/// ```
#[must_use]
pub fn bollinger_bands<T: TaFloat>(data: &[T], period: usize, deviation: T) -> Vec<BandPoint<T>> {
    (0..data.len())
        .map(|i| {
            if period == 0 || i + 1 < period {
                return BandPoint::nan();
            }
            let window = &data[i + 1 - period..=i];
            let middle = mean(window);
            let std_dev = population_variance(window, middle).sqrt();
            BandPoint {
                upper_band: middle + deviation * std_dev,
                middle_band: middle,
                lower_band: middle - deviation * std_dev,
            }
        })
        .collect()
}

/// Configuration for Bollinger Bands.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct BollingerConfig {
    /// The window size for the moving average (default: 20).
    pub window: usize,
    /// Number of standard deviations for bands (default: 2.0).
    pub num_std: f64,
}

impl Default for BollingerConfig {
    fn default() -> Self {
        Self {
            window: 20,
            num_std: 2.0,
        }
    }
}

impl BollingerConfig {
    /// Create a new Bollinger Bands configuration.
    pub fn new(window: usize, num_std: f64) -> Self {
        Self { window, num_std }
    }
}

/// Bollinger Bands indicator.
///
/// # Formula
///
/// Middle = mean(Price, n)
/// StdDev = sqrt(sum((Price - Middle)^2) / n)  // Population std (ddof=0)
/// Upper = Middle + k * StdDev
/// Lower = Middle - k * StdDev
#[derive(Debug, Clone)]
pub struct BollingerBands<T: TaFloat> {
    config: BollingerConfig,
    _marker: core::marker::PhantomData<T>,
}

impl<T: TaFloat> Indicator<T> for BollingerBands<T> {
    type Input = [T];
    type Output = Vec<BandPoint<T>>;
    type Config = BollingerConfig;

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
        self.config.window.max(1)
    }

    fn calculate(&self, data: &[T]) -> Result<Self::Output> {
        let k = <T as TaFloat>::from_f64_lossy(self.config.num_std);
        Ok(bollinger_bands(data, self.config.window, k))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_bollinger_default_config() {
        let config = BollingerConfig::default();
        assert_eq!(config.window, 20);
        assert_relative_eq!(config.num_std, 2.0);
    }

    #[test]
    fn test_bollinger_length_and_warmup() {
        let data = [1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0];
        let bands = bollinger_bands(&data, 4, 2.0);

        assert_eq!(bands.len(), data.len());
        for band in &bands[..3] {
            assert!(band.upper_band.is_nan());
            assert!(band.middle_band.is_nan());
            assert!(band.lower_band.is_nan());
        }
        assert!(bands[3..].iter().all(|b| !b.is_nan()));
    }

    #[test]
    fn test_bollinger_values() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let bands = bollinger_bands(&data, 8, 2.0);

        // mean 5, population std 2
        let last = bands[7];
        assert_relative_eq!(last.middle_band, 5.0, epsilon = 1e-12);
        assert_relative_eq!(last.upper_band, 9.0, epsilon = 1e-12);
        assert_relative_eq!(last.lower_band, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_bollinger_constant_collapses() {
        let bands = bollinger_bands(&[50.0; 5], 3, 2.0);
        for band in &bands[2..] {
            assert_eq!(band.upper_band, 50.0);
            assert_eq!(band.middle_band, 50.0);
            assert_eq!(band.lower_band, 50.0);
        }
    }

    #[test]
    fn test_bollinger_deviation_scales_width() {
        let data = [1.0, 5.0, 2.0, 8.0];
        let one = bollinger_bands(&data, 4, 1.0)[3];
        let three = bollinger_bands(&data, 4, 3.0)[3];
        assert_relative_eq!(
            three.upper_band - three.middle_band,
            3.0 * (one.upper_band - one.middle_band),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_bollinger_degenerate_periods() {
        assert!(bollinger_bands(&[1.0, 2.0], 0, 2.0).iter().all(BandPoint::is_nan));
        assert!(bollinger_bands(&[1.0, 2.0], 3, 2.0).iter().all(BandPoint::is_nan));
        assert!(bollinger_bands::<f64>(&[], 3, 2.0).is_empty());
    }

    #[test]
    fn test_indicator_wrapper() {
        let indicator = BollingerBands::<f64>::new(BollingerConfig::new(2, 1.0));
        let bands = indicator.calculate(&[1.0, 3.0]).unwrap();
        assert!(bands[0].is_nan());
        assert_relative_eq!(bands[1].upper_band, 3.0, epsilon = 1e-12);
        assert_relative_eq!(bands[1].lower_band, 1.0, epsilon = 1e-12);
    }
}
