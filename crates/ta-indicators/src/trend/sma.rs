//! Simple Moving Average (SMA) indicator.
//!
//! The SMA is the unweighted mean of the previous n data points, maintained as a
//! running sum.

use ta_core::{error::Result, num::TaFloat, series::Series, traits::Indicator};
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Trailing simple moving average over `window` values.
///
/// A running sum is kept; once the index reaches `window` the value leaving
/// the window is subtracted and `sum / window` is emitted. The first emitted
/// value therefore covers indices `1..=window` and the window starting at
/// index 0 is never emitted. The output has `data.len() - window` values.
///
/// Returns an empty series when `window` is zero or exceeds the input length.
///
/// # Example
///
/// ```rust
/// use ta_indicators::simple_moving_average;
///
/// let sma = simple_moving_average(&[10.0_f64, 20.0, 30.0, 40.0, 50.0], 3);
/// assert_eq!(sma.as_slice(), &[30.0, 40.0]);
/// ```
#[must_use]
pub fn simple_moving_average<T: TaFloat>(data: &[T], window: usize) -> Series<T> {
    let len = data.len();
    if window == 0 || window > len {
        debug!(window, len, "sma window does not fit input, returning empty series");
        return Series::new();
    }

    let divisor = <T as TaFloat>::from_usize(window);
    let mut result = Series::with_capacity(len - window);
    let mut sum = T::ZERO;

    for i in 0..len {
        sum = sum + data[i];

        if i >= window {
            sum = sum - data[i - window];
            result.push(sum / divisor);
        }
    }

    result
}

/// Configuration for the SMA indicator.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct SmaConfig {
    /// The window size for the moving average.
    pub window: usize,
}

impl Default for SmaConfig {
    fn default() -> Self {
        Self { window: 20 }
    }
}

impl SmaConfig {
    /// Create a new SMA configuration with the given window.
    pub fn new(window: usize) -> Self {
        Self { window }
    }
}

/// Simple Moving Average indicator.
///
/// # Formula
///
/// SMA = (P1 + P2 + ... + Pn) / n
#[derive(Debug, Clone)]
pub struct Sma<T: TaFloat> {
    config: SmaConfig,
    _marker: core::marker::PhantomData<T>,
}

impl<T: TaFloat> Indicator<T> for Sma<T> {
    type Input = [T];
    type Output = Series<T>;
    type Config = SmaConfig;

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
        // First emitted value appears at index `window`.
        self.config.window.saturating_add(1)
    }

    fn calculate(&self, data: &[T]) -> Result<Self::Output> {
        Ok(simple_moving_average(data, self.config.window))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sma_default_config() {
        assert_eq!(SmaConfig::default().window, 20);
    }

    #[test]
    fn test_sma_offset_window() {
        let result = simple_moving_average(&[10.0, 20.0, 30.0, 40.0, 50.0], 3);

        assert_eq!(result.len(), 2);
        assert_relative_eq!(result[0], 30.0, epsilon = 1e-10); // (20+30+40)/3
        assert_relative_eq!(result[1], 40.0, epsilon = 1e-10); // (30+40+50)/3
    }

    #[test]
    fn test_sma_window_equals_len() {
        assert!(simple_moving_average(&[1.0, 2.0, 3.0], 3).is_empty());
    }

    #[test]
    fn test_sma_invalid_window() {
        assert!(simple_moving_average(&[1.0, 2.0, 3.0], 0).is_empty());
        assert!(simple_moving_average(&[1.0, 2.0, 3.0], 4).is_empty());
        assert!(simple_moving_average::<f64>(&[], 1).is_empty());
    }

    #[test]
    fn test_sma_window_one() {
        // Each value stands alone, shifted by one position.
        let result = simple_moving_average(&[1.0, 2.0, 3.0], 1);
        assert_eq!(result.as_slice(), &[2.0, 3.0]);
    }

    #[test]
    fn test_sma_constant_input() {
        let data = vec![42.0; 10];
        for value in simple_moving_average(&data, 4).iter() {
            assert_relative_eq!(*value, 42.0, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_sma_indicator_wrapper() {
        let sma = Sma::<f64>::new(SmaConfig::new(2));
        assert_eq!(sma.min_periods(), 3);
        let result = sma.calculate(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(result.as_slice(), &[2.5, 3.5]);
    }

    #[test]
    fn test_sma_huge_window() {
        let sma = Sma::<f64>::new(SmaConfig::new(usize::MAX));
        assert_eq!(sma.min_periods(), usize::MAX);
        assert!(sma.calculate(&[1.0, 2.0]).unwrap().is_empty());
    }
}
