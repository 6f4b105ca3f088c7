//! Relative Strength Index (RSI) indicator.
//!
//! RSI measures the speed and magnitude of price changes, oscillating
//! between 0 and 100.

use ta_core::{error::Result, num::TaFloat, series::Series, traits::Indicator};
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Compute RSI from average gain and average loss.
///
/// No clamping: a zero average loss makes `rs` infinite and the result
/// saturates at 100; zero gain and zero loss give NaN.
#[inline]
fn rsi_value<T: TaFloat>(avg_gain: T, avg_loss: T) -> T {
    let rs = avg_gain / avg_loss;
    T::HUNDRED - T::HUNDRED / (T::ONE + rs)
}

/// Wilder RSI seeded with a simple average.
///
/// Price deltas are split into gains and losses. The first `period` deltas are
/// averaged to seed `avg_gain` / `avg_loss` and give the first value; each
/// later delta applies Wilder smoothing
/// `avg = (avg * (period - 1) + x) / period`. The seed consumes `period + 1`
/// prices and the result has `values.len() - period` values.
///
/// Returns an empty series when `period` is zero or `values.len() <= period`.
///
/// # Example
///
/// ```rust
/// use ta_indicators::rsi;
///
/// // Only gains: the average loss is zero and RSI saturates.
/// let result = rsi(&[1.0_f64, 2.0, 3.0, 4.0, 5.0], 2);
/// assert_eq!(result.as_slice(), &[100.0, 100.0, 100.0]);
/// ```
#[must_use]
pub fn rsi<T: TaFloat>(values: &[T], period: usize) -> Series<T> {
    let len = values.len();
    if period == 0 || len <= period {
        debug!(period, len, "rsi needs more than period values, returning empty series");
        return Series::new();
    }

    let (gains, losses): (Vec<T>, Vec<T>) = values
        .windows(2)
        .map(|pair| {
            let delta = pair[1] - pair[0];
            if delta > T::ZERO {
                (delta, T::ZERO)
            } else if delta < T::ZERO {
                (T::ZERO, -delta)
            } else {
                (T::ZERO, T::ZERO)
            }
        })
        .unzip();

    let n = <T as TaFloat>::from_usize(period);
    let n_minus_one = <T as TaFloat>::from_usize(period - 1);

    let mut avg_gain = gains[..period].iter().fold(T::ZERO, |acc, &g| acc + g) / n;
    let mut avg_loss = losses[..period].iter().fold(T::ZERO, |acc, &l| acc + l) / n;

    let mut result = Series::with_capacity(len - period);
    result.push(rsi_value(avg_gain, avg_loss));

    for (&gain, &loss) in gains[period..].iter().zip(&losses[period..]) {
        avg_gain = (avg_gain * n_minus_one + gain) / n;
        avg_loss = (avg_loss * n_minus_one + loss) / n;
        result.push(rsi_value(avg_gain, avg_loss));
    }

    result
}

/// Configuration for the RSI indicator.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct RsiConfig {
    /// The lookback period (default: 14).
    pub window: usize,
}

impl Default for RsiConfig {
    fn default() -> Self {
        Self { window: 14 }
    }
}

impl RsiConfig {
    /// Create a new RSI configuration.
    pub fn new(window: usize) -> Self {
        Self { window }
    }
}

/// Relative Strength Index indicator.
///
/// # Formula
///
/// RS = Average Gain / Average Loss
/// RSI = 100 - (100 / (1 + RS))
#[derive(Debug, Clone)]
pub struct Rsi<T: TaFloat> {
    config: RsiConfig,
    _marker: core::marker::PhantomData<T>,
}

impl<T: TaFloat> Indicator<T> for Rsi<T> {
    type Input = [T];
    type Output = Series<T>;
    type Config = RsiConfig;

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
        // One delta per period plus the starting price.
        self.config.window.saturating_add(1)
    }

    fn calculate(&self, values: &[T]) -> Result<Self::Output> {
        Ok(rsi(values, self.config.window))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rsi_default_config() {
        assert_eq!(RsiConfig::default().window, 14);
    }

    #[test]
    fn test_rsi_seed_value() {
        // Deltas: +2, -1, +3, -2
        let values = [10.0, 12.0, 11.0, 14.0, 12.0];
        let result = rsi(&values, 3);

        assert_eq!(result.len(), 2);

        // Seed over the first 3 deltas: gain 5/3, loss 1/3 -> rs 5
        assert_relative_eq!(result[0], 100.0 - 100.0 / 6.0, epsilon = 1e-10);

        // Wilder step with delta -2
        let avg_gain = (5.0 / 3.0 * 2.0 + 0.0) / 3.0;
        let avg_loss = (1.0 / 3.0 * 2.0 + 2.0) / 3.0;
        assert_relative_eq!(
            result[1],
            100.0 - 100.0 / (1.0 + avg_gain / avg_loss),
            epsilon = 1e-10
        );
    }

    #[test]
    fn test_rsi_saturates_without_losses() {
        let values: Vec<f64> = (0..20).map(f64::from).collect();
        let result = rsi(&values, 14);

        assert_eq!(result.len(), 6);
        for &value in result.iter() {
            assert_eq!(value, 100.0);
        }
    }

    #[test]
    fn test_rsi_zero_without_gains() {
        let values: Vec<f64> = (0..20).map(|i| 100.0 - f64::from(i)).collect();
        for &value in rsi(&values, 5).iter() {
            assert_eq!(value, 0.0);
        }
    }

    #[test]
    fn test_rsi_flat_input_is_nan() {
        // 0 / 0 propagates.
        let result = rsi(&[5.0; 6], 3);
        assert_eq!(result.len(), 3);
        assert_eq!(result.nan_count(), 3);
    }

    #[test]
    fn test_rsi_bounds() {
        let values = [44.34, 44.09, 44.15, 43.61, 44.33, 44.83, 45.10, 45.42, 45.84, 46.08];
        for &value in rsi(&values, 4).iter() {
            assert!((0.0..=100.0).contains(&value));
        }
    }

    #[test]
    fn test_rsi_short_input() {
        assert!(rsi(&[1.0, 2.0, 3.0], 3).is_empty());
        assert!(rsi(&[1.0, 2.0, 3.0], 0).is_empty());
        assert!(rsi::<f64>(&[], 14).is_empty());
    }

    #[test]
    fn test_indicator_wrapper() {
        let indicator = Rsi::<f64>::new(RsiConfig::new(2));
        assert_eq!(indicator.min_periods(), 3);
        let result = indicator.calculate(&[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(result.as_slice(), &[100.0]);
    }
}
