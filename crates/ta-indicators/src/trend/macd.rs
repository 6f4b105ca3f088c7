//! Moving Average Convergence Divergence (MACD) indicator.
//!
//! MACD is a trend-following momentum indicator that shows the relationship
//! between two exponential moving averages of prices. This module returns the
//! histogram: the MACD line minus its signal line.

use ta_core::{
    candle::Candle,
    error::Result,
    field::CandleField,
    num::TaFloat,
    series::Series,
    traits::Indicator,
};
use tracing::debug;

use super::ema::ema;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A MACD line value attached to the candle it belongs to.
///
/// This is the record the signal line EMA runs over; the EMA reads
/// `macd_line` through a selector closure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacdPoint<T: TaFloat> {
    /// Candle aligned with this point, when the caller supplied enough candles.
    pub candle: Option<Candle<T>>,
    /// Short EMA minus long EMA.
    pub macd_line: T,
}

/// MACD histogram from precomputed short and long EMA sequences.
///
/// The two EMA sequences are aligned on their most recent values: both are
/// trimmed to the trailing `min(short_ema.len(), long_ema.len())` entries and
/// subtracted pairwise to form the MACD line. Each MACD value is paired with
/// the matching trailing candle, and the signal line is the [`ema`] of those
/// points over `signal_period`.
///
/// The signal line is `signal_period - 1` values shorter than the MACD line.
/// The output is aligned on index with the MACD line, so
/// `out[i] = macd_line[i] - signal_line[i]` and the trailing positions that
/// have no signal value are NaN.
///
/// # Example
///
/// ```rust
/// use ta_core::{Candle, CandleField};
/// use ta_indicators::{ema, macd};
///
/// let candles: Vec<Candle<f64>> = (0..40)
///     .map(|i| {
///         let c = 100.0 + f64::from(i);
///         Candle::new(i64::from(i), c, c, c, c, 1.0)
///     })
///     .collect();
///
/// let short = ema(&candles, 12, CandleField::Close);
/// let long = ema(&candles, 26, CandleField::Close);
/// let histogram = macd(&candles, short.as_slice(), long.as_slice(), 9);
///
/// assert_eq!(histogram.len(), long.len());
/// ```
#[must_use]
pub fn macd<T: TaFloat>(
    candles: &[Candle<T>],
    short_ema: &[T],
    long_ema: &[T],
    signal_period: usize,
) -> Series<T> {
    let len = short_ema.len().min(long_ema.len());
    if short_ema.len() != long_ema.len() {
        debug!(
            short = short_ema.len(),
            long = long_ema.len(),
            aligned = len,
            "trimming ema inputs to their common trailing length"
        );
    }

    let short = &short_ema[short_ema.len() - len..];
    let long = &long_ema[long_ema.len() - len..];

    // Pair each MACD value with the candle at the same distance from the end.
    let offset = candles.len().checked_sub(len);
    let points: Vec<MacdPoint<T>> = short
        .iter()
        .zip(long)
        .enumerate()
        .map(|(i, (&s, &l))| MacdPoint {
            candle: offset.map(|o| candles[o + i]),
            macd_line: s - l,
        })
        .collect();

    let signal_line = ema(&points, signal_period, |p: &MacdPoint<T>| p.macd_line);

    points
        .iter()
        .enumerate()
        .map(|(i, point)| match signal_line.get(i) {
            Some(&signal) => point.macd_line - signal,
            None => T::NAN,
        })
        .collect()
}

/// Configuration for the MACD indicator.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct MacdConfig {
    /// Short (fast) EMA period (default: 12).
    pub short: usize,
    /// Long (slow) EMA period (default: 26).
    pub long: usize,
    /// Signal line EMA period (default: 9).
    pub signal: usize,
    /// Candle field both EMAs read.
    pub field: CandleField,
}

impl Default for MacdConfig {
    fn default() -> Self {
        Self {
            short: 12,
            long: 26,
            signal: 9,
            field: CandleField::Close,
        }
    }
}

impl MacdConfig {
    /// Create a new MACD configuration over closes.
    pub fn new(short: usize, long: usize, signal: usize) -> Self {
        Self {
            short,
            long,
            signal,
            field: CandleField::Close,
        }
    }

    /// Select the candle field both EMAs read.
    pub fn with_field(mut self, field: CandleField) -> Self {
        self.field = field;
        self
    }
}

/// MACD histogram indicator over candles.
///
/// Computes both EMAs with [`ema`] and hands them to [`macd`].
///
/// # Formula
///
/// MACD Line = EMA(short) - EMA(long)
/// Signal Line = EMA(MACD Line, signal)
/// Histogram = MACD Line - Signal Line
#[derive(Debug, Clone)]
pub struct Macd<T: TaFloat> {
    config: MacdConfig,
    _marker: core::marker::PhantomData<T>,
}

impl<T: TaFloat> Indicator<T> for Macd<T> {
    type Input = [Candle<T>];
    type Output = Series<T>;
    type Config = MacdConfig;

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
        self.config.short.max(self.config.long).max(1)
    }

    fn calculate(&self, candles: &[Candle<T>]) -> Result<Self::Output> {
        let short = ema(candles, self.config.short, self.config.field);
        let long = ema(candles, self.config.long, self.config.field);
        Ok(macd(candles, short.as_slice(), long.as_slice(), self.config.signal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn candles(closes: &[f64]) -> Vec<Candle<f64>> {
        closes
            .iter()
            .enumerate()
            .map(|(i, &c)| Candle::new(i as i64, c, c + 1.0, c - 1.0, c, 1000.0))
            .collect()
    }

    #[test]
    fn test_macd_default_config() {
        let config = MacdConfig::default();
        assert_eq!(config.short, 12);
        assert_eq!(config.long, 26);
        assert_eq!(config.signal, 9);
        assert_eq!(config.field, CandleField::Close);
    }

    #[test]
    fn test_macd_hand_computed() {
        let data = candles(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let short = [5.0, 6.0, 8.0, 9.0];
        let long = [4.0, 4.5, 5.0];

        // Aligned: short [6, 8, 9] - long [4, 4.5, 5] = [2, 3.5, 4]
        // Signal ema(2): seed 2.75, then 4 * 2/3 + 2.75 / 3 = 3.5833..
        let result = macd(&data, &short, &long, 2);

        assert_eq!(result.len(), 3);
        assert_relative_eq!(result[0], 2.0 - 2.75, epsilon = 1e-10);
        assert_relative_eq!(result[1], 3.5 - (4.0 * 2.0 / 3.0 + 2.75 / 3.0), epsilon = 1e-10);
        assert!(result[2].is_nan());
    }

    #[test]
    fn test_macd_equal_lengths_not_trimmed() {
        let data = candles(&[1.0, 2.0, 3.0]);
        let result = macd(&data, &[3.0, 3.0, 3.0], &[1.0, 1.0, 1.0], 1);
        // Signal of a constant 2.0 line with period 1 is the line itself.
        assert_eq!(result.as_slice(), &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_macd_trailing_nans() {
        let data = candles(&(0..30).map(f64::from).collect::<Vec<_>>());
        let short = ema(&data, 5, CandleField::Close);
        let long = ema(&data, 10, CandleField::Close);
        let signal = 4;
        let result = macd(&data, short.as_slice(), long.as_slice(), signal);

        assert_eq!(result.len(), long.len());
        assert_eq!(result.nan_count(), signal - 1);
        for value in result.tail(signal - 1) {
            assert!(value.is_nan());
        }
    }

    #[test]
    fn test_macd_signal_longer_than_line_is_all_nan() {
        let data = candles(&[1.0, 2.0]);
        let result = macd(&data, &[1.0, 2.0], &[0.5, 1.0], 5);
        assert_eq!(result.len(), 2);
        assert_eq!(result.nan_count(), 2);
    }

    #[test]
    fn test_macd_tolerates_missing_candles() {
        // Fewer candles than MACD points: points carry no candle, values unaffected.
        let with = macd(&candles(&[1.0, 2.0, 3.0]), &[3.0, 4.0, 6.0], &[1.0, 1.0, 1.0], 2);
        let without = macd(&[], &[3.0, 4.0, 6.0], &[1.0, 1.0, 1.0], 2);
        assert_eq!(with.len(), without.len());
        assert_relative_eq!(with[0], without[0], epsilon = 1e-12);
        assert_relative_eq!(with[1], without[1], epsilon = 1e-12);
    }

    #[test]
    fn test_macd_empty_inputs() {
        assert!(macd::<f64>(&[], &[], &[], 9).is_empty());
        assert!(macd::<f64>(&[], &[1.0, 2.0], &[], 1).is_empty());
    }

    #[test]
    fn test_indicator_wrapper_matches_free_function() {
        let closes: Vec<f64> = (0..60).map(|i| 100.0 + (f64::from(i) * 0.3).sin()).collect();
        let data = candles(&closes);
        let indicator = Macd::<f64>::new(MacdConfig::default());
        let from_wrapper = indicator.calculate(&data).unwrap();

        let short = ema(&data, 12, CandleField::Close);
        let long = ema(&data, 26, CandleField::Close);
        let direct = macd(&data, short.as_slice(), long.as_slice(), 9);

        assert_eq!(from_wrapper.len(), direct.len());
        for i in 0..direct.len() {
            if direct[i].is_nan() {
                assert!(from_wrapper[i].is_nan());
            } else {
                assert_relative_eq!(from_wrapper[i], direct[i], epsilon = 1e-12);
            }
        }
    }
}
