//! Exponential Moving Average (EMA) indicator.
//!
//! The EMA gives more weight to recent prices using an exponential
//! smoothing factor. It reads one scalar per record through a
//! [`FieldSelector`], so the same code smooths candle closes, volumes or a
//! derived series such as the MACD line.

use ta_core::{
    candle::Candle,
    error::Result,
    field::{CandleField, FieldSelector},
    num::TaFloat,
    series::Series,
    traits::Indicator,
};
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Exponential moving average of the field chosen by `key`.
///
/// Seeded with the unweighted mean of the first `period` values, then
/// `ema[i] = price[i] * alpha + ema[i-1] * (1 - alpha)` with
/// `alpha = 2 / (period + 1)`. The seed is the first output value, so the
/// result has `records.len() - period + 1` values.
///
/// Returns an empty series when `period` is zero or exceeds the input length.
///
/// # Example
///
/// ```rust
/// use ta_core::{Candle, CandleField};
/// use ta_indicators::ema;
///
/// let candles: Vec<Candle<f64>> = [1.0, 2.0, 3.0, 4.0, 5.0]
///     .iter()
///     .map(|&c| Candle::new(0, c, c, c, c, 1.0))
///     .collect();
///
/// let result = ema(&candles, 3, CandleField::Close);
/// assert_eq!(result.as_slice(), &[2.0, 3.0, 4.0]);
/// ```
#[must_use]
pub fn ema<R, T, S>(records: &[R], period: usize, key: S) -> Series<T>
where
    T: TaFloat,
    S: FieldSelector<R, T>,
{
    let len = records.len();
    if period == 0 || period > len {
        debug!(period, len, "ema period does not fit input, returning empty series");
        return Series::new();
    }

    let alpha = T::TWO / <T as TaFloat>::from_usize(period + 1);
    let one_minus_alpha = T::ONE - alpha;

    let seed = records[..period]
        .iter()
        .fold(T::ZERO, |acc, r| acc + key.select(r))
        / <T as TaFloat>::from_usize(period);

    let mut result = Series::with_capacity(len - period + 1);
    result.push(seed);

    let mut value = seed;
    for record in &records[period..] {
        value = key.select(record) * alpha + value * one_minus_alpha;
        result.push(value);
    }

    result
}

/// Configuration for the EMA indicator.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct EmaConfig {
    /// The window size (period) for the EMA.
    pub window: usize,
    /// Candle field to smooth.
    pub field: CandleField,
}

impl Default for EmaConfig {
    fn default() -> Self {
        Self {
            window: 20,
            field: CandleField::Close,
        }
    }
}

impl EmaConfig {
    /// Create a new EMA configuration over closes.
    pub fn new(window: usize) -> Self {
        Self {
            window,
            field: CandleField::Close,
        }
    }

    /// Select the candle field to smooth.
    pub fn with_field(mut self, field: CandleField) -> Self {
        self.field = field;
        self
    }
}

/// Exponential Moving Average indicator over candles.
///
/// # Formula
///
/// alpha = 2 / (window + 1)
/// EMA_t = alpha * Price_t + (1 - alpha) * EMA_{t-1}
///
/// The first window values are averaged to seed the EMA.
#[derive(Debug, Clone)]
pub struct Ema<T: TaFloat> {
    config: EmaConfig,
    /// Smoothing factor: 2 / (window + 1)
    alpha: T,
}

impl<T: TaFloat> Ema<T> {
    /// Returns the smoothing factor (alpha).
    pub fn alpha(&self) -> T {
        self.alpha
    }
}

impl<T: TaFloat> Indicator<T> for Ema<T> {
    type Input = [Candle<T>];
    type Output = Series<T>;
    type Config = EmaConfig;

    fn new(config: Self::Config) -> Self {
        let alpha = T::TWO / <T as TaFloat>::from_usize(config.window.saturating_add(1));
        Self { config, alpha }
    }

    fn config(&self) -> &Self::Config {
        &self.config
    }

    fn min_periods(&self) -> usize {
        self.config.window.max(1)
    }

    fn calculate(&self, candles: &[Candle<T>]) -> Result<Self::Output> {
        Ok(ema(candles, self.config.window, self.config.field))
    }
}
