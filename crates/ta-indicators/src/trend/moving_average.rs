//! Moving average of the most recent window.
//!
//! Unlike the other indicators this one yields a single number, and it is the
//! only one that refuses short input with an error.

use ta_core::{
    error::{IndicatorError, Result},
    num::TaFloat,
    traits::Indicator,
    utils::mean,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Arithmetic mean of the last `window` elements of `data`.
///
/// # Errors
///
/// Returns [`IndicatorError::InsufficientData`] when `window` is zero or larger
/// than `data.len()`.
///
/// # Example
///
/// ```rust
/// use ta_indicators::moving_average;
///
/// assert_eq!(moving_average(&[2.0_f64, 4.0, 6.0, 8.0, 10.0], 3).unwrap(), 8.0);
/// assert!(moving_average(&[2.0_f64, 4.0], 3).is_err());
/// ```
pub fn moving_average<T: TaFloat>(data: &[T], window: usize) -> Result<T> {
    if window == 0 || data.len() < window {
        return Err(IndicatorError::insufficient(window, data.len()));
    }
    Ok(mean(&data[data.len() - window..]))
}

/// Configuration for [`MovingAverage`].
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct MovingAverageConfig {
    /// Number of trailing values to average.
    pub window: usize,
}

impl Default for MovingAverageConfig {
    fn default() -> Self {
        Self { window: 20 }
    }
}

impl MovingAverageConfig {
    /// Create a new configuration with the given window.
    pub fn new(window: usize) -> Self {
        Self { window }
    }
}

/// Latest-value moving average indicator.
#[derive(Debug, Clone)]
pub struct MovingAverage<T: TaFloat> {
    config: MovingAverageConfig,
    _marker: core::marker::PhantomData<T>,
}

impl<T: TaFloat> Indicator<T> for MovingAverage<T> {
    type Input = [T];
    type Output = T;
    type Config = MovingAverageConfig;

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

    fn calculate(&self, data: &[T]) -> Result<T> {
        moving_average(data, self.config.window)
    }
}
