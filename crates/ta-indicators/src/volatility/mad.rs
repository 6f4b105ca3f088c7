//! Mean Absolute Deviation (MAD).

use ta_core::{
    error::Result, num::TaFloat, series::Series, traits::Indicator,
    utils::mean_absolute_deviation,
};
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Rolling mean absolute deviation.
///
/// Every window of `window` consecutive values, starting at index 0 and
/// sliding by one, yields the mean of `|x - mean(window)|`. The result has
/// `data.len() - window + 1` values: unlike [`simple_moving_average`], the
/// very first window is included.
///
/// Returns an empty series when `window` is zero or exceeds the input length.
///
/// [`simple_moving_average`]: crate::trend::simple_moving_average
///
/// # Example
///
/// ```rust
/// use ta_indicators::mad;
///
/// let result = mad(&[1.0_f64, 2.0, 3.0, 4.0, 5.0], 5);
/// assert!((result[0] - 1.2).abs() < 1e-12);
/// ```
#[must_use]
pub fn mad<T: TaFloat>(data: &[T], window: usize) -> Series<T> {
    if window == 0 || window > data.len() {
        debug!(window, len = data.len(), "mad window does not fit input, returning empty series");
        return Series::new();
    }

    data.windows(window).map(mean_absolute_deviation).collect()
}

/// Configuration for [`Mad`].
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct MadConfig {
    /// Window size.
    pub window: usize,
}

impl Default for MadConfig {
    fn default() -> Self {
        Self { window: 20 }
    }
}

impl MadConfig {
    /// Create a new configuration.
    pub fn new(window: usize) -> Self {
        Self { window }
    }
}

/// Rolling mean absolute deviation indicator.
#[derive(Debug, Clone)]
pub struct Mad<T: TaFloat> {
    config: MadConfig,
    _marker: core::marker::PhantomData<T>,
}

impl<T: TaFloat> Indicator<T> for Mad<T> {
    type Input = [T];
    type Output = Series<T>;
    type Config = MadConfig;

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
        Ok(mad(data, self.config.window))
    }
}
