//! Moving Average Envelope.
//!
//! Two bands placed a fixed percentage above and below the simple moving
//! average.

use ta_core::{error::Result, num::TaFloat, series::Series, traits::Indicator};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::sma::simple_moving_average;

/// Output of the moving average envelope.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: TaFloat"))]
pub struct EnvelopeOutput<T: TaFloat> {
    /// SMA scaled by `1 + k/100`.
    pub upper_envelope: Series<T>,
    /// SMA scaled by `1 - k/100`.
    pub lower_envelope: Series<T>,
}

/// Envelope around [`simple_moving_average`] offset by `percent` percent.
///
/// Both bands have exactly the length of the underlying SMA and share its
/// indexing.
///
/// # Example
///
/// ```rust
/// use ta_indicators::moving_average_envelope;
///
/// let env = moving_average_envelope(&[10.0_f64, 20.0, 30.0, 40.0, 50.0], 3, 10.0);
/// assert_eq!(env.upper_envelope.len(), 2);
/// assert!((env.upper_envelope[0] - 33.0).abs() < 1e-9);
/// assert!((env.lower_envelope[0] - 27.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn moving_average_envelope<T: TaFloat>(
    data: &[T],
    window: usize,
    percent: T,
) -> EnvelopeOutput<T> {
    let sma = simple_moving_average(data, window);
    let offset = percent / T::HUNDRED;

    EnvelopeOutput {
        upper_envelope: sma.map(|v| v * (T::ONE + offset)),
        lower_envelope: sma.map(|v| v * (T::ONE - offset)),
    }
}

/// Configuration for [`Envelope`].
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct EnvelopeConfig {
    /// SMA window.
    pub window: usize,
    /// Band offset in percent.
    pub percent: f64,
}

impl Default for EnvelopeConfig {
    fn default() -> Self {
        Self {
            window: 20,
            percent: 2.5,
        }
    }
}

impl EnvelopeConfig {
    /// Create a new configuration.
    pub fn new(window: usize, percent: f64) -> Self {
        Self { window, percent }
    }
}

/// Moving average envelope indicator.
#[derive(Debug, Clone)]
pub struct Envelope<T: TaFloat> {
    config: EnvelopeConfig,
    _marker: core::marker::PhantomData<T>,
}

impl<T: TaFloat> Indicator<T> for Envelope<T> {
    type Input = [T];
    type Output = EnvelopeOutput<T>;
    type Config = EnvelopeConfig;

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
        self.config.window.saturating_add(1)
    }

    fn calculate(&self, data: &[T]) -> Result<Self::Output> {
        let percent = <T as TaFloat>::from_f64_lossy(self.config.percent);
        Ok(moving_average_envelope(data, self.config.window, percent))
    }
}
