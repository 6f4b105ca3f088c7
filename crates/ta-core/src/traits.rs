//! Core trait definitions for indicators.

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Serialize};

use crate::error::Result;
use crate::num::TaFloat;

/// Configuration trait bounds for indicator configurations.
#[cfg(feature = "serde")]
pub trait IndicatorConfig: Clone + Default + Serialize + DeserializeOwned + Send + Sync {}

#[cfg(not(feature = "serde"))]
pub trait IndicatorConfig: Clone + Default + Send + Sync {}

#[cfg(feature = "serde")]
impl<T> IndicatorConfig for T where
    T: Clone + Default + Serialize + DeserializeOwned + Send + Sync
{
}

#[cfg(not(feature = "serde"))]
impl<T> IndicatorConfig for T where T: Clone + Default + Send + Sync {}

/// Core trait for technical indicators.
///
/// An indicator is a configured, stateless batch transform: `calculate` reads the
/// complete input and recomputes from scratch on every call, so calling it twice
/// with the same input gives the same output.
///
/// # Associated Types
///
/// - `Input` - What the indicator reads: a price slice `[T]` or a candle slice
/// - `Output` - The type returned by calculations
/// - `Config` - Configuration parameters
///
/// # Example
///
/// ```rust,ignore
/// use ta_core::{Indicator, TaFloat, Result, Series};
///
/// impl<T: TaFloat> Indicator<T> for Sma<T> {
///     type Input = [T];
///     type Output = Series<T>;
///     type Config = SmaConfig;
///
///     fn new(config: Self::Config) -> Self { /* ... */ }
///     fn config(&self) -> &Self::Config { &self.config }
///     fn min_periods(&self) -> usize { self.config.window + 1 }
///     fn calculate(&self, data: &[T]) -> Result<Self::Output> { /* ... */ }
/// }
/// ```
pub trait Indicator<T: TaFloat>: Send + Sync {
    /// The input the indicator consumes.
    type Input: ?Sized;

    /// The output type of calculations.
    type Output;

    /// Configuration type for this indicator.
    type Config: IndicatorConfig;

    /// Create a new indicator with the given configuration.
    fn new(config: Self::Config) -> Self;

    /// Get a reference to the current configuration.
    fn config(&self) -> &Self::Config;

    /// Returns the minimum number of input elements for the first output value to exist.
    fn min_periods(&self) -> usize;

    /// Perform batch calculation over the complete input.
    ///
    /// # Errors
    ///
    /// Only indicators with an explicit data guard fail; the rest signal
    /// short input through an empty or NaN-filled output.
    fn calculate(&self, input: &Self::Input) -> Result<Self::Output>;
}
