//! Numeric type abstractions for technical analysis computations.
//!
//! This module defines the [`TaFloat`] trait which abstracts over `f32` and `f64`
//! for generic numeric operations.

use num_traits::{Float, FromPrimitive, ToPrimitive};

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Serialize};

/// Trait for floating-point types used in technical analysis calculations.
///
/// Indicators rely on IEEE-754 semantics: division by zero yields an infinity,
/// `0 / 0` yields NaN, and NaN propagates through every later operation. None of
/// the implementations below paper over that.
///
/// # Example
///
/// ```rust
/// use ta_core::TaFloat;
///
/// fn rsi_from<T: TaFloat>(avg_gain: T, avg_loss: T) -> T {
///     T::HUNDRED - T::HUNDRED / (T::ONE + avg_gain / avg_loss)
/// }
///
/// // No losses: rs is infinite and the oscillator saturates.
/// assert_eq!(rsi_from(1.0_f64, 0.0), 100.0);
/// ```
#[cfg(feature = "serde")]
pub trait TaFloat:
    Float
    + FromPrimitive
    + ToPrimitive
    + Copy
    + Send
    + Sync
    + Default
    + Serialize
    + DeserializeOwned
    + 'static
{
    /// Not-a-number value.
    const NAN: Self;
    /// Positive infinity.
    const INFINITY: Self;
    /// Zero value.
    const ZERO: Self;
    /// One value.
    const ONE: Self;
    /// Two value.
    const TWO: Self;
    /// Hundred value (percentages, RSI scale).
    const HUNDRED: Self;

    /// Convert from `f64`.
    #[must_use]
    fn from_f64_lossy(value: f64) -> Self;

    /// Convert from `usize`.
    #[must_use]
    fn from_usize(value: usize) -> Self;

    /// Check if the value is valid (not NaN and not infinite).
    #[must_use]
    fn is_valid(self) -> bool {
        !self.is_nan() && !self.is_infinite()
    }
}

#[cfg(not(feature = "serde"))]
pub trait TaFloat: Float + FromPrimitive + ToPrimitive + Copy + Send + Sync + Default + 'static {
    /// Not-a-number value.
    const NAN: Self;
    /// Positive infinity.
    const INFINITY: Self;
    /// Zero value.
    const ZERO: Self;
    /// One value.
    const ONE: Self;
    /// Two value.
    const TWO: Self;
    /// Hundred value (percentages, RSI scale).
    const HUNDRED: Self;

    /// Convert from `f64`.
    #[must_use]
    fn from_f64_lossy(value: f64) -> Self;

    /// Convert from `usize`.
    #[must_use]
    fn from_usize(value: usize) -> Self;

    /// Check if the value is valid (not NaN and not infinite).
    #[must_use]
    fn is_valid(self) -> bool {
        !self.is_nan() && !self.is_infinite()
    }
}

impl TaFloat for f32 {
    const NAN: Self = f32::NAN;
    const INFINITY: Self = f32::INFINITY;
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const TWO: Self = 2.0;
    const HUNDRED: Self = 100.0;

    #[inline]
    fn from_f64_lossy(value: f64) -> Self {
        value as f32
    }

    #[inline]
    fn from_usize(value: usize) -> Self {
        value as f32
    }
}

impl TaFloat for f64 {
    const NAN: Self = f64::NAN;
    const INFINITY: Self = f64::INFINITY;
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const TWO: Self = 2.0;
    const HUNDRED: Self = 100.0;

    #[inline]
    fn from_f64_lossy(value: f64) -> Self {
        value
    }

    #[inline]
    fn from_usize(value: usize) -> Self {
        value as f64
    }
}
