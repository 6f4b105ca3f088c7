//! OHLCV candle type.
//!
//! A [`Candle`] is one price bar. Indicators only ever read candles; the caller
//! owns them.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::field::CandleField;
use crate::num::TaFloat;

/// A single OHLCV price bar.
///
/// # Example
///
/// ```rust
/// use ta_core::Candle;
///
/// let candle = Candle::new(1_700_000_000_000, 100.0, 105.0, 98.0, 103.0, 1_000_000.0);
/// assert_eq!(candle.range(), 7.0);
/// assert!(candle.is_valid());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: TaFloat"))]
pub struct Candle<T: TaFloat> {
    /// Bar open time (Unix epoch in milliseconds).
    pub time: i64,
    /// Opening price for the period.
    pub open: T,
    /// Highest price during the period.
    pub high: T,
    /// Lowest price during the period.
    pub low: T,
    /// Closing price for the period.
    pub close: T,
    /// Trading volume during the period.
    pub volume: T,
}

impl<T: TaFloat> Candle<T> {
    /// Create a new candle.
    #[must_use]
    pub fn new(time: i64, open: T, high: T, low: T, close: T, volume: T) -> Self {
        Self {
            time,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Read one price or volume field.
    #[must_use]
    pub fn field(&self, field: CandleField) -> T {
        match field {
            CandleField::Open => self.open,
            CandleField::High => self.high,
            CandleField::Low => self.low,
            CandleField::Close => self.close,
            CandleField::Volume => self.volume,
        }
    }

    /// Check if the bar satisfies OHLCV invariants.
    ///
    /// A valid bar has finite values, `low <= open, close <= high` and
    /// non-negative volume. Indicators do not call this; it is offered to
    /// callers that want to vet their input.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.open.is_valid()
            && self.high.is_valid()
            && self.low.is_valid()
            && self.close.is_valid()
            && self.volume.is_valid()
            && self.low <= self.open
            && self.open <= self.high
            && self.low <= self.close
            && self.close <= self.high
            && self.volume >= T::ZERO
    }

    /// Compute the bar's range: High - Low.
    #[must_use]
    pub fn range(&self) -> T {
        self.high - self.low
    }

    /// Money flow multiplier: `((close - low) - (high - close)) / (high - low)`.
    ///
    /// Unguarded. A flat bar (`high == low`) divides by zero and yields NaN or
    /// an infinity.
    #[must_use]
    pub fn money_flow_multiplier(&self) -> T {
        ((self.close - self.low) - (self.high - self.close)) / self.range()
    }
}

impl<T: TaFloat> Default for Candle<T> {
    fn default() -> Self {
        Self {
            time: 0,
            open: T::ZERO,
            high: T::ZERO,
            low: T::ZERO,
            close: T::ZERO,
            volume: T::ZERO,
        }
    }
}
