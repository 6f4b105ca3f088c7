//! Typed field selection for indicators that can run over any scalar of a record.
//!
//! EMA reads one number per record. Which number is chosen by a
//! [`FieldSelector`]: either a [`CandleField`] for plain candles, or any closure
//! `Fn(&R) -> T` for derived records such as the MACD line points.

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::candle::Candle;
use crate::num::TaFloat;

/// One of the five scalar fields of a [`Candle`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CandleField {
    /// Opening price.
    Open,
    /// High price.
    High,
    /// Low price.
    Low,
    /// Closing price.
    #[default]
    Close,
    /// Traded volume.
    Volume,
}

impl CandleField {
    /// Lowercase name of the field.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::High => "high",
            Self::Low => "low",
            Self::Close => "close",
            Self::Volume => "volume",
        }
    }
}

impl fmt::Display for CandleField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown field name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown candle field '{0}' (expected open, high, low, close or volume)")]
pub struct ParseFieldError(pub String);

impl FromStr for CandleField {
    type Err = ParseFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "open" => Ok(Self::Open),
            "high" => Ok(Self::High),
            "low" => Ok(Self::Low),
            "close" => Ok(Self::Close),
            "volume" => Ok(Self::Volume),
            _ => Err(ParseFieldError(s.to_string())),
        }
    }
}

/// Extracts the scalar an indicator should read from a record.
pub trait FieldSelector<R, T: TaFloat> {
    /// Read the selected value from `record`.
    fn select(&self, record: &R) -> T;
}

impl<T: TaFloat> FieldSelector<Candle<T>, T> for CandleField {
    #[inline]
    fn select(&self, record: &Candle<T>) -> T {
        record.field(*self)
    }
}

impl<R, T, F> FieldSelector<R, T> for F
where
    T: TaFloat,
    F: Fn(&R) -> T,
{
    #[inline]
    fn select(&self, record: &R) -> T {
        self(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_close() {
        assert_eq!(CandleField::default(), CandleField::Close);
    }

    #[test]
    fn test_parse_field() {
        assert_eq!("close".parse::<CandleField>().unwrap(), CandleField::Close);
        assert_eq!("HIGH".parse::<CandleField>().unwrap(), CandleField::High);
        assert!("macdLine".parse::<CandleField>().is_err());
    }

    #[test]
    fn test_display_roundtrips_parse() {
        for field in [
            CandleField::Open,
            CandleField::High,
            CandleField::Low,
            CandleField::Close,
            CandleField::Volume,
        ] {
            assert_eq!(field.to_string().parse::<CandleField>().unwrap(), field);
        }
    }

    #[test]
    fn test_selectors() {
        let candle = Candle::new(0, 1.0, 4.0, 0.5, 2.0, 10.0);
        assert_eq!(CandleField::Volume.select(&candle), 10.0);

        let mid = |c: &Candle<f64>| (c.high + c.low) / 2.0;
        assert_eq!(mid.select(&candle), 2.25);
    }
}
