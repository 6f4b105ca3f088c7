//! Error types for technical analysis operations.
//!
//! Indicators in this library report almost every anomaly through the numbers
//! they return (empty series, NaN, infinities). The one explicit failure is a
//! window that asks for more samples than were supplied, see
//! [`IndicatorError::InsufficientData`].

use thiserror::Error;

/// Result type alias for indicator operations that may fail.
pub type Result<T> = core::result::Result<T, IndicatorError>;

/// Errors that can occur during indicator computation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndicatorError {
    /// Not enough data points to compute the indicator.
    #[error("Insufficient data: need {required} points, got {actual}")]
    InsufficientData {
        /// Required number of data points.
        required: usize,
        /// Actual number of data points provided.
        actual: usize,
    },
}

impl IndicatorError {
    /// Build an [`IndicatorError::InsufficientData`] for a window over `actual` samples.
    ///
    /// A zero-sized window can never be satisfied, so it is reported as
    /// requiring one sample.
    #[must_use]
    pub fn insufficient(window: usize, actual: usize) -> Self {
        Self::InsufficientData {
            required: window.max(1),
            actual,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indicator_error_display() {
        let err = IndicatorError::InsufficientData {
            required: 14,
            actual: 10,
        };
        assert_eq!(err.to_string(), "Insufficient data: need 14 points, got 10");
    }

    #[test]
    fn test_insufficient_zero_window() {
        let err = IndicatorError::insufficient(0, 5);
        assert_eq!(
            err,
            IndicatorError::InsufficientData {
                required: 1,
                actual: 5
            }
        );
    }
}
