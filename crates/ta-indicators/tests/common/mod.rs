//! Common test utilities for ta-indicators.
//!
//! Float comparison that treats NaN and infinities as exact expectations, plus
//! candle builders.

#![allow(dead_code)]

use ta_core::Candle;

/// Tiered float comparison.
///
/// - NaN expects NaN, infinity expects the same infinity
/// - Near zero (|expected| < 1e-10): absolute tolerance
/// - Otherwise: relative tolerance
pub fn assert_float_eq(actual: f64, expected: f64, epsilon: f64, context: &str) {
    if expected.is_nan() {
        assert!(actual.is_nan(), "{}: Expected NaN but got {}", context, actual);
        return;
    }

    if actual.is_nan() {
        panic!("{}: Got NaN but expected {}", context, expected);
    }

    if expected.is_infinite() {
        assert!(
            actual.is_infinite() && actual.signum() == expected.signum(),
            "{}: Expected {} but got {}",
            context,
            expected,
            actual
        );
        return;
    }

    if expected.abs() < 1e-10 {
        let diff = (actual - expected).abs();
        assert!(
            diff < epsilon,
            "{}: Expected {} but got {} (diff: {})",
            context,
            expected,
            actual,
            diff
        );
        return;
    }

    let rel_diff = ((actual - expected) / expected).abs();
    assert!(
        rel_diff < epsilon,
        "{}: Expected {} but got {} (rel diff: {:.2e})",
        context,
        expected,
        actual,
        rel_diff
    );
}

/// Assert two series are equal with tolerance.
pub fn assert_series_eq(actual: &[f64], expected: &[f64], epsilon: f64, name: &str) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "{}: Length mismatch: {} vs {}",
        name,
        actual.len(),
        expected.len()
    );

    for (i, (&a, &e)) in actual.iter().zip(expected.iter()).enumerate() {
        let context = format!("{}[{}]", name, i);
        assert_float_eq(a, e, epsilon, &context);
    }
}

/// Candles whose open/high/low/close all equal the given closes.
pub fn flat_candles(closes: &[f64]) -> Vec<Candle<f64>> {
    closes
        .iter()
        .enumerate()
        .map(|(i, &c)| Candle::new(i as i64 * 60_000, c, c, c, c, 1_000.0))
        .collect()
}

/// Candles with a one-unit range around each close.
pub fn ranged_candles(closes: &[f64], volume: f64) -> Vec<Candle<f64>> {
    closes
        .iter()
        .enumerate()
        .map(|(i, &c)| Candle::new(i as i64 * 60_000, c, c + 0.5, c - 0.5, c, volume))
        .collect()
}
