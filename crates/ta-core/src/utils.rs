//! Slice kernels shared by the rolling statistics.

use crate::num::TaFloat;

/// Arithmetic mean of a slice.
///
/// An empty slice divides zero by zero and returns NaN.
///
/// # Example
///
/// ```rust
/// use ta_core::utils::mean;
///
/// assert_eq!(mean(&[2.0_f64, 4.0, 6.0]), 4.0);
/// assert!(mean::<f64>(&[]).is_nan());
/// ```
#[must_use]
pub fn mean<T: TaFloat>(data: &[T]) -> T {
    let sum = data.iter().fold(T::ZERO, |acc, &x| acc + x);
    sum / <T as TaFloat>::from_usize(data.len())
}

/// Population variance of a slice around a precomputed mean.
#[must_use]
pub fn population_variance<T: TaFloat>(data: &[T], mean: T) -> T {
    let sum_sq = data.iter().fold(T::ZERO, |acc, &x| {
        let d = x - mean;
        acc + d * d
    });
    sum_sq / <T as TaFloat>::from_usize(data.len())
}

/// Mean of absolute deviations from the slice mean.
#[must_use]
pub fn mean_absolute_deviation<T: TaFloat>(data: &[T]) -> T {
    let center = mean(data);
    let total = data.iter().fold(T::ZERO, |acc, &x| acc + (x - center).abs());
    total / <T as TaFloat>::from_usize(data.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mean() {
        assert_relative_eq!(mean(&[1.0, 2.0, 3.0, 4.0]), 2.5, epsilon = 1e-12);
    }

    #[test]
    fn test_population_variance() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let m = mean(&data);
        assert_relative_eq!(m, 5.0, epsilon = 1e-12);
        // Textbook example: population std dev is exactly 2.
        assert_relative_eq!(population_variance(&data, m), 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_mean_absolute_deviation() {
        // mean 3, deviations 2 1 0 1 2
        assert_relative_eq!(
            mean_absolute_deviation(&[1.0, 2.0, 3.0, 4.0, 5.0]),
            1.2,
            epsilon = 1e-12
        );
        assert_eq!(mean_absolute_deviation(&[7.0, 7.0, 7.0]), 0.0);
    }
}
