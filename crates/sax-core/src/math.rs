//! Scalar helpers for series normalization
//!
//! Mean and population standard deviation over `f64` slices, plus the
//! tolerance below which a series is treated as constant.

/// Series with population standard deviation below this tolerance are
/// treated as constant to avoid dividing by a near-zero scale.
pub const STAT_EPS: f64 = 1e-2;

/// Arithmetic mean of a slice.
///
/// Returns 0.0 for an empty slice; callers validate lengths upstream.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation around a precomputed mean.
pub fn population_std(values: &[f64], mean: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let variance = values
        .iter()
        .map(|v| {
            let d = v - mean;
            d * d
        })
        .sum::<f64>()
        / values.len() as f64;
    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mean() {
        assert_relative_eq!(mean(&[1.0, 2.0, 3.0, 4.0]), 2.5);
        assert_relative_eq!(mean(&[-1.0, 1.0]), 0.0);
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn test_population_std() {
        // Population (not sample) convention: divide by n
        let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        let m = mean(&values);
        assert_relative_eq!(population_std(&values, m), 5.25f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_constant_series_below_tolerance() {
        let values = [3.0; 16];
        let m = mean(&values);
        assert!(population_std(&values, m) < STAT_EPS);
    }
}
