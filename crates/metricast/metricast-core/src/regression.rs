//! Linear trend extraction
//!
//! Ordinary least squares over the index `t = 0..n`, in closed form from the
//! sums of `t`, `y`, `t·y` and `t²`.

use crate::stats::mean;
use metricast_spi::{LinearFit, TrendEstimator};

/// OLS trend estimator
#[derive(Debug, Clone, Copy, Default)]
pub struct OlsTrend;

impl OlsTrend {
    pub fn new() -> Self {
        Self
    }
}

impl TrendEstimator for OlsTrend {
    fn fit(&self, data: &[f64]) -> LinearFit {
        linear_fit(data)
    }
}

/// Fit `y = intercept + slope * t` by ordinary least squares.
///
/// Never fails:
/// - fewer than two points give a flat line through the first value (or 0)
/// - a zero denominator gives a flat line through the mean
/// - a constant series gives `r2 = 0`, not a perfect fit
pub fn linear_fit(data: &[f64]) -> LinearFit {
    if data.len() < 2 {
        return LinearFit {
            slope: 0.0,
            intercept: data.first().copied().unwrap_or(0.0),
            r2: 0.0,
        };
    }

    let n = data.len() as f64;

    // Time indices: 0, 1, 2, ...
    let sum_t: f64 = (0..data.len()).map(|i| i as f64).sum();
    let sum_y: f64 = data.iter().sum();
    let sum_t2: f64 = (0..data.len()).map(|i| (i * i) as f64).sum();
    let sum_ty: f64 = data.iter().enumerate().map(|(i, &y)| i as f64 * y).sum();

    let denominator = n * sum_t2 - sum_t * sum_t;
    if denominator == 0.0 {
        return LinearFit {
            slope: 0.0,
            intercept: mean(data),
            r2: 0.0,
        };
    }

    let slope = (n * sum_ty - sum_t * sum_y) / denominator;
    let intercept = (sum_y - slope * sum_t) / n;

    let mean_y = sum_y / n;
    let ss_tot: f64 = data.iter().map(|&y| (y - mean_y).powi(2)).sum();
    let ss_res: f64 = data
        .iter()
        .enumerate()
        .map(|(i, &y)| {
            let predicted = intercept + slope * i as f64;
            (y - predicted).powi(2)
        })
        .sum();

    let r2 = if ss_tot == 0.0 {
        0.0
    } else {
        1.0 - ss_res / ss_tot
    };

    LinearFit {
        slope,
        intercept,
        r2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_regression() {
        let data: Vec<f64> = (0..10).map(|i| 10.0 + 2.0 * i as f64).collect();
        let fit = linear_fit(&data);

        assert!((fit.slope - 2.0).abs() < 1e-10);
        assert!((fit.intercept - 10.0).abs() < 1e-10);
        assert!((fit.r2 - 1.0).abs() < 1e-10);
        assert!((fit.value_at(10) - 30.0).abs() < 1e-10);
    }

    #[test]
    fn test_empty_series() {
        let fit = linear_fit(&[]);
        assert_eq!(fit, LinearFit { slope: 0.0, intercept: 0.0, r2: 0.0 });
    }

    #[test]
    fn test_single_point() {
        let fit = linear_fit(&[42.0]);
        assert_eq!(fit.slope, 0.0);
        assert_eq!(fit.intercept, 42.0);
        assert_eq!(fit.r2, 0.0);
    }

    #[test]
    fn test_two_points_is_exact() {
        let fit = linear_fit(&[5.0, 8.0]);
        assert!((fit.slope - 3.0).abs() < 1e-12);
        assert!((fit.intercept - 5.0).abs() < 1e-12);
        assert!((fit.r2 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_constant_series_has_zero_r2() {
        let fit = linear_fit(&[50.0; 6]);
        assert_eq!(fit.slope, 0.0);
        assert!((fit.intercept - 50.0).abs() < 1e-12);
        assert_eq!(fit.r2, 0.0);
    }

    #[test]
    fn test_noisy_series_partial_fit() {
        let data = [10.0, 14.0, 9.0, 15.0, 11.0, 16.0];
        let fit = linear_fit(&data);
        assert!(fit.slope > 0.0);
        assert!(fit.r2 > 0.0 && fit.r2 < 1.0);
    }

    #[test]
    fn test_estimator_matches_free_function() {
        let data = [3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0];
        assert_eq!(OlsTrend::new().fit(&data), linear_fit(&data));
    }
}
