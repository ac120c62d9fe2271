//! Prediction intervals from recent volatility
//!
//! Dispersion is the population standard deviation of the last few
//! observations, not of the whole history. The variance grows linearly with
//! the forecast step, so the spread at step `i` (0-indexed) is
//! `std · z · sqrt(1 + i · inflation)`.

use crate::stats::{population_std_dev, tail};
use metricast_spi::{ConfidenceInterval, ConfidenceIntervalComputer};

/// Interval computer driven by the volatility of the most recent observations
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecentVolatilityInterval {
    window: usize,
    z_score: f64,
    variance_inflation: f64,
}

impl RecentVolatilityInterval {
    /// 90% interval over the last 6 observations, 15% variance growth per step
    pub fn new() -> Self {
        Self {
            window: 6,
            z_score: 1.645,
            variance_inflation: 0.15,
        }
    }

    pub fn with_params(window: usize, z_score: f64, variance_inflation: f64) -> Self {
        Self {
            window,
            z_score,
            variance_inflation,
        }
    }

    /// Half-width of the interval at each forecast step
    pub fn spreads(&self, history: &[f64], steps: usize) -> Vec<f64> {
        let std_dev = population_std_dev(tail(history, self.window));
        (0..steps)
            .map(|i| std_dev * self.z_score * (1.0 + i as f64 * self.variance_inflation).sqrt())
            .collect()
    }
}

impl Default for RecentVolatilityInterval {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfidenceIntervalComputer for RecentVolatilityInterval {
    fn compute(&self, history: &[f64], predicted: &[f64]) -> ConfidenceInterval {
        let spreads = self.spreads(history, predicted.len());

        let lower = predicted
            .iter()
            .zip(spreads.iter())
            .map(|(&p, &s)| (p - s).max(0.0))
            .collect();

        let upper = predicted
            .iter()
            .zip(spreads.iter())
            .map(|(&p, &s)| p + s)
            .collect();

        ConfidenceInterval {
            predicted: predicted.to_vec(),
            lower,
            upper,
            z_score: self.z_score,
        }
    }
}

/// Get z-score for a given two-sided confidence level
pub fn z_score(confidence_level: f64) -> f64 {
    match confidence_level {
        x if x >= 0.99 => 2.576,
        x if x >= 0.95 => 1.96,
        x if x >= 0.90 => 1.645,
        x if x >= 0.80 => 1.282,
        _ => 1.645, // default to 90%
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spread_uses_recent_window_only() {
        // Wild early history is ignored; the last 8 values have std 2
        let history = [1000.0, -500.0, 2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let computer = RecentVolatilityInterval::with_params(8, 1.0, 0.0);
        let spreads = computer.spreads(&history, 2);
        assert!((spreads[0] - 2.0).abs() < 1e-12);
        assert!((spreads[1] - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_spread_widens_with_horizon() {
        let history = [10.0, 12.0, 11.0, 13.0, 12.0, 14.0];
        let spreads = RecentVolatilityInterval::new().spreads(&history, 4);
        let std_dev = population_std_dev(&history);

        assert!((spreads[0] - std_dev * 1.645).abs() < 1e-12);
        assert!((spreads[2] - std_dev * 1.645 * 1.3f64.sqrt()).abs() < 1e-12);
        for pair in spreads.windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }

    #[test]
    fn test_lower_clamped_upper_not() {
        let history = [0.0, 100.0, 0.0, 100.0, 0.0, 100.0];
        let ci = RecentVolatilityInterval::new().compute(&history, &[10.0, 20.0]);

        assert_eq!(ci.lower, vec![0.0, 0.0]);
        // std = 50, spread0 = 82.25
        assert!((ci.upper[0] - 92.25).abs() < 1e-9);
        assert!(ci.upper[1] > ci.upper[0]);
    }

    #[test]
    fn test_constant_history_has_zero_width() {
        let ci = RecentVolatilityInterval::new().compute(&[50.0; 6], &[50.0, 50.0]);
        assert_eq!(ci.lower, vec![50.0, 50.0]);
        assert_eq!(ci.upper, vec![50.0, 50.0]);
        assert_eq!(ci.z_score, 1.645);
    }

    #[test]
    fn test_containment() {
        let history = [120.0, 80.0, 150.0, 90.0, 200.0, 60.0, 170.0];
        let predicted = [5.0, 100.0, 300.0];
        let ci = RecentVolatilityInterval::new().compute(&history, &predicted);
        for i in 0..ci.len() {
            assert!(ci.lower[i] >= 0.0);
            assert!(ci.lower[i] <= ci.predicted[i]);
            assert!(ci.predicted[i] <= ci.upper[i]);
        }
    }

    #[test]
    fn test_z_score_table() {
        assert_eq!(z_score(0.99), 2.576);
        assert_eq!(z_score(0.95), 1.96);
        assert_eq!(z_score(0.90), 1.645);
        assert_eq!(z_score(0.85), 1.282);
        assert_eq!(z_score(0.5), 1.645);
    }
}
