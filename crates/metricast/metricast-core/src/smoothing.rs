//! Holt's linear trend method
//!
//! Double exponential smoothing: a level and a trend, each updated as an
//! exponentially weighted average.
//!
//! ```text
//! level_t = α·y_t + (1 − α)(level_{t−1} + trend_{t−1})
//! trend_t = β(level_t − level_{t−1}) + (1 − β)·trend_{t−1}
//! ŷ_{t+h} = max(0, level_t + h·trend_t)
//! ```

use metricast_spi::{ForecastError, HoltState, Result, Smoother};

/// Holt's linear exponential smoothing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoltLinear {
    /// Level smoothing parameter
    alpha: f64,
    /// Trend smoothing parameter
    beta: f64,
}

impl HoltLinear {
    /// Create a new Holt smoother
    ///
    /// # Arguments
    ///
    /// * `alpha` - Level smoothing (0 < alpha < 1)
    /// * `beta` - Trend smoothing (0 < beta < 1)
    pub fn new(alpha: f64, beta: f64) -> Result<Self> {
        if !(0.0 < alpha && alpha < 1.0) {
            return Err(ForecastError::InvalidParameter {
                name: "alpha".to_string(),
                reason: "must be between 0 and 1 (exclusive)".to_string(),
            });
        }
        if !(0.0 < beta && beta < 1.0) {
            return Err(ForecastError::InvalidParameter {
                name: "beta".to_string(),
                reason: "must be between 0 and 1 (exclusive)".to_string(),
            });
        }

        Ok(Self { alpha, beta })
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Run the smoother over `data` and return the final level and trend.
    ///
    /// With fewer than two observations there is no trend to estimate; the
    /// level is the only observation (or 0) and the trend is 0.
    pub fn fit(&self, data: &[f64]) -> HoltState {
        if data.len() < 2 {
            return HoltState {
                level: data.first().copied().unwrap_or(0.0),
                trend: 0.0,
            };
        }

        let mut level = data[0];
        let mut trend = data[1] - data[0];

        for &value in &data[1..] {
            let prev_level = level;
            level = self.alpha * value + (1.0 - self.alpha) * (level + trend);
            trend = self.beta * (level - prev_level) + (1.0 - self.beta) * trend;
        }

        HoltState { level, trend }
    }
}

impl Default for HoltLinear {
    fn default() -> Self {
        Self {
            alpha: 0.35,
            beta: 0.15,
        }
    }
}

impl Smoother for HoltLinear {
    fn forecast(&self, data: &[f64], horizon: usize) -> Vec<f64> {
        let state = self.fit(data);
        (1..=horizon).map(|h| state.project(h).max(0.0)).collect()
    }

    fn name(&self) -> &str {
        "holt-linear"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_invalid_parameters() {
        assert!(HoltLinear::new(0.0, 0.15).is_err());
        assert!(HoltLinear::new(0.35, 1.0).is_err());
        assert!(HoltLinear::new(f64::NAN, 0.15).is_err());
        assert!(HoltLinear::new(0.35, 0.15).is_ok());
    }

    #[test]
    fn test_default_parameters() {
        let holt = HoltLinear::default();
        assert_eq!(holt.alpha(), 0.35);
        assert_eq!(holt.beta(), 0.15);
    }

    #[test]
    fn test_exact_line_is_tracked_exactly() {
        let data: Vec<f64> = (0..20).map(|i| 10.0 + i as f64 * 2.0).collect();
        let holt = HoltLinear::default();
        let state = holt.fit(&data);
        assert!((state.level - 48.0).abs() < 1e-9);
        assert!((state.trend - 2.0).abs() < 1e-9);

        let forecast = holt.forecast(&data, 3);
        assert!((forecast[0] - 50.0).abs() < 1e-9);
        assert!((forecast[1] - 52.0).abs() < 1e-9);
        assert!((forecast[2] - 54.0).abs() < 1e-9);
    }

    #[test]
    fn test_single_update_step() {
        // After [10, 13] the state is exact (level 13, trend 3). Then y = 15:
        // level = 0.35*15 + 0.65*16 = 15.65, trend = 0.15*2.65 + 0.85*3 = 2.9475
        let holt = HoltLinear::default();
        let state = holt.fit(&[10.0, 13.0, 15.0]);
        assert!((state.level - 15.65).abs() < 1e-12);
        assert!((state.trend - 2.9475).abs() < 1e-12);
    }

    #[test]
    fn test_short_series_repeats_first_value() {
        let holt = HoltLinear::default();
        assert_eq!(holt.forecast(&[7.5], 4), vec![7.5; 4]);
        assert_eq!(holt.forecast(&[], 2), vec![0.0; 2]);
    }

    #[test]
    fn test_negative_projection_clamped() {
        let data = [100.0, 80.0, 60.0, 40.0, 20.0, 5.0];
        let forecast = HoltLinear::default().forecast(&data, 6);
        assert_eq!(forecast.len(), 6);
        assert!(forecast.iter().all(|&v| v >= 0.0));
        assert_eq!(*forecast.last().unwrap(), 0.0);
    }

    #[test]
    fn test_zero_horizon() {
        assert!(HoltLinear::default().forecast(&[1.0, 2.0, 3.0], 0).is_empty());
    }
}
