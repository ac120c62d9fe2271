//! Engine tuning parameters

use crate::error::{ForecastError, Result};
use serde::{Deserialize, Serialize};

/// Tunable constants of the forecasting engine.
///
/// The defaults were chosen empirically for monthly business metrics; none of
/// them are derived. Every field can be overridden per engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastConfig {
    /// Holt level smoothing (0 < alpha < 1)
    pub alpha: f64,
    /// Holt trend smoothing (0 < beta < 1)
    pub beta: f64,
    /// Observations per seasonal cycle
    pub season_length: usize,
    /// Seasonality is kept only when the RMS of the seasonal indices reaches
    /// this fraction of the series mean
    pub seasonality_threshold: f64,
    /// Interval multiplier, 1.645 for a two-sided 90% normal interval
    pub z_score: f64,
    /// Variance growth per forecast step
    pub variance_inflation: f64,
    /// Number of most recent observations used to estimate dispersion
    pub volatility_window: usize,
    /// Minimum history length for a non-empty forecast
    pub min_history: usize,
    /// Slope, in percent of the mean per period, needed to call a trend
    pub trend_slope_threshold: f64,
    /// R² a fit must exceed before it is classified as growing or declining
    pub trend_r2_gate: f64,
    /// Horizon used when the caller does not pass one
    pub default_horizon: usize,
    /// Forecast independent metrics on the rayon pool
    pub parallel: bool,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            alpha: 0.35,
            beta: 0.15,
            season_length: 12,
            seasonality_threshold: 0.05,
            z_score: 1.645,
            variance_inflation: 0.15,
            volatility_window: 6,
            min_history: 3,
            trend_slope_threshold: 1.0,
            trend_r2_gate: 0.2,
            default_horizon: 6,
            parallel: false,
        }
    }
}

impl ForecastConfig {
    /// Check every field is within its documented range
    pub fn validate(&self) -> Result<()> {
        if !(0.0 < self.alpha && self.alpha < 1.0) {
            return Err(ForecastError::invalid_parameter(
                "alpha",
                "must be between 0 and 1 (exclusive)",
            ));
        }
        if !(0.0 < self.beta && self.beta < 1.0) {
            return Err(ForecastError::invalid_parameter(
                "beta",
                "must be between 0 and 1 (exclusive)",
            ));
        }
        if self.season_length < 2 {
            return Err(ForecastError::invalid_parameter(
                "season_length",
                "must be at least 2",
            ));
        }
        if !(self.seasonality_threshold >= 0.0 && self.seasonality_threshold.is_finite()) {
            return Err(ForecastError::invalid_parameter(
                "seasonality_threshold",
                "must be a finite non-negative fraction",
            ));
        }
        if !(self.z_score >= 0.0 && self.z_score.is_finite()) {
            return Err(ForecastError::invalid_parameter(
                "z_score",
                "must be finite and non-negative",
            ));
        }
        if !(self.variance_inflation >= 0.0 && self.variance_inflation.is_finite()) {
            return Err(ForecastError::invalid_parameter(
                "variance_inflation",
                "must be finite and non-negative",
            ));
        }
        if self.volatility_window == 0 {
            return Err(ForecastError::invalid_parameter(
                "volatility_window",
                "must be at least 1",
            ));
        }
        if self.min_history == 0 {
            return Err(ForecastError::invalid_parameter(
                "min_history",
                "must be at least 1",
            ));
        }
        if !(self.trend_slope_threshold >= 0.0 && self.trend_slope_threshold.is_finite()) {
            return Err(ForecastError::invalid_parameter(
                "trend_slope_threshold",
                "must be finite and non-negative",
            ));
        }
        if !self.trend_r2_gate.is_finite() {
            return Err(ForecastError::invalid_parameter(
                "trend_r2_gate",
                "must be finite",
            ));
        }
        Ok(())
    }
}
