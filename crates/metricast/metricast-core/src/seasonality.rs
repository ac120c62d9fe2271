//! Seasonal index detection
//!
//! Detrends a series with its linear fit and averages the residuals per phase
//! of a fixed-length cycle. The pattern is kept only when its RMS reaches a
//! fraction of the series mean.

use crate::stats::mean;
use metricast_spi::{LinearFit, SeasonalProfile, SeasonalityDetector};
use tracing::debug;

/// Fixed-period seasonal index detector
#[derive(Debug, Clone, Copy)]
pub struct SeasonalIndexDetector {
    period: usize,
    /// Minimum RMS of the indices as a fraction of the mean value
    threshold: f64,
}

impl SeasonalIndexDetector {
    pub fn new() -> Self {
        Self {
            period: 12,
            threshold: 0.05,
        }
    }

    pub fn with_params(period: usize, threshold: f64) -> Self {
        Self { period, threshold }
    }
}

impl Default for SeasonalIndexDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl SeasonalityDetector for SeasonalIndexDetector {
    fn detect(&self, data: &[f64], fit: &LinearFit) -> Option<SeasonalProfile> {
        detect_seasonality(data, fit, self.period, self.threshold)
    }

    fn period(&self) -> usize {
        self.period
    }
}

/// Estimate additive seasonal indices of length `period`.
///
/// Returns `None` when fewer than two full cycles are available or when the
/// RMS of the indices is below `threshold * mean(data)`.
pub fn detect_seasonality(
    data: &[f64],
    fit: &LinearFit,
    period: usize,
    threshold: f64,
) -> Option<SeasonalProfile> {
    if period == 0 || data.len() < period * 2 {
        return None;
    }

    let detrended: Vec<f64> = data
        .iter()
        .enumerate()
        .map(|(i, &y)| y - fit.value_at(i))
        .collect();

    // Average by phase of the cycle
    let indices: Vec<f64> = (0..period)
        .map(|phase| {
            let values: Vec<f64> = detrended.iter().skip(phase).step_by(period).copied().collect();
            mean(&values)
        })
        .collect();

    let profile = SeasonalProfile::new(indices);
    let rms = profile.rms();
    let floor = mean(data) * threshold;
    if rms < floor {
        debug!(rms, floor, period, "seasonal pattern below threshold, treated as noise");
        return None;
    }

    Some(profile)
}

/// Remove the seasonal component from each observation
pub fn deseasonalize(data: &[f64], profile: &SeasonalProfile) -> Vec<f64> {
    data.iter()
        .enumerate()
        .map(|(i, &y)| y - profile.index_for(i))
        .collect()
}

/// Add the seasonal component back onto forecasts that start right after a
/// history of length `history_len`, clamping at zero
pub fn reseasonalize(forecast: &[f64], profile: &SeasonalProfile, history_len: usize) -> Vec<f64> {
    forecast
        .iter()
        .enumerate()
        .map(|(step, &value)| (value + profile.index_for(history_len + step)).max(0.0))
        .collect()
}
