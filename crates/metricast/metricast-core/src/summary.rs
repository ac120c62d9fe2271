//! Trend classification and growth summary

use metricast_spi::{LinearFit, Trend};

/// Slope as a percentage of the series mean, 0 when the mean is not positive
pub fn slope_percent(fit: &LinearFit, mean_value: f64) -> f64 {
    if mean_value > 0.0 {
        fit.slope / mean_value * 100.0
    } else {
        0.0
    }
}

/// Classify the direction of a linear fit.
///
/// A series is only growing or declining when its slope exceeds
/// `slope_threshold` percent of the mean per period *and* the fit explains
/// more than `r2_gate` of the variance; noisy flat series stay stable.
pub fn classify_trend(fit: &LinearFit, mean_value: f64, slope_threshold: f64, r2_gate: f64) -> Trend {
    let pct = slope_percent(fit, mean_value);
    if pct > slope_threshold && fit.r2 > r2_gate {
        Trend::Growing
    } else if pct < -slope_threshold && fit.r2 > r2_gate {
        Trend::Declining
    } else {
        Trend::Stable
    }
}

/// `min(1, |r2|)`
pub fn trend_strength(r2: f64) -> f64 {
    r2.abs().min(1.0)
}

/// Mean period-over-period change in percent.
///
/// Steps whose previous value is 0 have no defined rate and are skipped, so a
/// metric that starts from zero only counts growth from its first non-zero
/// value. Returns 0 when no step qualifies.
pub fn average_growth_rate(values: &[f64]) -> f64 {
    let rates: Vec<f64> = values
        .windows(2)
        .filter(|w| w[0] != 0.0)
        .map(|w| (w[1] - w[0]) / w[0] * 100.0)
        .collect();

    if rates.is_empty() {
        return 0.0;
    }
    rates.iter().sum::<f64>() / rates.len() as f64
}
