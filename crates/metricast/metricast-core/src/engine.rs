//! Forecast orchestration
//!
//! For one metric series the engine runs:
//!
//! 1. a linear fit over the raw values (trend class and R²)
//! 2. seasonality detection on the raw values
//! 3. smoothing of the (deseasonalized) values, then re-seasonalizing
//! 4. interval bounds from the raw history
//! 5. period labels continuing the last historical label
//!
//! `forecast` is a pure function of its input and never fails; a series that
//! is too short yields [`ForecastResult::empty`]. `try_forecast` reports the
//! same case as [`ForecastError::InsufficientData`].

use crate::confidence::RecentVolatilityInterval;
use crate::period::{fallback_periods, generate_future_periods};
use crate::regression::OlsTrend;
use crate::seasonality::{deseasonalize, reseasonalize, SeasonalIndexDetector};
use crate::smoothing::HoltLinear;
use crate::stats::{mean, round_to};
use crate::summary::{average_growth_rate, classify_trend, trend_strength};
use metricast_spi::{
    Cadence, ConfidenceIntervalComputer, DataPoint, ForecastConfig, ForecastError, ForecastPoint,
    ForecastResult, Result, SeasonalityDetector, Smoother, TrendEstimator,
};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, debug_span, warn};

/// Stateless forecasting engine.
///
/// Holds only configuration and the stage implementations, so one engine can
/// be shared freely between threads.
///
/// # Example
///
/// ```rust
/// use metricast_core::{Cadence, DataPoint, ForecastEngine, Trend};
///
/// let series = vec![
///     DataPoint::new("2025-01", 1000.0),
///     DataPoint::new("2025-02", 1100.0),
///     DataPoint::new("2025-03", 1210.0),
///     DataPoint::new("2025-04", 1331.0),
/// ];
/// let result = ForecastEngine::default().forecast(&series, Cadence::Monthly, 2);
/// assert_eq!(result.periods(), vec!["2025-05", "2025-06"]);
/// assert_eq!(result.trend, Trend::Growing);
/// ```
#[derive(Clone)]
pub struct ForecastEngine {
    config: ForecastConfig,
    trend: Arc<dyn TrendEstimator>,
    seasonality: Arc<dyn SeasonalityDetector>,
    smoother: Arc<dyn Smoother>,
    intervals: Arc<dyn ConfidenceIntervalComputer>,
}

impl ForecastEngine {
    /// Build an engine with the standard stages tuned by `config`
    pub fn new(config: ForecastConfig) -> Result<Self> {
        config.validate()?;
        let smoother = HoltLinear::new(config.alpha, config.beta)?;
        Ok(Self::assemble(config, smoother))
    }

    fn assemble(config: ForecastConfig, smoother: HoltLinear) -> Self {
        let seasonality =
            SeasonalIndexDetector::with_params(config.season_length, config.seasonality_threshold);
        let intervals = RecentVolatilityInterval::with_params(
            config.volatility_window,
            config.z_score,
            config.variance_inflation,
        );

        Self {
            config,
            trend: Arc::new(OlsTrend::new()),
            seasonality: Arc::new(seasonality),
            smoother: Arc::new(smoother),
            intervals: Arc::new(intervals),
        }
    }

    pub fn config(&self) -> &ForecastConfig {
        &self.config
    }

    /// Replace the trend estimator
    pub fn with_trend_estimator(mut self, trend: Arc<dyn TrendEstimator>) -> Self {
        self.trend = trend;
        self
    }

    /// Replace the seasonality detector
    pub fn with_seasonality_detector(mut self, detector: Arc<dyn SeasonalityDetector>) -> Self {
        self.seasonality = detector;
        self
    }

    /// Replace the smoother
    pub fn with_smoother(mut self, smoother: Arc<dyn Smoother>) -> Self {
        self.smoother = smoother;
        self
    }

    /// Replace the interval computer
    pub fn with_interval_computer(mut self, intervals: Arc<dyn ConfidenceIntervalComputer>) -> Self {
        self.intervals = intervals;
        self
    }

    /// Forecast one metric `horizon` periods ahead
    pub fn forecast(&self, points: &[DataPoint], cadence: Cadence, horizon: usize) -> ForecastResult {
        let values = DataPoint::values(points);
        let last = match points.last() {
            Some(point) if values.len() >= self.config.min_history => point,
            _ => {
                debug!(
                    points = values.len(),
                    required = self.config.min_history,
                    "not enough history to forecast"
                );
                return ForecastResult::empty();
            }
        };

        let fit = self.trend.fit(&values);
        let profile = self.seasonality.detect(&values, &fit);

        let predicted = match &profile {
            Some(profile) => {
                let adjusted = deseasonalize(&values, profile);
                let base = self.smoother.forecast(&adjusted, horizon);
                reseasonalize(&base, profile, values.len())
            }
            None => self.smoother.forecast(&values, horizon),
        };

        let interval = self.intervals.compute(&values, &predicted);
        let labels = self.future_labels(&last.period, cadence, horizon);

        let forecasts: Vec<ForecastPoint> = labels
            .into_iter()
            .zip(interval.predicted.iter())
            .zip(interval.lower.iter().zip(interval.upper.iter()))
            .map(|((period, &predicted), (&lower, &upper))| ForecastPoint {
                period,
                predicted: round_to(predicted, 2),
                lower: round_to(lower, 2),
                upper: round_to(upper, 2),
            })
            .collect();

        let trend = classify_trend(
            &fit,
            mean(&values),
            self.config.trend_slope_threshold,
            self.config.trend_r2_gate,
        );

        debug!(
            points = values.len(),
            horizon,
            seasonal = profile.is_some(),
            %trend,
            smoother = self.smoother.name(),
            widest_band = interval.widths().last().copied().unwrap_or(0.0),
            "forecast computed"
        );

        ForecastResult {
            forecasts,
            trend,
            trend_strength: round_to(trend_strength(fit.r2), 2),
            seasonality: profile.is_some(),
            avg_growth_rate: round_to(average_growth_rate(&values), 2),
            r2: round_to(fit.r2, 3),
        }
    }

    /// Like [`ForecastEngine::forecast`], but a series shorter than
    /// `min_history` is an error instead of an empty result
    pub fn try_forecast(
        &self,
        points: &[DataPoint],
        cadence: Cadence,
        horizon: usize,
    ) -> Result<ForecastResult> {
        if points.len() < self.config.min_history {
            return Err(ForecastError::InsufficientData {
                required: self.config.min_history,
                actual: points.len(),
            });
        }
        Ok(self.forecast(points, cadence, horizon))
    }

    /// Forecast with the configured default horizon
    pub fn forecast_default(&self, points: &[DataPoint], cadence: Cadence) -> ForecastResult {
        self.forecast(points, cadence, self.config.default_horizon)
    }

    /// Forecast several independent metrics.
    ///
    /// Metrics never influence each other. With `parallel` set in the
    /// configuration the metrics are spread over the rayon pool.
    pub fn forecast_many(
        &self,
        series: &BTreeMap<String, Vec<DataPoint>>,
        cadence: Cadence,
        horizon: usize,
    ) -> BTreeMap<String, ForecastResult> {
        let run = |(name, points): (&String, &Vec<DataPoint>)| {
            let _span = debug_span!("metric", metric = %name).entered();
            (name.clone(), self.forecast(points, cadence, horizon))
        };

        if self.config.parallel {
            series.par_iter().map(run).collect()
        } else {
            series.iter().map(run).collect()
        }
    }

    fn future_labels(&self, last: &str, cadence: Cadence, horizon: usize) -> Vec<String> {
        generate_future_periods(last, cadence, horizon).unwrap_or_else(|err| {
            warn!(label = last, %cadence, error = %err, "no calendar labels for this series, using offsets");
            fallback_periods(last, horizon)
        })
    }
}

impl Default for ForecastEngine {
    fn default() -> Self {
        Self::assemble(ForecastConfig::default(), HoltLinear::default())
    }
}
