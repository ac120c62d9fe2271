//! Engine builder

use metricast_core::confidence::z_score;
use metricast_core::ForecastEngine;
use metricast_spi::{
    ConfidenceIntervalComputer, ForecastConfig, ForecastError, Result, SeasonalityDetector,
    Smoother, TrendEstimator,
};
use std::sync::Arc;
use tracing::debug;

/// Builder for [`ForecastEngine`].
///
/// Starts from [`ForecastConfig::default`]; every setter overrides a single
/// field. Parameters are validated once, in [`EngineBuilder::build`].
///
/// ```rust
/// use metricast_api::EngineBuilder;
///
/// let engine = EngineBuilder::new()
///     .alpha(0.5)
///     .confidence_level(0.95)
///     .build()
///     .unwrap();
/// assert_eq!(engine.config().z_score, 1.96);
/// ```
#[derive(Default)]
pub struct EngineBuilder {
    config: ForecastConfig,
    confidence_level: Option<f64>,
    trend: Option<Arc<dyn TrendEstimator>>,
    seasonality: Option<Arc<dyn SeasonalityDetector>>,
    smoother: Option<Arc<dyn Smoother>>,
    intervals: Option<Arc<dyn ConfidenceIntervalComputer>>,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration
    pub fn config(mut self, config: ForecastConfig) -> Self {
        self.config = config;
        self
    }

    pub fn alpha(mut self, alpha: f64) -> Self {
        self.config.alpha = alpha;
        self
    }

    pub fn beta(mut self, beta: f64) -> Self {
        self.config.beta = beta;
        self
    }

    pub fn season_length(mut self, season_length: usize) -> Self {
        self.config.season_length = season_length;
        self
    }

    pub fn seasonality_threshold(mut self, threshold: f64) -> Self {
        self.config.seasonality_threshold = threshold;
        self
    }

    /// Set the interval multiplier directly
    pub fn z_score(mut self, z: f64) -> Self {
        self.config.z_score = z;
        self.confidence_level = None;
        self
    }

    /// Set the interval multiplier from a two-sided confidence level,
    /// e.g. `0.95`
    pub fn confidence_level(mut self, level: f64) -> Self {
        self.confidence_level = Some(level);
        self
    }

    pub fn variance_inflation(mut self, inflation: f64) -> Self {
        self.config.variance_inflation = inflation;
        self
    }

    pub fn volatility_window(mut self, window: usize) -> Self {
        self.config.volatility_window = window;
        self
    }

    pub fn min_history(mut self, min_history: usize) -> Self {
        self.config.min_history = min_history;
        self
    }

    pub fn default_horizon(mut self, horizon: usize) -> Self {
        self.config.default_horizon = horizon;
        self
    }

    /// Forecast independent metrics on the rayon pool
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.config.parallel = parallel;
        self
    }

    pub fn trend_estimator(mut self, trend: impl TrendEstimator + 'static) -> Self {
        self.trend = Some(Arc::new(trend));
        self
    }

    pub fn seasonality_detector(mut self, detector: impl SeasonalityDetector + 'static) -> Self {
        self.seasonality = Some(Arc::new(detector));
        self
    }

    pub fn smoother(mut self, smoother: impl Smoother + 'static) -> Self {
        self.smoother = Some(Arc::new(smoother));
        self
    }

    pub fn interval_computer(mut self, intervals: impl ConfidenceIntervalComputer + 'static) -> Self {
        self.intervals = Some(Arc::new(intervals));
        self
    }

    /// Validate the configuration and assemble the engine
    pub fn build(self) -> Result<ForecastEngine> {
        let mut config = self.config;
        if let Some(level) = self.confidence_level {
            if !(level > 0.0 && level < 1.0) {
                return Err(ForecastError::InvalidParameter {
                    name: "confidence_level".to_string(),
                    reason: "must be between 0 and 1 (exclusive)".to_string(),
                });
            }
            config.z_score = z_score(level);
            debug!(level, z_score = config.z_score, "interval multiplier from confidence level");
        }

        let mut engine = ForecastEngine::new(config)?;
        if let Some(trend) = self.trend {
            engine = engine.with_trend_estimator(trend);
        }
        if let Some(detector) = self.seasonality {
            engine = engine.with_seasonality_detector(detector);
        }
        if let Some(smoother) = self.smoother {
            engine = engine.with_smoother(smoother);
        }
        if let Some(intervals) = self.intervals {
            engine = engine.with_interval_computer(intervals);
        }
        Ok(engine)
    }
}
