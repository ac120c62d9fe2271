//! Metricast Consumer API
//!
//! Entry points for callers that hold ordered `{period, value}` series:
//!
//! - [`forecast_monthly`] / [`forecast_yearly`] with the default engine
//! - [`forecast_series`] for an explicit cadence and horizon
//! - [`forecast_multiple_metrics`] for a map of named series
//! - [`EngineBuilder`] for tuned or customised engines
//!
//! None of the forecast functions fail. A series shorter than three points
//! produces an empty [`ForecastResult`].

pub mod builder;

pub use builder::EngineBuilder;

// Re-export from core
pub use metricast_core::{
    confidence, linear_fit, period, regression, seasonality, smoothing, stats, summary,
    generate_future_periods, ForecastEngine, HoltLinear, OlsTrend, RecentVolatilityInterval,
    SeasonalIndexDetector,
};

// Re-export model types and contracts from SPI
pub use metricast_spi::{
    Cadence, ConfidenceInterval, ConfidenceIntervalComputer, DataPoint, ForecastConfig,
    ForecastError, ForecastPoint, ForecastResult, HoltState, LinearFit, Period, Result,
    SeasonalProfile, SeasonalityDetector, Smoother, Trend, TrendEstimator,
};

use std::collections::BTreeMap;
use std::sync::OnceLock;

fn default_engine() -> &'static ForecastEngine {
    static ENGINE: OnceLock<ForecastEngine> = OnceLock::new();
    ENGINE.get_or_init(ForecastEngine::default)
}

/// Forecast a monthly series. `horizon` defaults to 6.
///
/// ```rust
/// use metricast_api::{forecast_monthly, DataPoint};
///
/// let series = vec![
///     DataPoint::new("2025-01", 120.0),
///     DataPoint::new("2025-02", 135.0),
///     DataPoint::new("2025-03", 150.0),
/// ];
/// let result = forecast_monthly(&series, None);
/// assert_eq!(result.forecasts.len(), 6);
/// assert_eq!(result.forecasts[0].period, "2025-04");
/// ```
pub fn forecast_monthly(points: &[DataPoint], horizon: Option<usize>) -> ForecastResult {
    let engine = default_engine();
    let horizon = horizon.unwrap_or(engine.config().default_horizon);
    engine.forecast(points, Cadence::Monthly, horizon)
}

/// Forecast a yearly series three years ahead
pub fn forecast_yearly(points: &[DataPoint]) -> ForecastResult {
    default_engine().forecast(points, Cadence::Yearly, Cadence::Yearly.horizon())
}

/// Forecast a series at an explicit cadence
pub fn forecast_series(points: &[DataPoint], cadence: Cadence, horizon: usize) -> ForecastResult {
    default_engine().forecast(points, cadence, horizon)
}

/// Forecast each named monthly series independently.
///
/// Keys of the result match the keys of `series`; a short series maps to an
/// empty result rather than being dropped.
pub fn forecast_multiple_metrics(
    series: &BTreeMap<String, Vec<DataPoint>>,
    horizon: Option<usize>,
) -> BTreeMap<String, ForecastResult> {
    let engine = default_engine();
    let horizon = horizon.unwrap_or(engine.config().default_horizon);
    engine.forecast_many(series, Cadence::Monthly, horizon)
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        forecast_monthly, forecast_multiple_metrics, forecast_series, forecast_yearly,
        generate_future_periods, EngineBuilder,
    };
    pub use metricast_core::ForecastEngine;
    pub use metricast_spi::{
        Cadence, DataPoint, ForecastConfig, ForecastError, ForecastPoint, ForecastResult, Result,
        Trend,
    };
}
