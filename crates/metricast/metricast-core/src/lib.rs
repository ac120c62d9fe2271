//! Metricast Core
//!
//! Implementations of the forecasting stages (linear trend, seasonal indices,
//! Holt smoothing, recent-volatility intervals, period labels) and the
//! [`ForecastEngine`] that wires them together.

pub mod confidence;
pub mod engine;
pub mod period;
pub mod regression;
pub mod seasonality;
pub mod smoothing;
pub mod stats;
pub mod summary;

// Re-export SPI types for implementations
pub use metricast_spi::{
    Cadence, ConfidenceInterval, ConfidenceIntervalComputer, DataPoint, ForecastConfig,
    ForecastError, ForecastPoint, ForecastResult, HoltState, LinearFit, Period, Result,
    SeasonalProfile, SeasonalityDetector, Smoother, Trend, TrendEstimator,
};

// Re-export main types
pub use confidence::RecentVolatilityInterval;
pub use engine::ForecastEngine;
pub use period::generate_future_periods;
pub use regression::{linear_fit, OlsTrend};
pub use seasonality::SeasonalIndexDetector;
pub use smoothing::HoltLinear;
