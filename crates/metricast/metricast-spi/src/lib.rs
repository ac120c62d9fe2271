//! Metricast Service Provider Interface
//!
//! Defines the model types, component contracts and error type shared by the
//! forecasting engine and its callers.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{
    ConfidenceIntervalComputer, SeasonalityDetector, Smoother, TrendEstimator,
};
pub use error::{ForecastError, Result};
pub use model::{
    Cadence, ConfidenceInterval, DataPoint, ForecastConfig, ForecastPoint, ForecastResult,
    HoltState, LinearFit, Period, SeasonalProfile, Trend,
};
