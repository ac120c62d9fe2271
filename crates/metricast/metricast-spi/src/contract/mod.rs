//! Contract module containing trait definitions for the engine stages

mod confidence_interval_computer;
mod seasonality_detector;
mod smoother;
mod trend_estimator;

pub use confidence_interval_computer::ConfidenceIntervalComputer;
pub use seasonality_detector::SeasonalityDetector;
pub use smoother::Smoother;
pub use trend_estimator::TrendEstimator;
