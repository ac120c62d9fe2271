//! Model module containing data structures

mod cadence;
mod confidence_interval;
mod data_point;
mod forecast_config;
mod forecast_result;
mod holt_state;
mod linear_fit;
mod seasonal_profile;

pub use cadence::{Cadence, Period};
pub use confidence_interval::ConfidenceInterval;
pub use data_point::DataPoint;
pub use forecast_config::ForecastConfig;
pub use forecast_result::{ForecastPoint, ForecastResult, Trend};
pub use holt_state::HoltState;
pub use linear_fit::LinearFit;
pub use seasonal_profile::SeasonalProfile;
