//! Error module containing error types and result aliases

mod forecast_error;

pub use forecast_error::ForecastError;

/// Result type for fallible metricast operations
pub type Result<T> = std::result::Result<T, ForecastError>;
