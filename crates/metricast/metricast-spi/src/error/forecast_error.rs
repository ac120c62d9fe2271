//! Forecast error types

use thiserror::Error;

/// Errors raised by the fallible parts of the engine.
///
/// The forecasting path itself never returns these; they come from
/// configuration validation, period parsing and the strict component APIs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    /// Insufficient data points for the operation
    #[error("Insufficient data: need at least {required} points, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// Invalid parameter value
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Period label that does not match the requested cadence
    #[error("Invalid period: {0}")]
    InvalidPeriod(String),
}

impl ForecastError {
    pub(crate) fn invalid_parameter(name: &str, reason: &str) -> Self {
        Self::InvalidParameter {
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }
}
