//! Trait for point forecasting

/// Produces `horizon` point forecasts from a (deseasonalized) series.
///
/// Implementations never return negative values and always return exactly
/// `horizon` values, whatever the input length.
pub trait Smoother: Send + Sync {
    fn forecast(&self, data: &[f64], horizon: usize) -> Vec<f64>;

    /// Name of this smoother, used in logs
    fn name(&self) -> &str;
}
