//! Trait for linear trend estimation

use crate::model::LinearFit;

/// Fits a straight line over the index of a series.
///
/// Implementations are total: degenerate inputs yield a flat fit with
/// `r2 = 0` rather than an error.
pub trait TrendEstimator: Send + Sync {
    fn fit(&self, data: &[f64]) -> LinearFit;
}
