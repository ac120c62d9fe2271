//! Trait for seasonality detection

use crate::model::{LinearFit, SeasonalProfile};

/// Trait for seasonality detection
pub trait SeasonalityDetector: Send + Sync {
    /// Estimate seasonal indices for `data` given its linear fit, or `None`
    /// when there is no significant repeating pattern
    fn detect(&self, data: &[f64], fit: &LinearFit) -> Option<SeasonalProfile>;

    /// Cycle length the detector looks for
    fn period(&self) -> usize;
}
