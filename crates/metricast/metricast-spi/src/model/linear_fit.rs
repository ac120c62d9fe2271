//! Linear trend model

use serde::{Deserialize, Serialize};

/// Least-squares fit of `y = intercept + slope * i` over index `i = 0..n`
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LinearFit {
    /// Change per period
    pub slope: f64,
    /// Fitted value at index 0
    pub intercept: f64,
    /// Coefficient of determination, 0 for degenerate inputs
    pub r2: f64,
}

impl LinearFit {
    /// Fitted value at index `i`
    pub fn value_at(&self, i: usize) -> f64 {
        self.intercept + self.slope * i as f64
    }
}
