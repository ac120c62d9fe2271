//! Holt smoothing state

use serde::{Deserialize, Serialize};

/// Final level and trend after smoothing a series
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HoltState {
    pub level: f64,
    pub trend: f64,
}

impl HoltState {
    /// Unclamped projection `h` steps past the last observation
    pub fn project(&self, h: usize) -> f64 {
        self.level + self.trend * h as f64
    }
}
