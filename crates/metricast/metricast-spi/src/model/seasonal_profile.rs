//! Seasonal index model

use serde::{Deserialize, Serialize};

/// Additive seasonal indices, one per phase of the cycle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonalProfile {
    indices: Vec<f64>,
}

impl SeasonalProfile {
    pub fn new(indices: Vec<f64>) -> Self {
        Self { indices }
    }

    /// Cycle length
    pub fn period(&self) -> usize {
        self.indices.len()
    }

    pub fn indices(&self) -> &[f64] {
        &self.indices
    }

    /// Seasonal offset for the observation at index `i` (wraps around the cycle)
    pub fn index_for(&self, i: usize) -> f64 {
        if self.indices.is_empty() {
            return 0.0;
        }
        self.indices[i % self.indices.len()]
    }

    /// Root mean square of the indices, the size of the seasonal swing
    pub fn rms(&self) -> f64 {
        if self.indices.is_empty() {
            return 0.0;
        }
        let sum_sq: f64 = self.indices.iter().map(|s| s * s).sum();
        (sum_sq / self.indices.len() as f64).sqrt()
    }
}
