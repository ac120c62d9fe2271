//! Trait for confidence interval computation

use crate::model::ConfidenceInterval;

/// Trait for confidence interval computation
pub trait ConfidenceIntervalComputer: Send + Sync {
    /// Build bounds around `predicted` from the raw historical series
    fn compute(&self, history: &[f64], predicted: &[f64]) -> ConfidenceInterval;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mock implementation: fixed percentage band
    struct PercentBand {
        fraction: f64,
    }

    impl ConfidenceIntervalComputer for PercentBand {
        fn compute(&self, _history: &[f64], predicted: &[f64]) -> ConfidenceInterval {
            ConfidenceInterval {
                predicted: predicted.to_vec(),
                lower: predicted.iter().map(|p| p * (1.0 - self.fraction)).collect(),
                upper: predicted.iter().map(|p| p * (1.0 + self.fraction)).collect(),
                z_score: 0.0,
            }
        }
    }

    #[test]
    fn test_percent_band() {
        let computer = PercentBand { fraction: 0.15 };
        let ci = computer.compute(&[1.0, 2.0], &[100.0, 200.0]);
        assert_eq!(ci.len(), 2);
        assert!((ci.lower[0] - 85.0).abs() < 1e-10);
        assert!((ci.upper[1] - 230.0).abs() < 1e-10);
    }

    #[test]
    fn test_boxed_computer() {
        let computer: Box<dyn ConfidenceIntervalComputer> = Box::new(PercentBand { fraction: 0.1 });
        let ci = computer.compute(&[], &[]);
        assert!(ci.is_empty());
    }
}
