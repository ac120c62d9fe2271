//! Historical observation model

use serde::{Deserialize, Serialize};

/// One observation of a metric series.
///
/// Series are expected to be contiguous and strictly increasing at a fixed
/// cadence. This is not verified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    /// Period label, `"YYYY-MM"` for monthly series or `"YYYY"` for yearly ones
    pub period: String,
    /// Observed value (revenue, order count, customer count, ...)
    pub value: f64,
}

impl DataPoint {
    pub fn new(period: impl Into<String>, value: f64) -> Self {
        Self {
            period: period.into(),
            value,
        }
    }

    /// Extract the raw values of a series, preserving order
    pub fn values(points: &[DataPoint]) -> Vec<f64> {
        points.iter().map(|p| p.value).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_preserve_order() {
        let points = vec![
            DataPoint::new("2025-01", 3.0),
            DataPoint::new("2025-02", 1.0),
            DataPoint::new("2025-03", 2.0),
        ];
        assert_eq!(DataPoint::values(&points), vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn test_deserialize_from_caller_json() {
        let json = r#"[{"period":"2025-01","value":1000},{"period":"2025-02","value":1100.5}]"#;
        let points: Vec<DataPoint> = serde_json::from_str(json).unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].period, "2025-01");
        assert_eq!(points[1].value, 1100.5);
    }
}
