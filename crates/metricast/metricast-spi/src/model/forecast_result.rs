//! Forecast output models

use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of the linear trend of a series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Growing,
    Declining,
    #[default]
    Stable,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Growing => "growing",
            Trend::Declining => "declining",
            Trend::Stable => "stable",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One predicted future observation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// Generated period label
    pub period: String,
    /// Point estimate, never negative
    pub predicted: f64,
    /// Lower interval bound, never negative
    pub lower: f64,
    /// Upper interval bound
    pub upper: f64,
}

/// Forecast and trend summary for one metric series.
///
/// Serialized field names match the dashboard contract: `forecasts`, `trend`,
/// `trendStrength`, `seasonality`, `avgGrowthRate`, `r2`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastResult {
    pub forecasts: Vec<ForecastPoint>,
    pub trend: Trend,
    /// `min(1, |r2|)`
    pub trend_strength: f64,
    /// Whether a seasonal pattern was detected and applied
    pub seasonality: bool,
    /// Mean period-over-period change in percent
    pub avg_growth_rate: f64,
    pub r2: f64,
}

impl ForecastResult {
    /// Result for a series too short to forecast
    pub fn empty() -> Self {
        Self::default()
    }

    /// True when the series had too little history to forecast.
    ///
    /// Callers render this as an "insufficient data" placeholder.
    pub fn is_empty(&self) -> bool {
        self.forecasts.is_empty()
    }

    pub fn predicted(&self) -> Vec<f64> {
        self.forecasts.iter().map(|f| f.predicted).collect()
    }

    pub fn periods(&self) -> Vec<&str> {
        self.forecasts.iter().map(|f| f.period.as_str()).collect()
    }
}
