//! Series cadence and calendar periods

use crate::error::{ForecastError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Spacing between consecutive observations of a series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cadence {
    /// `"YYYY-MM"` labels
    #[default]
    Monthly,
    /// `"YYYY"` labels
    Yearly,
}

impl Cadence {
    /// Guess the cadence from the shape of a label.
    ///
    /// A label without `-`, or exactly four characters long, is yearly;
    /// anything else is monthly. Prefer passing the cadence explicitly.
    pub fn infer(label: &str) -> Self {
        let label = label.trim();
        if !label.contains('-') || label.len() == 4 {
            Cadence::Yearly
        } else {
            Cadence::Monthly
        }
    }

    /// Conventional projection horizon for this cadence
    pub fn horizon(&self) -> usize {
        match self {
            Cadence::Monthly => 6,
            Cadence::Yearly => 3,
        }
    }
}

impl fmt::Display for Cadence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cadence::Monthly => f.write_str("monthly"),
            Cadence::Yearly => f.write_str("yearly"),
        }
    }
}

impl FromStr for Cadence {
    type Err = ForecastError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "monthly" | "month" | "m" => Ok(Cadence::Monthly),
            "yearly" | "year" | "annual" | "y" => Ok(Cadence::Yearly),
            other => Err(ForecastError::invalid_parameter(
                "cadence",
                &format!("unknown cadence '{}', expected monthly or yearly", other),
            )),
        }
    }
}

/// A calendar period at a given cadence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Period {
    Month { year: i32, month: u32 },
    Year(i32),
}

impl Period {
    /// Parse a label for the given cadence.
    ///
    /// Monthly labels are `"YYYY-MM"`; any further `-` components (a day, for
    /// instance) are ignored. Yearly labels are a bare year.
    pub fn parse(label: &str, cadence: Cadence) -> Result<Self> {
        let label = label.trim();
        match cadence {
            Cadence::Monthly => {
                let mut parts = label.split('-');
                let year = parts.next().and_then(|y| y.parse::<i32>().ok());
                let month = parts.next().and_then(|m| m.parse::<u32>().ok());
                match (year, month) {
                    (Some(year), Some(month)) if (1..=12).contains(&month) => {
                        Ok(Period::Month { year, month })
                    }
                    _ => Err(ForecastError::InvalidPeriod(format!(
                        "'{}' is not a YYYY-MM label",
                        label
                    ))),
                }
            }
            Cadence::Yearly => label.parse::<i32>().map(Period::Year).map_err(|_| {
                ForecastError::InvalidPeriod(format!("'{}' is not a YYYY label", label))
            }),
        }
    }

    /// The period immediately following this one, `None` past the last
    /// representable year
    pub fn next(&self) -> Option<Self> {
        match *self {
            Period::Month { year, month } if month >= 12 => Some(Period::Month {
                year: year.checked_add(1)?,
                month: 1,
            }),
            Period::Month { year, month } => Some(Period::Month {
                year,
                month: month + 1,
            }),
            Period::Year(year) => year.checked_add(1).map(Period::Year),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Period::Month { year, month } => write!(f, "{:04}-{:02}", year, month),
            Period::Year(year) => write!(f, "{:04}", year),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_cadence_from_label_shape() {
        assert_eq!(Cadence::infer("2025-11"), Cadence::Monthly);
        assert_eq!(Cadence::infer("2024"), Cadence::Yearly);
        assert_eq!(Cadence::infer(" 2024 "), Cadence::Yearly);
        assert_eq!(Cadence::infer("FY24"), Cadence::Yearly);
    }

    #[test]
    fn test_cadence_from_str() {
        assert_eq!("monthly".parse::<Cadence>().unwrap(), Cadence::Monthly);
        assert_eq!("Yearly".parse::<Cadence>().unwrap(), Cadence::Yearly);
        assert_eq!("y".parse::<Cadence>().unwrap(), Cadence::Yearly);
        assert!(matches!(
            "weekly".parse::<Cadence>(),
            Err(ForecastError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_cadence_horizon() {
        assert_eq!(Cadence::Monthly.horizon(), 6);
        assert_eq!(Cadence::Yearly.horizon(), 3);
    }

    #[test]
    fn test_parse_month() {
        let period = Period::parse("2025-03", Cadence::Monthly).unwrap();
        assert_eq!(period, Period::Month { year: 2025, month: 3 });
        assert_eq!(period.to_string(), "2025-03");
    }

    #[test]
    fn test_parse_month_ignores_day() {
        let period = Period::parse("2025-03-15", Cadence::Monthly).unwrap();
        assert_eq!(period, Period::Month { year: 2025, month: 3 });
    }

    #[test]
    fn test_parse_rejects_bad_month() {
        assert!(Period::parse("2025-13", Cadence::Monthly).is_err());
        assert!(Period::parse("2025-00", Cadence::Monthly).is_err());
        assert!(Period::parse("2025", Cadence::Monthly).is_err());
        assert!(Period::parse("abc", Cadence::Yearly).is_err());
    }

    #[test]
    fn test_next_month_rolls_year() {
        let dec = Period::Month { year: 2025, month: 12 };
        let next = dec.next().unwrap();
        assert_eq!(next, Period::Month { year: 2026, month: 1 });
        assert_eq!(next.to_string(), "2026-01");
    }

    #[test]
    fn test_next_year() {
        let period = Period::parse("2024", Cadence::Yearly).unwrap();
        assert_eq!(period.next().unwrap().to_string(), "2025");
    }

    #[test]
    fn test_next_stops_at_last_year() {
        assert_eq!(Period::Year(i32::MAX).next(), None);
        assert_eq!(Period::Month { year: i32::MAX, month: 12 }.next(), None);
        assert_eq!(
            Period::Month { year: i32::MAX, month: 11 }.next(),
            Some(Period::Month { year: i32::MAX, month: 12 })
        );
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Cadence::Yearly).unwrap(), "\"yearly\"");
        let cadence: Cadence = serde_json::from_str("\"monthly\"").unwrap();
        assert_eq!(cadence, Cadence::Monthly);
    }
}
