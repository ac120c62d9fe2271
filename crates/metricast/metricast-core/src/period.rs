//! Future period labels

use metricast_spi::{Cadence, ForecastError, Period, Result};

/// Labels of the `count` periods following `last`, at the given cadence.
///
/// Fails with [`ForecastError::InvalidPeriod`] when `last` does not parse or
/// the sequence would run past the last representable year.
///
/// ```rust
/// use metricast_core::{generate_future_periods, Cadence};
///
/// let labels = generate_future_periods("2025-11", Cadence::Monthly, 3).unwrap();
/// assert_eq!(labels, vec!["2025-12", "2026-01", "2026-02"]);
/// ```
pub fn generate_future_periods(last: &str, cadence: Cadence, count: usize) -> Result<Vec<String>> {
    let mut period = Period::parse(last, cadence)?;
    let mut labels = Vec::with_capacity(count);
    for _ in 0..count {
        period = period.next().ok_or_else(|| {
            ForecastError::InvalidPeriod(format!("no period follows '{}'", period))
        })?;
        labels.push(period.to_string());
    }
    Ok(labels)
}

/// Labels used when the last historical label cannot be parsed
pub(crate) fn fallback_periods(last: &str, count: usize) -> Vec<String> {
    (1..=count).map(|h| format!("{}+{}", last, h)).collect()
}
