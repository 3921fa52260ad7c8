use serde::{Deserialize, Serialize};
use wxc_meteo::WeatherSeries;

/// Inclusive range of calendar days.
///
/// Bounds are compared as strings. That orders days chronologically only
/// because both sides are zero-padded "YYYY-MM-DD"; nothing here checks it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

impl DateRange {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    pub fn contains(&self, day: &str) -> bool {
        self.start.as_str() <= day && day <= self.end.as_str()
    }
}

/// Indices of `dates` that fall inside `range`, ascending.
pub fn matching_indices(dates: &[String], range: &DateRange) -> Vec<usize> {
    dates
        .iter()
        .enumerate()
        .filter(|(_, date)| range.contains(date))
        .map(|(i, _)| i)
        .collect()
}

/// Keep the observations whose day lies in `range`.
///
/// `None` when `series` is empty or nothing matches, so callers can leave
/// whatever they last drew in place.
pub fn filter_by_range(series: &WeatherSeries, range: &DateRange) -> Option<WeatherSeries> {
    if series.is_empty() {
        return None;
    }
    let indices = matching_indices(series.dates(), range);
    if indices.is_empty() {
        return None;
    }
    Some(series.select(&indices))
}
