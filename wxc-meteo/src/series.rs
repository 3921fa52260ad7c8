use crate::error::MeteoError;
use serde::Serialize;

/// Hourly observations held as three parallel sequences.
///
/// Index `i` refers to the same observation in `dates`, `temperatures` and
/// `humidity`. The constructor is the only way in, so the three vectors
/// always share one length.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct WeatherSeries {
    dates: Vec<String>,
    temperatures: Vec<f64>,
    humidity: Vec<f64>,
}

/// One row of a [`WeatherSeries`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation<'a> {
    /// Calendar day, "YYYY-MM-DD"
    pub date: &'a str,
    /// Degrees Celsius
    pub temperature: f64,
    /// Relative humidity, percent
    pub humidity: f64,
}

impl WeatherSeries {
    pub fn new(
        dates: Vec<String>,
        temperatures: Vec<f64>,
        humidity: Vec<f64>,
    ) -> Result<Self, MeteoError> {
        if dates.len() != temperatures.len() || dates.len() != humidity.len() {
            return Err(MeteoError::MisalignedSeries {
                dates: dates.len(),
                temperatures: temperatures.len(),
                humidity: humidity.len(),
            });
        }
        Ok(Self {
            dates,
            temperatures,
            humidity,
        })
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn dates(&self) -> &[String] {
        &self.dates
    }

    pub fn temperatures(&self) -> &[f64] {
        &self.temperatures
    }

    pub fn humidity(&self) -> &[f64] {
        &self.humidity
    }

    pub fn observations(&self) -> impl Iterator<Item = Observation<'_>> {
        self.dates
            .iter()
            .zip(&self.temperatures)
            .zip(&self.humidity)
            .map(|((date, &temperature), &humidity)| Observation {
                date,
                temperature,
                humidity,
            })
    }

    /// Copy out the rows at `indices`, in the order given.
    ///
    /// Panics if an index is out of bounds.
    pub fn select(&self, indices: &[usize]) -> Self {
        Self {
            dates: indices.iter().map(|&i| self.dates[i].clone()).collect(),
            temperatures: indices.iter().map(|&i| self.temperatures[i]).collect(),
            humidity: indices.iter().map(|&i| self.humidity[i]).collect(),
        }
    }

    /// First and last calendar day, if any.
    pub fn day_span(&self) -> Option<(&str, &str)> {
        match (self.dates.first(), self.dates.last()) {
            (Some(first), Some(last)) => Some((first.as_str(), last.as_str())),
            _ => None,
        }
    }
}
