//! Open-Meteo forecast request and response model.
//!
//! The page asks for two hourly variables at a fixed location and receives
//! a JSON object whose `hourly` member holds parallel arrays:
//!
//! ```json
//! {"hourly": {"time": ["2024-01-01T00:00", ...],
//!             "temperature_2m": [21.4, ...],
//!             "relative_humidity_2m": [64, ...]}}
//! ```

use crate::error::MeteoError;
use crate::location::{Location, BUENOS_AIRES};
use crate::series::WeatherSeries;
use log::{debug, warn};
use serde::Deserialize;
use wxc_utils::dates::calendar_day;

/// Open-Meteo forecast endpoint.
pub const FORECAST_ENDPOINT: &str = "https://api.open-meteo.com/v1/forecast";

/// Hourly variables requested, in query order.
pub const HOURLY_VARIABLES: [&str; 2] = ["temperature_2m", "relative_humidity_2m"];

/// A forecast request for one location.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastRequest {
    pub endpoint: String,
    pub location: Location,
}

impl Default for ForecastRequest {
    fn default() -> Self {
        Self {
            endpoint: FORECAST_ENDPOINT.to_string(),
            location: BUENOS_AIRES,
        }
    }
}

impl ForecastRequest {
    /// Point the request at another base URL (used against local test servers).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Full GET URL. The timezone is passed through verbatim; Open-Meteo
    /// accepts the slash unescaped.
    pub fn url(&self) -> String {
        format!(
            "{}?latitude={}&longitude={}&hourly={}&timezone={}",
            self.endpoint,
            self.location.latitude,
            self.location.longitude,
            HOURLY_VARIABLES.join(","),
            self.location.timezone,
        )
    }
}

#[derive(Debug, Deserialize)]
pub struct ForecastResponse {
    pub hourly: HourlyData,
}

/// Hourly arrays as sent. Open-Meteo reports a missing hour as `null`.
#[derive(Debug, Deserialize)]
pub struct HourlyData {
    pub time: Vec<String>,
    pub temperature_2m: Vec<Option<f64>>,
    pub relative_humidity_2m: Vec<Option<f64>>,
}

impl TryFrom<ForecastResponse> for WeatherSeries {
    type Error = MeteoError;

    /// Hours where either reading is `null` are dropped; every other hour
    /// is kept so the days around a gap still chart.
    fn try_from(response: ForecastResponse) -> Result<Self, Self::Error> {
        let hourly = response.hourly;
        let hours = hourly.time.len();
        if hourly.temperature_2m.len() != hours || hourly.relative_humidity_2m.len() != hours {
            return Err(MeteoError::MisalignedSeries {
                dates: hours,
                temperatures: hourly.temperature_2m.len(),
                humidity: hourly.relative_humidity_2m.len(),
            });
        }

        let mut dates = Vec::with_capacity(hours);
        let mut temperatures = Vec::with_capacity(hours);
        let mut humidity = Vec::with_capacity(hours);
        let mut skipped = 0;
        for ((t, temperature), rh) in hourly
            .time
            .iter()
            .zip(hourly.temperature_2m)
            .zip(hourly.relative_humidity_2m)
        {
            let day = calendar_day(t).map_err(|_| MeteoError::InvalidTimestamp(t.clone()))?;
            match (temperature, rh) {
                (Some(temperature), Some(rh)) => {
                    dates.push(day);
                    temperatures.push(temperature);
                    humidity.push(rh);
                }
                _ => {
                    debug!("Dropping hour {} with a missing reading", t);
                    skipped += 1;
                }
            }
        }
        if skipped > 0 {
            warn!("Dropped {} of {} hours with missing readings", skipped, hours);
        }
        WeatherSeries::new(dates, temperatures, humidity)
    }
}

/// Parse a forecast response body into an aligned series of calendar days.
pub fn parse_forecast(body: &str) -> Result<WeatherSeries, MeteoError> {
    let response: ForecastResponse = serde_json::from_str(body)?;
    response.try_into()
}
