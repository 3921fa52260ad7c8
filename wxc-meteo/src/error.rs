use thiserror::Error;

/// Errors that can occur when fetching or parsing a forecast.
#[derive(Debug, Error)]
pub enum MeteoError {
    #[error("request to Open-Meteo failed: {0}")]
    Http(String),

    #[error("browser fetch failed: {0}")]
    Fetch(String),

    #[error("Open-Meteo responded with status {0}")]
    HttpStatus(u16),

    #[error("failed to parse forecast JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid timestamp {0:?}")]
    InvalidTimestamp(String),

    #[error(
        "misaligned series: {dates} dates, {temperatures} temperatures, {humidity} humidity readings"
    )]
    MisalignedSeries {
        dates: usize,
        temperatures: usize,
        humidity: usize,
    },
}

#[cfg(feature = "api")]
impl From<reqwest::Error> for MeteoError {
    fn from(e: reqwest::Error) -> Self {
        MeteoError::Http(e.to_string())
    }
}
