//! Native forecast fetch over `reqwest`.

use crate::error::MeteoError;
use crate::forecast::{parse_forecast, ForecastRequest};
use crate::series::WeatherSeries;
use log::{info, warn};
use reqwest::Client;

/// Fetch the hourly forecast and reduce it to a [`WeatherSeries`].
///
/// One attempt only: no retry and no timeout beyond what `client` carries.
pub async fn fetch_weather_series(
    client: &Client,
    request: &ForecastRequest,
) -> Result<WeatherSeries, MeteoError> {
    let url = request.url();
    info!("Fetching hourly forecast for {}", request.location.name);

    let response = client.get(&url).send().await?;
    let status = response.status();
    if !status.is_success() {
        warn!("Bad response status from Open-Meteo: {}", status);
        return Err(MeteoError::HttpStatus(status.as_u16()));
    }

    let body = response.text().await?;
    let series = parse_forecast(&body)?;
    info!("Downloaded {} hourly observations", series.len());
    Ok(series)
}
