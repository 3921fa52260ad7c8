//! Forecast download through the browser's `fetch`.

use log::info;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;
use wxc_meteo::forecast::{parse_forecast, ForecastRequest};
use wxc_meteo::{MeteoError, WeatherSeries};

fn js_error(value: JsValue) -> MeteoError {
    MeteoError::Fetch(
        value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value)),
    )
}

/// GET the forecast and parse it. The network round trip is the only await.
pub async fn fetch_weather_series(request: &ForecastRequest) -> Result<WeatherSeries, MeteoError> {
    let window = web_sys::window().ok_or_else(|| MeteoError::Fetch("no window".to_string()))?;

    let response: Response = JsFuture::from(window.fetch_with_str(&request.url()))
        .await
        .map_err(js_error)?
        .dyn_into()
        .map_err(js_error)?;
    if !response.ok() {
        return Err(MeteoError::HttpStatus(response.status()));
    }

    let text = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    let body = text
        .as_string()
        .ok_or_else(|| MeteoError::Fetch("response body is not text".to_string()))?;

    let series = parse_forecast(&body)?;
    info!("Downloaded {} hourly observations", series.len());
    Ok(series)
}
