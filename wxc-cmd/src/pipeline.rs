//! Fetch → filter → derive, shared by every subcommand.

use log::{debug, info, warn};
use std::fs::File;
use std::io::{self, Write};
use wxc_data::{filter_by_range, DateRange, DerivedSeries};
use wxc_meteo::client::fetch_weather_series;
use wxc_meteo::forecast::ForecastRequest;
use wxc_meteo::WeatherSeries;

/// Series narrowed to one range, with its metrics.
pub struct Selection {
    pub series: WeatherSeries,
    pub derived: DerivedSeries,
}

/// Narrow `series` to `range`. `None` (with a warning) when nothing is left.
pub fn select(series: &WeatherSeries, range: &DateRange) -> Option<Selection> {
    info!("Selected range: {} → {}", range.start, range.end);
    if series.is_empty() {
        warn!("No data has been loaded");
        return None;
    }
    let Some(filtered) = filter_by_range(series, range) else {
        warn!("No observations in the selected date range");
        return None;
    };
    debug!("Filtered dates: {:?}", filtered.dates());
    let derived = DerivedSeries::from_series(&filtered);
    Some(Selection {
        series: filtered,
        derived,
    })
}

/// Download the forecast for the fixed location and narrow it to `range`.
pub async fn fetch_selection(range: &DateRange) -> anyhow::Result<Option<Selection>> {
    let client = reqwest::Client::new();
    let series = fetch_weather_series(&client, &ForecastRequest::default()).await?;
    Ok(select(&series, range))
}

/// File at `path`, or stdout.
pub fn open_output(path: Option<&str>) -> anyhow::Result<Box<dyn Write>> {
    Ok(match path {
        Some(p) => Box::new(File::create(p)?),
        None => Box::new(io::stdout().lock()),
    })
}
