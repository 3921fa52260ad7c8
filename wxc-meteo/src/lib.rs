//! Core types and Open-Meteo client for hourly weather observations.
//!
//! - `location`: the fixed coordinates the forecast is requested for
//! - `series`: `WeatherSeries`, the index-aligned dates/temperature/humidity triple
//! - `forecast`: request URL building and response parsing
//! - `client`: native `reqwest` fetch (feature `api`)

pub mod error;
pub mod forecast;
pub mod location;
pub mod series;

#[cfg(feature = "api")]
pub mod client;

pub use error::MeteoError;
pub use location::{Location, BUENOS_AIRES};
pub use series::{Observation, WeatherSeries};
