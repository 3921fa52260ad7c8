//! Hourly Weather Charts
//!
//! Fetches the Open-Meteo hourly forecast for Buenos Aires and draws four
//! Chart.js charts over a user-selected range of days: temperature,
//! relative humidity, a heat-index approximation, and each hour's absolute
//! deviation from the mean temperature.
//!
//! Data flow:
//! 1. On mount: load Chart.js and spawn the one forecast request.
//! 2. When it resolves: store the series in the `PageController` and run
//!    filter → derive → render for the default range (last 7 days).
//! 3. On "Actualizar": the same pipeline for whatever the date inputs hold.
//!
//! Fetch and render failures go to the console only; the page keeps
//! whatever it last showed.

use dioxus::prelude::*;
use wxc_chart_ui::components::{ChartContainer, ChartHeader, DateRangePicker, UpdateButton};
use wxc_chart_ui::fetch::fetch_weather_series;
use wxc_chart_ui::js_bridge;
use wxc_chart_ui::state::AppState;
use wxc_data::ChartSlot;
use wxc_meteo::forecast::ForecastRequest;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("weather-root"))
        .launch(App);
}

/// Y-axis description under each chart title.
fn unit_description(slot: ChartSlot) -> &'static str {
    match slot {
        ChartSlot::Temperature => "Grados Celsius (°C)",
        ChartSlot::Humidity => "Humedad relativa (%)",
        ChartSlot::HeatIndex => "Índice de calor (regresión de Rothfusz)",
        ChartSlot::Variance => "Desvío absoluto respecto de la media (°C)",
    }
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // ─── Fetch once on mount, then render the default range ───
    use_effect(move || {
        js_bridge::init_charts();

        spawn(async move {
            let request = ForecastRequest::default();
            match fetch_weather_series(&request).await {
                Ok(series) => {
                    state.controller.write().load(series);
                    state.loading.set(false);
                    state.update_charts();
                }
                Err(e) => {
                    log::error!("Failed to fetch weather data: {}", e);
                    state.loading.set(false);
                }
            }
        });
    });

    let loading = *state.loading.read();

    rsx! {
        div {
            style: "max-width: 900px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            h2 {
                style: "margin: 8px 0;",
                "Clima por hora: Buenos Aires"
            }

            div {
                style: "display: flex; flex-wrap: wrap; gap: 12px; align-items: center; margin-bottom: 8px;",
                DateRangePicker {}
                UpdateButton {}
            }

            for slot in ChartSlot::ALL {
                div {
                    key: "{slot.surface_id()}",
                    style: "margin-top: 16px;",
                    ChartHeader {
                        title: slot.title().to_string(),
                        unit_description: unit_description(slot).to_string(),
                    }
                    ChartContainer {
                        id: slot.surface_id().to_string(),
                        loading,
                    }
                }
            }

            p {
                style: "font-size: 11px; color: #888; text-align: center; margin-top: 8px;",
                "Datos: Open-Meteo (pronóstico horario)."
            }
        }
    }
}
