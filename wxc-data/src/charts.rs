//! The four chart slots and their Chart.js configurations.
//!
//! A [`ChartSpec`] serializes to the object Chart.js takes as its second
//! constructor argument: `{"type": "line", "data": {"labels": [...],
//! "datasets": [{"label": ..., "data": [...], "borderColor": ..., "borderWidth": 2}]}}`.

use crate::metrics::DerivedSeries;
use serde::Serialize;
use wxc_meteo::WeatherSeries;

/// Border width shared by every dataset.
pub const BORDER_WIDTH: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
}

/// One of the fixed rendering surfaces on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartSlot {
    Temperature,
    Humidity,
    HeatIndex,
    Variance,
}

impl ChartSlot {
    /// Render order.
    pub const ALL: [ChartSlot; 4] = [
        ChartSlot::Temperature,
        ChartSlot::Humidity,
        ChartSlot::HeatIndex,
        ChartSlot::Variance,
    ];

    pub fn index(self) -> usize {
        match self {
            ChartSlot::Temperature => 0,
            ChartSlot::Humidity => 1,
            ChartSlot::HeatIndex => 2,
            ChartSlot::Variance => 3,
        }
    }

    /// DOM id of the canvas this slot draws into.
    pub fn surface_id(self) -> &'static str {
        match self {
            ChartSlot::Temperature => "temperatureChart",
            ChartSlot::Humidity => "humidityChart",
            ChartSlot::HeatIndex => "heatIndexChart",
            ChartSlot::Variance => "tempVarianceChart",
        }
    }

    /// Section title shown above the canvas.
    pub fn title(self) -> &'static str {
        match self {
            ChartSlot::Temperature => "Temperatura",
            ChartSlot::Humidity => "Humedad",
            ChartSlot::HeatIndex => "Índice de Calor",
            ChartSlot::Variance => "Variabilidad de Temperatura",
        }
    }

    /// Dataset label (legend text).
    pub fn label(self) -> &'static str {
        match self {
            ChartSlot::Temperature => "Temperatura (°C)",
            ChartSlot::Humidity => "Humedad (%)",
            ChartSlot::HeatIndex => "Índice de Calor",
            ChartSlot::Variance => "Variabilidad de Temperatura",
        }
    }

    pub fn kind(self) -> ChartKind {
        match self {
            ChartSlot::Variance => ChartKind::Bar,
            _ => ChartKind::Line,
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            ChartSlot::Temperature => "red",
            ChartSlot::Humidity => "blue",
            ChartSlot::HeatIndex => "orange",
            ChartSlot::Variance => "green",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    pub border_width: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

/// Everything needed to draw one slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    #[serde(skip)]
    pub slot: ChartSlot,
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
}

impl ChartSpec {
    /// Single-dataset chart for `slot`. Lines are stroked in the slot colour,
    /// bars are filled with it.
    pub fn new(slot: ChartSlot, labels: &[String], values: Vec<f64>) -> Self {
        let color = slot.color().to_string();
        let (border_color, background_color) = match slot.kind() {
            ChartKind::Line => (Some(color), None),
            ChartKind::Bar => (None, Some(color)),
        };
        Self {
            slot,
            kind: slot.kind(),
            data: ChartData {
                labels: labels.to_vec(),
                datasets: vec![Dataset {
                    label: slot.label().to_string(),
                    data: values,
                    border_color,
                    background_color,
                    border_width: BORDER_WIDTH,
                }],
            },
        }
    }

    pub fn surface_id(&self) -> &'static str {
        self.slot.surface_id()
    }

    pub fn to_config_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Specs for all four slots, in [`ChartSlot::ALL`] order, sharing the
/// series' dates as labels.
pub fn chart_specs(series: &WeatherSeries, derived: &DerivedSeries) -> [ChartSpec; 4] {
    let labels = series.dates();
    [
        ChartSpec::new(ChartSlot::Temperature, labels, series.temperatures().to_vec()),
        ChartSpec::new(ChartSlot::Humidity, labels, series.humidity().to_vec()),
        ChartSpec::new(ChartSlot::HeatIndex, labels, derived.heat_index.clone()),
        ChartSpec::new(
            ChartSlot::Variance,
            labels,
            derived.temperature_variance.clone(),
        ),
    ]
}
