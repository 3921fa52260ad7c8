//! Data processing and chart control for hourly weather observations.
//!
//! This crate turns a fetched `WeatherSeries` into what the page draws:
//! a date-range filter, two derived metrics, the four chart
//! specifications, and the `PageController` that swaps chart handles on
//! every render.

pub mod charts;
pub mod controller;
pub mod filter;
pub mod metrics;

pub use charts::{ChartKind, ChartSlot, ChartSpec};
pub use controller::{
    ChartHandle, ChartSurface, PageController, RenderError, SkipReason, UpdateOutcome,
};
pub use filter::{filter_by_range, DateRange};
pub use metrics::DerivedSeries;
