//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use crate::surface::JsChartSurface;
use dioxus::prelude::*;
use log::{error, info};
use wxc_data::{DateRange, PageController, UpdateOutcome};
use wxc_utils::dates::default_range;

/// Shared application state for WXC chart apps.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Fetched series and the four chart handles
    pub controller: Signal<PageController<JsChartSurface>>,
    /// Whether the initial fetch is still in flight
    pub loading: Signal<bool>,
    /// Start date for date range filtering
    pub start_date: Signal<String>,
    /// End date for date range filtering
    pub end_date: Signal<String>,
}

impl AppState {
    /// Create a new AppState covering the last week.
    pub fn new() -> Self {
        let (start, end) = default_range();
        Self {
            controller: Signal::new(PageController::new(JsChartSurface::default())),
            loading: Signal::new(true),
            start_date: Signal::new(start),
            end_date: Signal::new(end),
        }
    }

    pub fn selected_range(&self) -> DateRange {
        DateRange::new((self.start_date)(), (self.end_date)())
    }

    /// Run filter → derive → render for the selected range.
    ///
    /// Failures are logged only; the page never shows them.
    pub fn update_charts(&mut self) {
        let range = self.selected_range();
        match self.controller.write().update_filtered_data(&range) {
            Ok(UpdateOutcome::Rendered { observations }) => {
                info!("Rendered {} observations", observations);
            }
            // already logged by the controller
            Ok(UpdateOutcome::Skipped(_)) => {}
            Err(e) => error!("Failed to render charts: {}", e),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
