//! Page state and the filter → derive → render pipeline.
//!
//! `PageController` owns the fetched series and one optional chart handle
//! per [`ChartSlot`]. Drawing goes through the [`ChartSurface`] trait so the
//! same pipeline runs against Chart.js in the browser and against an
//! in-memory surface in tests.

use crate::charts::{chart_specs, ChartSlot, ChartSpec};
use crate::filter::{filter_by_range, DateRange};
use crate::metrics::DerivedSeries;
use log::{debug, error, info, warn};
use thiserror::Error;
use wxc_meteo::WeatherSeries;

/// Opaque reference to a chart living on a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChartHandle(pub u64);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("no rendering surface with id {0:?}")]
    SurfaceMissing(String),
    #[error("chart backend failed: {0}")]
    Backend(String),
}

/// Something charts can be drawn on.
pub trait ChartSurface {
    /// Construct a chart for `spec` on the surface named by `spec.surface_id()`.
    fn create(&mut self, spec: &ChartSpec) -> Result<ChartHandle, RenderError>;

    /// Tear down a chart previously returned by `create`.
    fn destroy(&mut self, handle: ChartHandle);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Nothing fetched yet, or the fetch returned no rows
    NoData,
    /// Data exists but no day falls in the requested range
    EmptyRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    Rendered { observations: usize },
    /// Charts were left exactly as they were.
    Skipped(SkipReason),
}

pub struct PageController<S: ChartSurface> {
    surface: S,
    series: Option<WeatherSeries>,
    charts: [Option<ChartHandle>; 4],
}

impl<S: ChartSurface> PageController<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            series: None,
            charts: [None; 4],
        }
    }

    /// Store the series fetched for this page. Replaces any earlier one.
    pub fn load(&mut self, series: WeatherSeries) {
        info!("Loaded {} hourly observations", series.len());
        if let Some((first, last)) = series.day_span() {
            debug!("Observation days: {} → {}", first, last);
        }
        self.series = Some(series);
    }

    pub fn series(&self) -> Option<&WeatherSeries> {
        self.series.as_ref()
    }

    pub fn handle(&self, slot: ChartSlot) -> Option<ChartHandle> {
        self.charts[slot.index()]
    }

    pub fn is_rendered(&self) -> bool {
        self.charts.iter().any(Option::is_some)
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Filter the loaded series to `range`, derive metrics and redraw.
    ///
    /// With no data, or nothing in range, the surface is not touched.
    pub fn update_filtered_data(&mut self, range: &DateRange) -> Result<UpdateOutcome, RenderError> {
        info!("Selected range: {} → {}", range.start, range.end);

        let series = match &self.series {
            Some(series) if !series.is_empty() => series,
            _ => {
                warn!("No data has been loaded yet");
                return Ok(UpdateOutcome::Skipped(SkipReason::NoData));
            }
        };

        let Some(filtered) = filter_by_range(series, range) else {
            warn!("No observations in the selected date range");
            return Ok(UpdateOutcome::Skipped(SkipReason::EmptyRange));
        };

        debug!("Filtered dates: {:?}", filtered.dates());
        debug!("Filtered temperatures: {:?}", filtered.temperatures());
        debug!("Filtered humidity: {:?}", filtered.humidity());

        let derived = DerivedSeries::from_series(&filtered);
        self.render(&filtered, &derived)?;
        Ok(UpdateOutcome::Rendered {
            observations: filtered.len(),
        })
    }

    /// Destroy every existing chart, then create all four again.
    ///
    /// Stops at the first surface that cannot be drawn on; slots created
    /// before it keep their new handles.
    pub fn render(
        &mut self,
        series: &WeatherSeries,
        derived: &DerivedSeries,
    ) -> Result<(), RenderError> {
        self.release_all();
        for spec in chart_specs(series, derived) {
            match self.surface.create(&spec) {
                Ok(handle) => self.charts[spec.slot.index()] = Some(handle),
                Err(e) => {
                    error!("Failed to render {}: {}", spec.surface_id(), e);
                    return Err(e);
                }
            }
        }
        Ok(())
    }

    fn release_all(&mut self) {
        for slot in self.charts.iter_mut() {
            if let Some(handle) = slot.take() {
                self.surface.destroy(handle);
            }
        }
    }
}

impl<S: ChartSurface> Drop for PageController<S> {
    fn drop(&mut self) {
        self.release_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashSet;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        Create {
            surface_id: &'static str,
            handle: ChartHandle,
            labels: Vec<String>,
            data: Vec<f64>,
        },
        Destroy(ChartHandle),
    }

    /// In-memory surface that records every call.
    #[derive(Clone)]
    struct RecordingSurface {
        surfaces: HashSet<&'static str>,
        next: u64,
        events: Rc<RefCell<Vec<Event>>>,
    }

    impl RecordingSurface {
        fn with_all_slots() -> Self {
            Self {
                surfaces: ChartSlot::ALL.iter().map(|s| s.surface_id()).collect(),
                next: 1,
                events: Rc::default(),
            }
        }

        fn without(mut self, slot: ChartSlot) -> Self {
            self.surfaces.remove(slot.surface_id());
            self
        }
    }

    impl ChartSurface for RecordingSurface {
        fn create(&mut self, spec: &ChartSpec) -> Result<ChartHandle, RenderError> {
            if !self.surfaces.contains(spec.surface_id()) {
                return Err(RenderError::SurfaceMissing(spec.surface_id().to_string()));
            }
            let handle = ChartHandle(self.next);
            self.next += 1;
            self.events.borrow_mut().push(Event::Create {
                surface_id: spec.surface_id(),
                handle,
                labels: spec.data.labels.clone(),
                data: spec.data.datasets[0].data.clone(),
            });
            Ok(handle)
        }

        fn destroy(&mut self, handle: ChartHandle) {
            self.events.borrow_mut().push(Event::Destroy(handle));
        }
    }

    fn three_days() -> WeatherSeries {
        WeatherSeries::new(
            vec![
                "2024-01-01".to_string(),
                "2024-01-02".to_string(),
                "2024-01-03".to_string(),
            ],
            vec![20.0, 22.0, 19.0],
            vec![50.0, 55.0, 60.0],
        )
        .unwrap()
    }

    fn creates(events: &[Event]) -> Vec<&Event> {
        events
            .iter()
            .filter(|e| matches!(e, Event::Create { .. }))
            .collect()
    }

    #[test]
    fn test_update_without_data_is_a_no_op() {
        let surface = RecordingSurface::with_all_slots();
        let events = surface.events.clone();
        let mut controller = PageController::new(surface);

        let outcome = controller
            .update_filtered_data(&DateRange::new("2024-01-01", "2024-01-31"))
            .unwrap();
        assert_eq!(outcome, UpdateOutcome::Skipped(SkipReason::NoData));

        controller.load(WeatherSeries::default());
        let outcome = controller
            .update_filtered_data(&DateRange::new("2024-01-01", "2024-01-31"))
            .unwrap();
        assert_eq!(outcome, UpdateOutcome::Skipped(SkipReason::NoData));

        assert!(events.borrow().is_empty());
        assert!(!controller.is_rendered());
    }

    #[test]
    fn test_update_renders_four_charts() {
        let surface = RecordingSurface::with_all_slots();
        let events = surface.events.clone();
        let mut controller = PageController::new(surface);
        controller.load(three_days());

        let outcome = controller
            .update_filtered_data(&DateRange::new("2024-01-02", "2024-01-03"))
            .unwrap();
        assert_eq!(outcome, UpdateOutcome::Rendered { observations: 2 });

        let events = events.borrow();
        assert_eq!(events.len(), 4);
        let ids: Vec<&str> = events
            .iter()
            .map(|e| match e {
                Event::Create { surface_id, .. } => *surface_id,
                Event::Destroy(_) => panic!("nothing to destroy on first render"),
            })
            .collect();
        assert_eq!(
            ids,
            vec!["temperatureChart", "humidityChart", "heatIndexChart", "tempVarianceChart"]
        );
        match &events[0] {
            Event::Create { labels, data, .. } => {
                assert_eq!(labels, &["2024-01-02", "2024-01-03"]);
                assert_eq!(data, &[22.0, 19.0]);
            }
            other => panic!("unexpected event {other:?}"),
        }
        match &events[1] {
            Event::Create { data, .. } => assert_eq!(data, &[55.0, 60.0]),
            other => panic!("unexpected event {other:?}"),
        }
        for slot in ChartSlot::ALL {
            assert!(controller.handle(slot).is_some());
        }
    }

    #[test]
    fn test_empty_range_keeps_previous_charts() {
        let surface = RecordingSurface::with_all_slots();
        let events = surface.events.clone();
        let mut controller = PageController::new(surface);
        controller.load(three_days());
        controller
            .update_filtered_data(&DateRange::new("2024-01-01", "2024-01-03"))
            .unwrap();
        let before: Vec<Option<ChartHandle>> =
            ChartSlot::ALL.iter().map(|s| controller.handle(*s)).collect();
        let recorded = events.borrow().len();

        // reversed
        let outcome = controller
            .update_filtered_data(&DateRange::new("2024-01-03", "2024-01-01"))
            .unwrap();
        assert_eq!(outcome, UpdateOutcome::Skipped(SkipReason::EmptyRange));
        // outside the data
        let outcome = controller
            .update_filtered_data(&DateRange::new("2025-01-01", "2025-01-07"))
            .unwrap();
        assert_eq!(outcome, UpdateOutcome::Skipped(SkipReason::EmptyRange));

        assert_eq!(events.borrow().len(), recorded);
        let after: Vec<Option<ChartHandle>> =
            ChartSlot::ALL.iter().map(|s| controller.handle(*s)).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_rerender_replaces_handles_with_identical_data() {
        let surface = RecordingSurface::with_all_slots();
        let events = surface.events.clone();
        let mut controller = PageController::new(surface);
        controller.load(three_days());
        let range = DateRange::new("2024-01-01", "2024-01-03");

        controller.update_filtered_data(&range).unwrap();
        let first: Vec<ChartHandle> = ChartSlot::ALL
            .iter()
            .filter_map(|s| controller.handle(*s))
            .collect();
        controller.update_filtered_data(&range).unwrap();

        let events = events.borrow();
        assert_eq!(events.len(), 12);
        // The second frame starts by releasing all of the first.
        let destroyed: Vec<ChartHandle> = events[4..8]
            .iter()
            .map(|e| match e {
                Event::Destroy(h) => *h,
                other => panic!("expected destroy, got {other:?}"),
            })
            .collect();
        assert_eq!(destroyed, first);

        let created = creates(&events);
        for (a, b) in created[..4].iter().zip(&created[4..]) {
            match (a, b) {
                (
                    Event::Create {
                        surface_id: id_a,
                        labels: labels_a,
                        data: data_a,
                        handle: handle_a,
                    },
                    Event::Create {
                        surface_id: id_b,
                        labels: labels_b,
                        data: data_b,
                        handle: handle_b,
                    },
                ) => {
                    assert_eq!(id_a, id_b);
                    assert_eq!(labels_a, labels_b);
                    assert_eq!(data_a, data_b);
                    assert_ne!(handle_a, handle_b);
                }
                _ => unreachable!(),
            }
        }
    }

    #[test]
    fn test_missing_surface_fails_visibly() {
        let surface = RecordingSurface::with_all_slots().without(ChartSlot::HeatIndex);
        let mut controller = PageController::new(surface);
        controller.load(three_days());

        let err = controller
            .update_filtered_data(&DateRange::new("2024-01-01", "2024-01-03"))
            .unwrap_err();
        assert_eq!(err, RenderError::SurfaceMissing("heatIndexChart".to_string()));
        assert!(controller.handle(ChartSlot::Temperature).is_some());
        assert!(controller.handle(ChartSlot::Humidity).is_some());
        assert!(controller.handle(ChartSlot::HeatIndex).is_none());
        assert!(controller.handle(ChartSlot::Variance).is_none());
    }

    #[test]
    fn test_drop_releases_charts() {
        let surface = RecordingSurface::with_all_slots();
        let events = surface.events.clone();
        {
            let mut controller = PageController::new(surface);
            controller.load(three_days());
            controller
                .update_filtered_data(&DateRange::new("2024-01-01", "2024-01-01"))
                .unwrap();
        }
        let events = events.borrow();
        let destroys = events
            .iter()
            .filter(|e| matches!(e, Event::Destroy(_)))
            .count();
        assert_eq!(destroys, 4);
    }
}
