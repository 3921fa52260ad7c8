//! Browser chart surface backed by Chart.js.

use crate::js_bridge;
use std::collections::HashMap;
use wxc_data::{ChartHandle, ChartSpec, ChartSurface, RenderError};

/// Draws each [`ChartSpec`] on the `<canvas>` carrying its surface id.
///
/// Handles map back to the canvas they were drawn on so `destroy` knows
/// which Chart.js instance to tear down.
#[derive(Default)]
pub struct JsChartSurface {
    next: u64,
    live: HashMap<ChartHandle, &'static str>,
}

impl ChartSurface for JsChartSurface {
    /// Hands the config to Chart.js and returns a handle straight away.
    ///
    /// The draw itself runs later, once the JS side's readiness poll fires,
    /// so a throw inside Chart.js only reaches the browser console. The
    /// handle is live either way and the controller still counts the slot
    /// as rendered.
    fn create(&mut self, spec: &ChartSpec) -> Result<ChartHandle, RenderError> {
        let canvas_id = spec.surface_id();
        if !js_bridge::surface_exists(canvas_id) {
            return Err(RenderError::SurfaceMissing(canvas_id.to_string()));
        }
        let config = spec
            .to_config_json()
            .map_err(|e| RenderError::Backend(e.to_string()))?;
        js_bridge::render_chart(canvas_id, &config);

        self.next += 1;
        let handle = ChartHandle(self.next);
        self.live.insert(handle, canvas_id);
        Ok(handle)
    }

    fn destroy(&mut self, handle: ChartHandle) {
        if let Some(canvas_id) = self.live.remove(&handle) {
            js_bridge::destroy_chart(canvas_id);
        }
    }
}
