//! Chart.js implementation of the dashboard's chart backend.

use serde_json::Value;
use siaee_api::DashboardError;
use siaee_panel::ChartBackend;

use crate::js_bridge;

/// Builds charts into one canvas. Handles are `"<canvas id>-<n>"`.
pub struct ChartJsBackend {
    canvas_id: String,
    next_handle: u32,
}

impl ChartJsBackend {
    pub fn new(canvas_id: impl Into<String>) -> Self {
        Self {
            canvas_id: canvas_id.into(),
            next_handle: 0,
        }
    }
}

impl ChartBackend for ChartJsBackend {
    type Handle = String;

    fn create(&mut self, config: &Value) -> Result<String, DashboardError> {
        self.next_handle += 1;
        let handle = format!("{}-{}", self.canvas_id, self.next_handle);
        let config_json =
            serde_json::to_string(config).map_err(|e| DashboardError::Chart(e.to_string()))?;

        js_bridge::render_measurements_chart(&handle, &self.canvas_id, &config_json)
            .map_err(|e| DashboardError::Chart(format!("{:?}", e)))?;
        Ok(handle)
    }

    fn destroy(&mut self, handle: String) {
        js_bridge::destroy_measurements_chart(&handle);
    }
}
