//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.
//! It is also the view the dashboard controller writes into.

use dioxus::prelude::*;
use siaee_panel::{DashboardView, PipelineState, TableBody};

/// Shared state of the measurements dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Current table body
    pub table: Signal<TableBody>,
    /// Where the latest reload pipeline is
    pub pipeline: Signal<PipelineState>,
    /// Whether the webhook refresh control accepts clicks
    pub refresh_enabled: Signal<bool>,
    /// Start date input value ("YYYY-MM-DD" or empty)
    pub start_date: Signal<String>,
    /// End date input value ("YYYY-MM-DD" or empty)
    pub end_date: Signal<String>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            table: Signal::new(TableBody::default()),
            pipeline: Signal::new(PipelineState::Idle),
            refresh_enabled: Signal::new(true),
            start_date: Signal::new(String::new()),
            end_date: Signal::new(String::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardView for AppState {
    fn show_table(&self, body: TableBody) {
        let mut table = self.table;
        table.set(body);
    }

    fn set_refresh_enabled(&self, enabled: bool) {
        let mut refresh_enabled = self.refresh_enabled;
        refresh_enabled.set(enabled);
    }

    fn date_inputs(&self) -> (String, String) {
        (
            String::clone(&self.start_date.peek()),
            String::clone(&self.end_date.peek()),
        )
    }

    fn clear_date_inputs(&self) {
        let mut start = self.start_date;
        let mut end = self.end_date;
        start.set(String::new());
        end.set(String::new());
    }

    fn set_pipeline_state(&self, state: PipelineState) {
        let mut pipeline = self.pipeline;
        pipeline.set(state);
    }

    fn alert(&self, message: &str) {
        match web_sys::window() {
            Some(window) => {
                if window.alert_with_message(message).is_err() {
                    log::warn!("Could not show alert: {}", message);
                }
            }
            None => log::warn!("No window to alert: {}", message),
        }
    }
}
