//! Rendering and refresh coordination for the measurements dashboard.
//!
//! This crate is free of browser types so the whole pipeline can be tested
//! natively. It provides:
//! - `table`: records to table rows (or the "no data" placeholder)
//! - `chart`: series derivation, Chart.js configuration, single-instance `ChartState`
//! - `view`: the seams the browser implements (`DashboardView`, `Sleeper`)
//! - `controller`: the `Dashboard` that runs fetch → table → chart

pub mod chart;
pub mod config;
pub mod controller;
pub mod table;
pub mod view;

#[cfg(test)]
mod testing;

pub use chart::{ChartBackend, ChartSeries, ChartState};
pub use config::{DashboardConfig, DomIds};
pub use controller::Dashboard;
pub use table::{render_table, TableBody, TableRow};
pub use view::{DashboardView, PipelineState, Sleeper};
