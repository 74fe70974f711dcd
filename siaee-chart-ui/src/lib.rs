//! Browser side of the SIAEE measurements dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the Chart.js functions via `js_sys::eval()`
//! - `backend`: `ChartJsBackend`, the Chart.js implementation of `ChartBackend`
//! - `transport`: gloo-net HTTP transport and gloo-timers sleeper
//! - `state`: Reactive AppState with Dioxus Signals, doubling as the dashboard view
//! - `dom`: presence check for the page controls
//! - `components`: RSX components for the table, chart and controls

pub mod backend;
pub mod components;
pub mod dom;
pub mod js_bridge;
pub mod state;
pub mod transport;

use siaee_panel::Dashboard;

/// The dashboard controller wired to browser implementations.
pub type WebDashboard =
    Dashboard<transport::GlooTransport, transport::GlooSleeper, state::AppState, backend::ChartJsBackend>;
