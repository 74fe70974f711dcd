//! SIAEE electrical measurements dashboard
//!
//! Shows current, voltage, power and energy readings from the measurements API
//! as a table and a combined bar/line Chart.js chart. The refresh button asks
//! the automation webhook for a new collection cycle and reloads afterwards.
//!
//! Data flow:
//! 1. On mount: load Chart.js, check the controls, fetch all measurements.
//! 2. Every reload: fetch → table body signal → Chart.js (old chart destroyed first).
//! 3. Filter/reset: reload with the date inputs as bounds, or with none.
//! 4. Refresh: POST the webhook, wait for the collection window, reload unfiltered.

use dioxus::prelude::*;
use siaee_chart_ui::backend::ChartJsBackend;
use siaee_chart_ui::components::{
    ChartCanvas, ChartHeader, DateFilter, LoadingIndicator, MeasurementsTable, RefreshButton,
};
use siaee_chart_ui::state::AppState;
use siaee_chart_ui::transport::{GlooSleeper, GlooTransport};
use siaee_chart_ui::{dom, js_bridge, WebDashboard};
use siaee_panel::DashboardConfig;
use std::rc::Rc;

/// Header labels for the measurements table, in payload field order.
const TABLE_COLUMNS: [&str; 6] = [
    "ID",
    "Data/Hora",
    "Corrente (A)",
    "Tensão (V)",
    "Potência (W)",
    "Energia (Wh)",
];

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    log::info!("Starting SIAEE measurements dashboard");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("siaee-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let state = use_context_provider(AppState::new);
    let config = use_hook(DashboardConfig::default);
    let dashboard = use_hook(|| {
        Rc::new(WebDashboard::new(
            &config,
            GlooTransport,
            GlooSleeper,
            state,
            ChartJsBackend::new(config.dom.chart_canvas.clone()),
        ))
    });

    // ─── Mount: chart scripts, control check, first load ───
    {
        let dashboard = dashboard.clone();
        let dom_ids = config.dom.clone();
        use_effect(move || {
            js_bridge::init_charts();
            dom::warn_missing_controls(&dom_ids);
            let dashboard = dashboard.clone();
            spawn(async move {
                dashboard.load_initial().await;
            });
        });
    }

    let on_refresh = {
        let dashboard = dashboard.clone();
        move |_evt: MouseEvent| {
            let dashboard = dashboard.clone();
            spawn(async move {
                dashboard.refresh_via_webhook().await;
            });
        }
    };

    let on_filter = {
        let dashboard = dashboard.clone();
        move |_: ()| {
            let dashboard = dashboard.clone();
            spawn(async move {
                dashboard.apply_filter().await;
            });
        }
    };

    let on_reset = {
        let dashboard = dashboard.clone();
        move |_: ()| {
            let dashboard = dashboard.clone();
            spawn(async move {
                dashboard.reset_filter().await;
            });
        }
    };

    let columns: Vec<String> = TABLE_COLUMNS.iter().map(|c| c.to_string()).collect();

    // ─── Render ───
    rsx! {
        div {
            style: "max-width: 1100px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            div {
                style: "display: flex; justify-content: space-between; align-items: center;",
                ChartHeader {
                    title: "Medições Elétricas".to_string(),
                    unit_description: "Potência (W) e Energia (Wh) à esquerda; Corrente (A) e Tensão (V) à direita".to_string(),
                }
                RefreshButton {
                    id: config.dom.refresh_button.clone(),
                    onclick: on_refresh,
                }
            }

            DateFilter {
                ids: config.dom.clone(),
                on_filter: on_filter,
                on_reset: on_reset,
            }

            LoadingIndicator {}

            ChartCanvas {
                id: config.dom.chart_canvas.clone(),
                min_height: 420,
            }

            MeasurementsTable {
                body_id: config.dom.table_body.clone(),
                columns: columns,
            }
        }
    }
}
