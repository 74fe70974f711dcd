//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The chart functions live in `assets/js/measurements-chart.js`, are embedded
//! at compile time and evaluated as globals once Chart.js has loaded. Chart.js
//! itself is injected from its CDN when the page does not already provide it.

use wasm_bindgen::JsValue;

static MEASUREMENTS_CHART_JS: &str = include_str!("../assets/js/measurements-chart.js");

/// Chart.js UMD build, used when the host page has not loaded it.
pub const CHART_JS_URL: &str = "https://cdn.jsdelivr.net/npm/chart.js@4.4.1/dist/chart.umd.min.js";

/// Execute JS, reporting an evaluation error to the caller.
pub fn eval_js(code: &str) -> Result<JsValue, JsValue> {
    js_sys::eval(code)
}

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('SIAEE JS call failed:', e); }}",
        code
    );
    if let Err(e) = eval_js(&wrapped) {
        log::warn!("JS evaluation failed: {:?}", e);
    }
}

/// Load Chart.js (if needed) and the chart scripts. Safe to call repeatedly.
///
/// The scripts are stored on `window` and evaluated at global scope once
/// `Chart` is defined, so their function declarations become globals.
pub fn init_charts() {
    let store_js = format!(
        "if (!window.__siaeeChartsInit) {{ window.__siaeeChartScripts = {}; }}",
        serde_json::to_string(MEASUREMENTS_CHART_JS).unwrap_or_default()
    );
    call_js(&store_js);

    call_js(&format!(
        r#"
        (function() {{
            if (window.__siaeeChartsInit) return;
            window.__siaeeChartsInit = true;
            window.__siaeeChartPending = window.__siaeeChartPending || {{}};
            if (typeof Chart === 'undefined' && !document.getElementById('siaee-chartjs')) {{
                var script = document.createElement('script');
                script.id = 'siaee-chartjs';
                script.src = '{CHART_JS_URL}';
                document.head.appendChild(script);
            }}
            var waitForChart = setInterval(function() {{
                if (typeof Chart !== 'undefined') {{
                    clearInterval(waitForChart);
                    (0, eval)(window.__siaeeChartScripts);
                    delete window.__siaeeChartScripts;
                    if (typeof renderMeasurementsChart !== 'undefined') window.renderMeasurementsChart = renderMeasurementsChart;
                    if (typeof destroyMeasurementsChart !== 'undefined') window.destroyMeasurementsChart = destroyMeasurementsChart;
                    window.__siaeeChartsReady = true;
                    console.log('SIAEE charts initialized');
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Render the measurements chart into `canvas_id`, registered under `handle`.
///
/// Waits for Chart.js, the chart scripts and the canvas. A handle destroyed
/// before that happens is never rendered.
pub fn render_measurements_chart(
    handle: &str,
    canvas_id: &str,
    config_json: &str,
) -> Result<(), JsValue> {
    let code = format!(
        r#"
        (function() {{
            window.__siaeeChartPending = window.__siaeeChartPending || {{}};
            window.__siaeeChartPending['{handle}'] = true;
            var config = {config_json};
            var poll = setInterval(function() {{
                if (!window.__siaeeChartPending['{handle}']) {{
                    clearInterval(poll);
                    return;
                }}
                if (window.__siaeeChartsReady &&
                    typeof window.renderMeasurementsChart !== 'undefined' &&
                    document.getElementById('{canvas_id}')) {{
                    clearInterval(poll);
                    delete window.__siaeeChartPending['{handle}'];
                    try {{
                        window.renderMeasurementsChart('{handle}', '{canvas_id}', config);
                    }} catch(e) {{ console.error('[SIAEE] renderMeasurementsChart error:', e); }}
                }}
            }}, 50);
        }})();
        "#,
    );
    eval_js(&code).map(|_| ())
}

/// Destroy the chart registered under `handle`, or cancel its pending render.
pub fn destroy_measurements_chart(handle: &str) {
    call_js(&format!(
        r#"
        if (window.__siaeeChartPending) delete window.__siaeeChartPending['{handle}'];
        if (typeof window.destroyMeasurementsChart !== 'undefined') window.destroyMeasurementsChart('{handle}');
        "#,
    ));
}
