//! Typed wrappers around the Chart.js glue via `js_sys::eval()`.
//!
//! `assets/js/indicator-chart.js` is embedded at compile time and evaluated at
//! global scope once Chart.js has loaded. Calls are polled until both the glue
//! and the target canvas exist, so they are safe to issue before first paint.

use nuam_core::chart::ChartSurface;
use serde_json::Value;

static INDICATOR_CHART_JS: &str = include_str!("../assets/js/indicator-chart.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('NUAM JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Quote a string as a JS string literal.
fn js_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string())
}

/// Install the chart glue once Chart.js is available. Call once at app startup.
pub fn init_charts() {
    let store_js = format!(
        "window.__nuamChartScripts = {};",
        js_string(INDICATOR_CHART_JS)
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            var waitForChartJs = setInterval(function() {
                if (typeof Chart !== 'undefined') {
                    clearInterval(waitForChartJs);
                    (0, eval)(window.__nuamChartScripts);
                    delete window.__nuamChartScripts;
                    if (typeof createIndicatorChart !== 'undefined') window.createIndicatorChart = createIndicatorChart;
                    if (typeof updateIndicatorChart !== 'undefined') window.updateIndicatorChart = updateIndicatorChart;
                    window.__nuamChartsReady = true;
                    console.log('NUAM charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Create the chart on `canvas_id` with a full Chart.js configuration.
pub fn create_chart(canvas_id: &str, config_json: &str) {
    let id = js_string(canvas_id);
    let config = js_string(config_json);
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__nuamChartsReady &&
                    typeof window.createIndicatorChart !== 'undefined' &&
                    document.getElementById({id})) {{
                    clearInterval(poll);
                    try {{
                        window.createIndicatorChart({id}, {config});
                    }} catch(e) {{ console.error('[NUAM] createIndicatorChart error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Replace labels and datasets of the chart on `canvas_id`, then redraw.
///
/// Waits for a pending `create_chart` on the same canvas to finish first.
pub fn update_chart(canvas_id: &str, labels_json: &str, datasets_json: &str) {
    let id = js_string(canvas_id);
    let labels = js_string(labels_json);
    let datasets = js_string(datasets_json);
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__nuamChartsReady &&
                    window.__nuamCharts && window.__nuamCharts[{id}]) {{
                    clearInterval(poll);
                    try {{
                        window.updateIndicatorChart({id}, {labels}, {datasets});
                    }} catch(e) {{ console.error('[NUAM] updateIndicatorChart error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Chart.js-backed drawing surface bound to one `<canvas>` id.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartJsSurface {
    canvas_id: String,
}

impl ChartJsSurface {
    pub fn new(canvas_id: &str) -> Self {
        Self {
            canvas_id: canvas_id.to_string(),
        }
    }
}

impl ChartSurface for ChartJsSurface {
    fn create(&mut self, config: &Value) {
        create_chart(&self.canvas_id, &config.to_string());
    }

    fn update(&mut self, labels: &[String], datasets: &Value) {
        let labels_json = serde_json::to_string(labels).unwrap_or_else(|_| "[]".to_string());
        update_chart(&self.canvas_id, &labels_json, &datasets.to_string());
    }
}
