//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! D3.js chart functions are split across `assets/js/*.js` and loaded at
//! runtime. They are evaluated as globals (no ES modules) and exposed via
//! `window.*`. This module provides safe Rust wrappers that serialize data
//! and call those globals.

// Embed all D3 chart JS files at compile time
static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static SERIES_CHART_JS: &str = include_str!("../assets/js/series-chart.js");
static FORECAST_CHART_JS: &str = include_str!("../assets/js/forecast-chart.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('dashboard JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// The chart JS files define functions like `renderSeriesChart(...)` via
/// `function` declarations. To ensure they become globally accessible
/// (not block-scoped inside the setInterval callback), they are evaluated
/// at global scope via indirect `eval()` once D3 is ready, then each
/// function is explicitly promoted to `window.*`.
pub fn init_charts() {
    let all_js = [TOOLTIP_JS, SERIES_CHART_JS, FORECAST_CHART_JS].join("\n");

    // Store the scripts on window so the polling callback can eval them
    // at global scope (not block-scoped inside setInterval).
    let store_js = format!(
        "window.__paddyChartScripts = {};",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);
    log::debug!("js_bridge: chart scripts staged for init");

    let init_js = r#"
        (function() {
            if (window.__paddyChartsReady) { delete window.__paddyChartScripts; return; }
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    // Eval at global scope via indirect eval
                    (0, eval)(window.__paddyChartScripts);
                    delete window.__paddyChartScripts;
                    // Promote function declarations to window explicitly
                    if (typeof renderSeriesChart !== 'undefined') window.renderSeriesChart = renderSeriesChart;
                    if (typeof renderForecastChart !== 'undefined') window.renderForecastChart = renderForecastChart;
                    if (typeof initTooltip !== 'undefined') window.initTooltip = initTooltip;
                    if (typeof showTooltip !== 'undefined') window.showTooltip = showTooltip;
                    if (typeof hideTooltip !== 'undefined') window.hideTooltip = hideTooltip;
                    window.__paddyChartsReady = true;
                    console.log('dashboard charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Render a grouped line chart into the given container.
///
/// `data_json` is an array of points; `config_json` names the x/y/group
/// accessors, title, and axis labels (see `series-chart.js`). Uses a
/// polling loop to wait for D3.js to load, chart scripts to initialize,
/// and the container DOM element to exist before rendering.
pub fn render_series_chart(container_id: &str, data_json: &str, config_json: &str) {
    let escaped_data = data_json.replace('\'', "\\'").replace('\n', "");
    let escaped_config = config_json.replace('\'', "\\'").replace('\n', "");
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__paddyChartsReady &&
                    typeof window.renderSeriesChart !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.renderSeriesChart('{container_id}', '{escaped_data}', '{escaped_config}');
                    }} catch(e) {{ console.error('renderSeriesChart error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Render a forecast figure (observed markers, predicted line, uncertainty
/// band) from a serialized `FigureSpec`.
pub fn render_forecast_chart(container_id: &str, figure_json: &str) {
    let escaped = figure_json.replace('\'', "\\'").replace('\n', "");
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__paddyChartsReady &&
                    typeof window.renderForecastChart !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.renderForecastChart('{container_id}', '{escaped}');
                    }} catch(e) {{ console.error('renderForecastChart error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// JSON config payload for `renderSeriesChart`.
///
/// Kept as a plain builder function rather than a struct: the config is
/// write-only and goes straight through the bridge.
pub fn series_config(
    title: &str,
    x_field: &str,
    x_label: &str,
    y_label: &str,
    group_field: &str,
    time_axis: bool,
) -> String {
    serde_json::json!({
        "title": title,
        "xField": x_field,
        "xLabel": x_label,
        "yField": "value",
        "yLabel": y_label,
        "groupField": group_field,
        "timeAxis": time_axis,
        "width": 900,
        "height": 450,
    })
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_config_carries_accessors() {
        let cfg = series_config("T_Mean Weekly", "period", "week", "value", "year", false);
        let parsed: serde_json::Value = serde_json::from_str(&cfg).unwrap();
        assert_eq!(parsed["xField"], "period");
        assert_eq!(parsed["groupField"], "year");
        assert_eq!(parsed["timeAxis"], false);
        assert_eq!(parsed["title"], "T_Mean Weekly");
    }

    #[test]
    fn chart_scripts_are_embedded() {
        assert!(SERIES_CHART_JS.contains("function renderSeriesChart"));
        assert!(FORECAST_CHART_JS.contains("function renderForecastChart"));
        assert!(TOOLTIP_JS.contains("function initTooltip"));
    }
}
