//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! Chart.js is pulled from its CDN at startup. The small registry in
//! `assets/js/weather-charts.js` is evaluated as globals once `Chart` is
//! defined and exposed via `window.*`; this module serializes arguments and
//! calls those globals.

static WEATHER_CHARTS_JS: &str = include_str!("../assets/js/weather-charts.js");

/// Chart.js UMD bundle.
pub const CHART_JS_SRC: &str = "https://cdn.jsdelivr.net/npm/chart.js";

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('WXC JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Quote a Rust string as a JS string literal.
fn js_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "''".to_string())
}

/// Load Chart.js and the chart registry. Call once at app startup.
///
/// Injects the Chart.js `<script>` tag if the page does not already carry
/// one, then polls until `Chart` is defined. The registry is evaluated at
/// global scope through an indirect `eval` and its functions promoted to
/// `window.*` so later calls can find them.
pub fn init_charts() {
    let store_js = format!(
        "window.__wxcChartScripts = {};",
        js_string(WEATHER_CHARTS_JS)
    );
    let _ = js_sys::eval(&store_js);

    let init_js = format!(
        r#"
        (function() {{
            if (typeof Chart === 'undefined' && !document.getElementById('wxc-chartjs')) {{
                var tag = document.createElement('script');
                tag.id = 'wxc-chartjs';
                tag.src = {src};
                document.head.appendChild(tag);
            }}
            var waitForChartJs = setInterval(function() {{
                if (typeof Chart !== 'undefined') {{
                    clearInterval(waitForChartJs);
                    if (!window.__wxcChartScripts) {{ return; }}
                    (0, eval)(window.__wxcChartScripts);
                    delete window.__wxcChartScripts;
                    if (typeof renderWeatherChart !== 'undefined') window.renderWeatherChart = renderWeatherChart;
                    if (typeof destroyWeatherChart !== 'undefined') window.destroyWeatherChart = destroyWeatherChart;
                    window.__wxcChartsReady = true;
                    console.log('WXC charts initialized');
                }}
            }}, 100);
        }})();
        "#,
        src = js_string(CHART_JS_SRC),
    );
    let _ = js_sys::eval(&init_js);
}

/// Whether the page has an element with `id` right now.
pub fn surface_exists(id: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
        .is_some()
}

/// Draw a chart on the canvas `canvas_id` from a Chart.js config object.
///
/// Polls until the registry is ready, so it is safe to call before
/// Chart.js has finished loading.
pub fn render_chart(canvas_id: &str, config_json: &str) {
    let id = js_string(canvas_id);
    let config = js_string(config_json);
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__wxcChartsReady && typeof window.renderWeatherChart !== 'undefined') {{
                    clearInterval(poll);
                    try {{
                        window.renderWeatherChart({id}, {config});
                    }} catch(e) {{ console.error('[WXC] renderWeatherChart error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Destroy the chart on `canvas_id`, if one is drawn.
pub fn destroy_chart(canvas_id: &str) {
    call_js(&format!(
        "if (window.destroyWeatherChart) window.destroyWeatherChart({});",
        js_string(canvas_id)
    ));
}
