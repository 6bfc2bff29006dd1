//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The D3.js renderers live in `assets/js/*.js`, are embedded at compile time
//! and evaluated as globals once D3 has loaded. Each renderer takes a
//! container id and a figure serialized as JSON.

use serde::Serialize;

static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static PIE_CHART_JS: &str = include_str!("../assets/js/pie-chart.js");
static SCATTER_CHART_JS: &str = include_str!("../assets/js/scatter-chart.js");

/// Global functions the chart scripts define, promoted to `window.*`.
const CHART_GLOBALS: [&str; 7] = [
    "renderPieChart",
    "renderScatterChart",
    "destroyChart",
    "escapeHtml",
    "initTooltip",
    "showTooltip",
    "hideTooltip",
];

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('SpaceX JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// The scripts are stored on `window` and evaluated at global scope from
/// inside the polling callback, then every renderer is promoted to
/// `window.*` and `window.__spacexChartsReady` is set. Safe to call more
/// than once.
pub fn init_charts() {
    let all_js = [TOOLTIP_JS, PIE_CHART_JS, SCATTER_CHART_JS].join("\n");

    let store_js = format!(
        "if (!window.__spacexChartsReady) {{ window.__spacexChartScripts = {}; }}",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let promote: String = CHART_GLOBALS
        .iter()
        .map(|name| format!("if (typeof {name} !== 'undefined') window.{name} = {name};"))
        .collect::<Vec<_>>()
        .join("\n");

    let init_js = format!(
        r#"
        (function() {{
            if (window.__spacexChartsReady || window.__spacexChartsPending) return;
            window.__spacexChartsPending = true;
            var waitForD3 = setInterval(function() {{
                if (typeof d3 !== 'undefined') {{
                    clearInterval(waitForD3);
                    (0, eval)(window.__spacexChartScripts);
                    delete window.__spacexChartScripts;
                    {promote}
                    window.__spacexChartsReady = true;
                    console.log('SpaceX charts initialized');
                }}
            }}, 100);
        }})();
        "#
    );
    let _ = js_sys::eval(&init_js);
}

/// Escape a JSON payload for embedding in a single-quoted JS string literal.
fn escape_for_js(json: &str) -> String {
    json.replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('\n', "")
}

/// Call `window.<renderer>(container_id, json)` once D3, the chart scripts
/// and the container element are all available.
fn render_when_ready(renderer: &str, container_id: &str, figure_json: &str) {
    let escaped = escape_for_js(figure_json);
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__spacexChartsReady &&
                    typeof window.{renderer} !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.{renderer}('{container_id}', '{escaped}');
                    }} catch(e) {{ console.error('[SpaceX] {renderer} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

fn to_json<T: Serialize>(figure: &T) -> Option<String> {
    match serde_json::to_string(figure) {
        Ok(json) => Some(json),
        Err(e) => {
            log::error!("[SpaceX] failed to serialize figure: {}", e);
            None
        }
    }
}

/// Render the success pie into `container_id`.
pub fn render_pie_chart(container_id: &str, figure: &spacex_data::PieFigure) {
    if let Some(json) = to_json(figure) {
        render_when_ready("renderPieChart", container_id, &json);
    }
}

/// Render the payload/outcome scatter into `container_id`.
pub fn render_scatter_chart(container_id: &str, figure: &spacex_data::ScatterFigure) {
    if let Some(json) = to_json(figure) {
        render_when_ready("renderScatterChart", container_id, &json);
    }
}

/// Clear whatever chart is drawn in the given container.
///
/// Does nothing until the chart scripts are initialized; before that no
/// chart can have been drawn.
pub fn destroy_chart(container_id: &str) {
    call_js(&destroy_chart_js(container_id));
}

fn destroy_chart_js(container_id: &str) -> String {
    format!(
        "if (typeof window.destroyChart !== 'undefined') window.destroyChart('{}');",
        container_id
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_for_js_handles_quotes_and_backslashes() {
        let json = r#"{"label":"Cape's \"pad\""}"#;
        assert_eq!(escape_for_js(json), r#"{"label":"Cape\'s \\"pad\\""}"#);
    }

    #[test]
    fn destroy_chart_delegates_to_script_global() {
        assert_eq!(
            destroy_chart_js("success-pie-chart"),
            "if (typeof window.destroyChart !== 'undefined') window.destroyChart('success-pie-chart');"
        );
    }

    #[test]
    fn tooltips_escape_csv_text() {
        assert!(TOOLTIP_JS.contains("function escapeHtml("));
        assert!(TOOLTIP_JS.contains("function showTooltip("));
        assert!(PIE_CHART_JS.contains("escapeHtml(d.data.label)"));
        for field in ["d.launch_site", "d.booster_version_category", "d.booster_version"] {
            assert!(
                SCATTER_CHART_JS.contains(&format!("escapeHtml({})", field)),
                "scatter tooltip should escape {}",
                field
            );
        }
    }

    #[test]
    fn chart_scripts_define_every_promoted_global() {
        let all_js = [TOOLTIP_JS, PIE_CHART_JS, SCATTER_CHART_JS].join("\n");
        for name in CHART_GLOBALS {
            assert!(
                all_js.contains(&format!("function {}(", name)),
                "{} should be defined by the chart scripts",
                name
            );
        }
    }
}
