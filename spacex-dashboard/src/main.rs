//! SpaceX Launch Records Dashboard
//!
//! A site dropdown and a payload range slider drive two D3.js charts: a pie
//! of launch success and a scatter of payload mass against outcome.
//!
//! Data flow:
//! 1. `build.rs` copies `spacex_launch_dash.csv` into `OUT_DIR`.
//! 2. `include_str!` embeds the CSV into the WASM binary.
//! 3. On mount, the CSV is loaded into an in-memory SQLite table and the
//!    slider is set to the observed payload bounds.
//! 4. The pie re-renders on site change; the scatter re-renders on site or
//!    payload range change.

use anyhow::Context;
use dioxus::prelude::*;
use spacex_chart_ui::components::{
    ChartPanel, DashboardTitle, ErrorBanner, LoadingIndicator, PayloadRangeSlider, SiteSelector,
};
use spacex_chart_ui::js_bridge;
use spacex_chart_ui::state::AppState;
use spacex_data::{payload_scatter, success_pie, PayloadRange};
use spacex_db::Database;

/// Launch records, embedded at compile time.
const LAUNCHES_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/spacex_launch_dash.csv"));

const DASHBOARD_TITLE: &str = "SpaceX Launch Records Dashboard";
const PIE_CHART_ID: &str = "success-pie-chart";
const SCATTER_CHART_ID: &str = "success-payload-scatter-chart";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("spacex-dashboard-root"))
        .launch(App);
}

/// Load the embedded CSV and compute the slider's default range.
fn load_launch_table() -> anyhow::Result<(Database, PayloadRange)> {
    let db = Database::new().context("database initialization failed")?;
    db.load_launches(LAUNCHES_CSV)
        .context("failed to load launch records")?;
    let (min, max) = db.query_payload_bounds()?;
    Ok((db, PayloadRange::new(min, max)))
}

/// Error banner text after a chart update: cleared on success so a stale
/// error does not outlive the update that fixed it.
fn banner_message<T>(result: &anyhow::Result<T>) -> Option<String> {
    result.as_ref().err().map(|e| format!("{:#}", e))
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // ─── Load once on mount ───
    use_effect(move || {
        match load_launch_table() {
            Ok((db, range)) => {
                state.payload_range.set(range);
                state.db.set(Some(db));
                js_bridge::init_charts();
            }
            Err(e) => {
                log::error!("[SpaceX] {:#}", e);
                state.error_msg.set(Some(format!("{:#}", e)));
            }
        }
        state.loading.set(false);
    });

    // ─── Pie: depends on the selected site only ───
    use_effect(move || {
        if (state.loading)() {
            return;
        }
        let Some(db) = state.db.read().clone() else {
            return;
        };
        let site = (state.selected_site)();

        let result = success_pie(&db, site);
        match &result {
            Ok(figure) => js_bridge::render_pie_chart(PIE_CHART_ID, figure),
            Err(e) => {
                log::error!("[SpaceX] pie update failed: {:#}", e);
                js_bridge::destroy_chart(PIE_CHART_ID);
            }
        }
        state.error_msg.set(banner_message(&result));
    });

    // ─── Scatter: depends on the selected site and payload range ───
    use_effect(move || {
        if (state.loading)() {
            return;
        }
        let Some(db) = state.db.read().clone() else {
            return;
        };
        let site = (state.selected_site)();
        let range = (state.payload_range)();

        let result = payload_scatter(&db, site, range);
        match &result {
            Ok(figure) => js_bridge::render_scatter_chart(SCATTER_CHART_ID, figure),
            Err(e) => {
                log::error!("[SpaceX] scatter update failed: {:#}", e);
                js_bridge::destroy_chart(SCATTER_CHART_ID);
            }
        }
        state.error_msg.set(banner_message(&result));
    });

    rsx! {
        div {
            style: "max-width: 960px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            DashboardTitle { title: DASHBOARD_TITLE.to_string() }

            if let Some(err) = (state.error_msg)() {
                ErrorBanner { message: err }
            }

            if (state.loading)() {
                LoadingIndicator {}
            } else if state.db.read().is_some() {
                SiteSelector {}
                br {}
                ChartPanel { id: PIE_CHART_ID.to_string() }
                br {}
                PayloadRangeSlider {}
                ChartPanel { id: SCATTER_CHART_ID.to_string() }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spacex_data::SiteOption;

    #[test]
    fn test_embedded_table_loads_with_data_bounds() {
        let (db, range) = load_launch_table().unwrap();
        assert_eq!(db.query_launch_count().unwrap(), 56);
        assert_eq!(range, PayloadRange::new(0.0, 9600.0));
    }

    #[test]
    fn test_banner_clears_after_successful_update() {
        let failed: anyhow::Result<()> =
            Err(anyhow::anyhow!("no such table").context("pie update failed"));
        assert_eq!(
            banner_message(&failed).as_deref(),
            Some("pie update failed: no such table")
        );

        let (db, range) = load_launch_table().unwrap();
        let recovered = payload_scatter(&db, SiteOption::KscLc39a, range);
        assert_eq!(banner_message(&recovered), None);
    }
}
