//! Application state managed via Dioxus context.
//!
//! `AppState` is provided once with `use_context_provider` and read by
//! child components with `use_context::<AppState>()`. The selection signals
//! are the only mutable state in the app; the launch table is read-only
//! once loaded.

use dioxus::prelude::*;
use spacex_data::{PayloadRange, SiteOption};
use spacex_db::Database;

#[derive(Clone, Copy)]
pub struct AppState {
    /// Launch table (None until loaded)
    pub db: Signal<Option<Database>>,
    pub loading: Signal<bool>,
    pub error_msg: Signal<Option<String>>,
    /// Dropdown selection
    pub selected_site: Signal<SiteOption>,
    /// Slider selection, reset to the data's payload bounds after loading
    pub payload_range: Signal<PayloadRange>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            db: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            selected_site: Signal::new(SiteOption::default()),
            payload_range: Signal::new(PayloadRange::slider_span()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
