//! Shared Dioxus components and D3.js bridge for the launch dashboard.
//!
//! - `js_bridge`: Rust wrappers for the D3.js pie and scatter renderers
//! - `state`: reactive `AppState` with Dioxus Signals
//! - `components`: the dashboard's RSX building blocks (title, dropdown,
//!   payload slider, chart panels, error and loading displays)

pub mod components;
pub mod js_bridge;
pub mod state;
