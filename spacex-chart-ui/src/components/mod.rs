//! Reusable Dioxus RSX components for the launch dashboard.

mod chart_panel;
mod dashboard_title;
mod error_banner;
mod loading_indicator;
mod payload_range_slider;
mod site_selector;

pub use chart_panel::ChartPanel;
pub use dashboard_title::DashboardTitle;
pub use error_banner::ErrorBanner;
pub use loading_indicator::LoadingIndicator;
pub use payload_range_slider::PayloadRangeSlider;
pub use site_selector::SiteSelector;
