//! Chart region that D3.js renders into.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartPanelProps {
    /// DOM id the renderer targets
    pub id: String,
    #[props(default = 420)]
    pub min_height: u32,
}

/// An empty, full-width div reserved for one chart.
#[component]
pub fn ChartPanel(props: ChartPanelProps) -> Element {
    let style = format!("min-height: {}px; width: 100%;", props.min_height);

    rsx! {
        div {
            id: "{props.id}",
            style: "{style}",
        }
    }
}
