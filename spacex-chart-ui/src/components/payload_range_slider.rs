//! Two-handle payload range slider.
//!
//! Built from a pair of range inputs sharing the fixed slider bounds and
//! step. The low handle cannot pass the high one and vice versa. Handles
//! and label show the selection snapped outward to the step grid, so the
//! default data bounds (e.g. 0 - 9600) read as 0 - 10000.

use crate::state::AppState;
use dioxus::prelude::*;
use spacex_data::slider::{
    PAYLOAD_SLIDER_MARKS, PAYLOAD_SLIDER_MAX, PAYLOAD_SLIDER_MIN, PAYLOAD_SLIDER_STEP,
};

const MARKS_LIST_ID: &str = "payload-slider-marks";

#[component]
pub fn PayloadRangeSlider() -> Element {
    let mut state = use_context::<AppState>();
    let shown = (state.payload_range)().snapped_to_step();

    let on_low_change = move |evt: Event<FormData>| {
        if let Ok(low) = evt.value().parse::<f64>() {
            let current = (state.payload_range)();
            state.payload_range.set(current.with_low(low));
        }
    };

    let on_high_change = move |evt: Event<FormData>| {
        if let Ok(high) = evt.value().parse::<f64>() {
            let current = (state.payload_range)();
            state.payload_range.set(current.with_high(high));
        }
    };

    rsx! {
        div {
            id: "payload-slider",
            style: "margin: 8px 0 16px 0;",
            p {
                style: "margin: 0 0 4px 0;",
                "Payload range (Kg): {shown.low} - {shown.high}"
            }
            datalist {
                id: MARKS_LIST_ID,
                for mark in PAYLOAD_SLIDER_MARKS {
                    option { value: "{mark}", label: "{mark}" }
                }
            }
            div {
                style: "display: flex; gap: 12px; align-items: center;",
                input {
                    r#type: "range",
                    aria_label: "Minimum payload (kg)",
                    style: "flex: 1;",
                    min: "{PAYLOAD_SLIDER_MIN}",
                    max: "{PAYLOAD_SLIDER_MAX}",
                    step: "{PAYLOAD_SLIDER_STEP}",
                    list: MARKS_LIST_ID,
                    value: "{shown.low}",
                    oninput: on_low_change,
                }
                input {
                    r#type: "range",
                    aria_label: "Maximum payload (kg)",
                    style: "flex: 1;",
                    min: "{PAYLOAD_SLIDER_MIN}",
                    max: "{PAYLOAD_SLIDER_MAX}",
                    step: "{PAYLOAD_SLIDER_STEP}",
                    list: MARKS_LIST_ID,
                    value: "{shown.high}",
                    oninput: on_high_change,
                }
            }
            div {
                style: "display: flex; justify-content: space-between; font-size: 11px; color: #888;",
                for mark in PAYLOAD_SLIDER_MARKS {
                    span { "{mark}" }
                }
            }
        }
    }
}
