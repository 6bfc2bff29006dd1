//! Launch site dropdown.

use crate::state::AppState;
use dioxus::prelude::*;
use spacex_data::SiteOption;

/// Dropdown over the five fixed site options.
///
/// Writes the parsed option into `AppState::selected_site`. A value that is
/// not one of the option codes is reported through `error_msg`.
///
/// This is a native `<select>`: with only five entries it offers type-ahead
/// but no free-text search box.
#[component]
pub fn SiteSelector() -> Element {
    let mut state = use_context::<AppState>();
    let selected = (state.selected_site)();

    let on_change = move |evt: Event<FormData>| match evt.value().parse::<SiteOption>() {
        Ok(site) => {
            state.selected_site.set(site);
            state.error_msg.set(None);
        }
        Err(e) => {
            log::error!("[SpaceX] {}", e);
            state.error_msg.set(Some(e.to_string()));
        }
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            select {
                id: "site-dropdown",
                aria_label: "Launch site",
                style: "width: 100%; padding: 6px; font-size: 14px;",
                onchange: on_change,
                option {
                    value: "",
                    disabled: true,
                    "Select a Launch Site here"
                }
                for site in SiteOption::OPTIONS {
                    option {
                        value: site.value(),
                        selected: site == selected,
                        {site.label()}
                    }
                }
            }
        }
    }
}
