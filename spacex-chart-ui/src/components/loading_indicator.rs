use dioxus::prelude::*;

#[component]
pub fn LoadingIndicator() -> Element {
    rsx! {
        p {
            style: "text-align: center; padding: 40px; color: #666;",
            "Loading launch records..."
        }
    }
}
