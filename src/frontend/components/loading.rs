//! Loading indicator shown while the session is being resolved.

use dioxus::prelude::*;

#[component]
pub fn LoadingView() -> Element {
    rsx! {
        div { class: "loading-view",
            div { class: "loading-spinner" }
            span { class: "loading-text", "Checking your session..." }
        }
    }
}
