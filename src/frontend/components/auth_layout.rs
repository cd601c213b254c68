use dioxus::prelude::*;

use crate::frontend::components::titlebar::TitleBar;
use crate::utils::css::StyleLoader;

#[component]
pub fn AuthLayout(children: Element) -> Element {
    rsx! {
        style { dangerous_inner_html: StyleLoader::get("auth") }

        TitleBar {}

        div { class: "auth-container",
            {children}
        }
    }
}
