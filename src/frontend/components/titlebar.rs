use dioxus::prelude::*;

#[component]
pub fn TitleBar() -> Element {
    rsx! {
        div {
            class: "titlebar-drag",
            onmousedown: move |_| {
                let window = dioxus_desktop::window();
                let _ = window.drag();
            }
        }

        div { class: "titlebar-controls",
            button {
                class: "titlebar-button",
                title: "Minimize",
                onclick: move |_| {
                    let window = dioxus_desktop::window();
                    let _ = window.set_minimized(true);
                },
                span { "─" }
            }
            button {
                class: "titlebar-button titlebar-close",
                title: "Close",
                onclick: move |_| {
                    let window = dioxus_desktop::window();
                    window.close();
                },
                span { "✕" }
            }
        }
    }
}
