//! Bot configuration tab.

use dioxus::prelude::*;

const LANGUAGES: [&str; 4] = ["English", "German", "Spanish", "French"];

#[component]
pub fn Configuration() -> Element {
    let mut record_meetings = use_signal(|| true);
    let mut language = use_signal(|| LANGUAGES[0]);

    let chips = LANGUAGES.iter().map(|lang| {
        let lang = *lang;
        rsx! {
            button {
                class: if language() == lang { "chip active" } else { "chip" },
                onclick: move |_| language.set(lang),
                "{lang}"
            }
        }
    });

    rsx! {
        div { class: "configuration",
            h2 { class: "panel-title", "Configuration" }
            div { class: "config-row",
                span { class: "config-label", "Record meetings" }
                button {
                    class: if record_meetings() { "toggle on" } else { "toggle" },
                    onclick: move |_| {
                        let current = record_meetings();
                        record_meetings.set(!current);
                    },
                    if record_meetings() { "On" } else { "Off" }
                }
            }
            div { class: "config-row",
                span { class: "config-label", "Transcript language" }
                div { class: "chip-row",
                    {chips}
                }
            }
        }
    }
}
