//! Bot creation tab.

use dioxus::prelude::*;

#[component]
pub fn CreateBot() -> Element {
    let mut bot_name = use_signal(String::new);
    let mut meeting_url = use_signal(String::new);
    let mut notice = use_signal(String::new);

    let handle_create = move |_| {
        let name = bot_name().trim().to_string();
        let url = meeting_url().trim().to_string();

        if name.is_empty() || url.is_empty() {
            notice.set("Bot name and meeting URL are both required".to_string());
            return;
        }

        log::info!("Requested meeting bot {name} for {url}");
        notice.set(format!("Bot \"{name}\" queued for {url}"));
        bot_name.set(String::new());
        meeting_url.set(String::new());
    };

    rsx! {
        div { class: "create-bot",
            h2 { class: "panel-title", "Create bot" }
            p { class: "panel-hint", "Send a bot to join and transcribe a meeting" }
            input {
                class: "field-input",
                r#type: "text",
                value: "{bot_name()}",
                placeholder: "Bot name",
                oninput: move |e| bot_name.set(e.value()),
            }
            input {
                class: "field-input",
                r#type: "text",
                value: "{meeting_url()}",
                placeholder: "Meeting URL",
                oninput: move |e| meeting_url.set(e.value()),
            }
            button { class: "primary-button", onclick: handle_create, "Create bot" }
            if !notice().is_empty() {
                p { class: "form-notice", "{notice()}" }
            }
        }
    }
}
