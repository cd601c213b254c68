//! Bot list tab with an expandable detail view.

use dioxus::prelude::*;

#[derive(Clone, PartialEq, Eq)]
struct BotSummary {
    name: String,
    meeting_url: String,
    state: &'static str,
}

// TODO: replace the sample data with the bots API once the service endpoint is wired
fn sample_bots() -> Vec<BotSummary> {
    vec![
        BotSummary {
            name: "Weekly sync".to_string(),
            meeting_url: "https://meet.example.com/weekly-sync".to_string(),
            state: "recording",
        },
        BotSummary {
            name: "Customer onboarding".to_string(),
            meeting_url: "https://meet.example.com/onboarding".to_string(),
            state: "scheduled",
        },
        BotSummary {
            name: "Retro".to_string(),
            meeting_url: "https://meet.example.com/retro".to_string(),
            state: "done",
        },
    ]
}

#[component]
pub fn MyBots(open_bot: Signal<Option<String>>) -> Element {
    let mut open_bot = open_bot;
    let bots = use_signal(sample_bots);

    if let Some(name) = open_bot() {
        if let Some(bot) = bots().into_iter().find(|b| b.name == name) {
            return rsx! {
                div { class: "bot-detail",
                    h2 { class: "panel-title", "{bot.name}" }
                    p { class: "bot-meta", "Meeting: {bot.meeting_url}" }
                    p { class: "bot-meta", "State: {bot.state}" }
                }
            };
        }
    }

    let rows = bots().into_iter().map(|bot| {
        let name = bot.name.clone();
        rsx! {
            button {
                class: "bot-row",
                onclick: move |_| open_bot.set(Some(name.clone())),
                span { class: "bot-name", "{bot.name}" }
                span { class: "bot-state", "{bot.state}" }
            }
        }
    });

    rsx! {
        div { class: "bot-list",
            h2 { class: "panel-title", "My bots" }
            {rows}
        }
    }
}
