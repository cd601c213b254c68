//! Shell layout for the dashboard routes.

use dioxus::prelude::*;
use dioxus_router::components::Outlet;

use crate::frontend::app::Route;
use crate::frontend::components::titlebar::TitleBar;
use crate::frontend::services::context::AuthState;
use crate::utils::css::StyleLoader;

const DOCS_URL: &str = "https://docs.cxflow.io/meeting-bot";

#[component]
pub fn Shell() -> Element {
    let auth = use_context::<AuthState>();

    let account_email = auth.account_email();
    let signed_in = account_email.is_some();
    let email_text = account_email.unwrap_or_default();

    let open_docs = move |_| {
        if let Err(e) = webbrowser::open(DOCS_URL) {
            log::error!("Failed to open documentation link: {e}");
        }
    };

    rsx! {
        style { dangerous_inner_html: StyleLoader::get("dashboard") }

        TitleBar {}

        div { class: "shell",
            header { class: "shell-header",
                span { class: "shell-brand", "CXFlow" }
                div { class: "shell-actions",
                    button { class: "shell-link", onclick: open_docs, "Docs" }
                    if signed_in {
                        span { class: "shell-account", "{email_text}" }
                        button {
                            class: "shell-link",
                            onclick: move |_| {
                                spawn(async move {
                                    let mut auth = auth;
                                    auth.sign_out().await;
                                });
                            },
                            "Sign out"
                        }
                    }
                }
            }
            main { class: "shell-content",
                Outlet::<Route> {}
            }
        }
    }
}
