//! Sign-in page.

use dioxus::{events::KeyboardEvent, prelude::*};
use dioxus_router::use_navigator;

use crate::frontend::app::DASHBOARD_PATH;
use crate::frontend::components::auth_layout::AuthLayout;
use crate::frontend::services::context::AuthState;
use crate::frontend::services::guard::AuthStatus;

#[component]
pub fn SignIn() -> Element {
    let nav = use_navigator();
    let auth = use_context::<AuthState>();
    let mut email = use_signal(String::new);
    let mut error_message = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    // Already signed in, go straight to the dashboard
    use_effect(move || {
        if matches!(&*auth.status.read(), AuthStatus::Authenticated(_)) {
            nav.push(DASHBOARD_PATH);
        }
    });

    let mut submit = move || {
        if submitting() {
            return;
        }
        let address = email();
        submitting.set(true);
        error_message.set(String::new());
        spawn(async move {
            let mut auth = auth;
            match auth.sign_in(address).await {
                Ok(()) => {
                    nav.push(DASHBOARD_PATH);
                }
                Err(message) => {
                    error_message.set(message);
                    submitting.set(false);
                }
            }
        });
    };

    let on_keypress = move |e: KeyboardEvent| {
        if e.key() == Key::Enter {
            submit();
        }
    };

    rsx! {
        AuthLayout {
            main { class: "signin",
                h1 { class: "signin-title", "CXFlow Meeting Bot" }
                p { class: "signin-subtitle", "Sign in to manage your meeting bots" }
                input {
                    class: "signin-input",
                    r#type: "email",
                    value: "{email()}",
                    placeholder: "you@company.com",
                    autofocus: true,
                    oninput: move |e| {
                        email.set(e.value());
                        error_message.set(String::new());
                    },
                    onkeypress: on_keypress,
                }
                button {
                    class: "signin-button",
                    disabled: submitting(),
                    onclick: move |_| submit(),
                    if submitting() { "Signing in..." } else { "Sign in" }
                }
                if !error_message().is_empty() {
                    p { class: "signin-error", "{error_message()}" }
                }
            }
        }
    }
}
