//! Application routing system.

use dioxus::prelude::*;
use dioxus_router::Routable;

use crate::frontend::components::layout::Shell;
use crate::frontend::pages::dashboard::MeetingBot as MeetingBotPage;
use crate::frontend::pages::signin::SignIn as SignInPage;

/// Destination the guard redirects unauthenticated visitors to.
pub const SIGN_IN_PATH: &str = "/signin";

/// Path of the dashboard itself, used after a successful sign-in.
pub const DASHBOARD_PATH: &str = "/meeting-bot";

#[component]
pub fn SignIn() -> Element {
    rsx! { SignInPage {} }
}

#[component]
pub fn MeetingBot() -> Element {
    rsx! { MeetingBotPage {} }
}

/// Main routing enum for the application.
#[derive(Clone, Routable, Debug, PartialEq, Eq)]
pub enum Route {
    /// Sign-in page route.
    #[route("/signin")]
    SignIn {},
    /// Shell layout with the meeting bot dashboard as default.
    #[layout(Shell)]
    #[redirect("/", || Route::MeetingBot {})]
    #[route("/meeting-bot")]
    MeetingBot {},
}
