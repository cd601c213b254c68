//! Meeting bot dashboard page with authentication guard.

use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_router::{navigator, use_route};

use crate::frontend::app::{Route, SIGN_IN_PATH};
use crate::frontend::components::loading::LoadingView;
use crate::frontend::components::tabs::{Configuration, CreateBot, MyBots};
use crate::frontend::services::context::AuthState;
use crate::frontend::services::guard::{
    self, GuardAction, NavigationState, Navigator, RedirectTracker,
};
use crate::frontend::services::nav::{LocationNavigator, RouterNavigator};

/// Tabs of the dashboard.
#[derive(Clone, Copy, PartialEq, Eq)]
enum DashboardTab {
    Create,
    Bots,
    Configuration,
}

impl DashboardTab {
    const ALL: [Self; 3] = [Self::Create, Self::Bots, Self::Configuration];

    fn label(self) -> &'static str {
        match self {
            Self::Create => "Create bot",
            Self::Bots => "My bots",
            Self::Configuration => "Configuration",
        }
    }
}

#[component]
pub fn MeetingBot() -> Element {
    let auth = use_context::<AuthState>();
    let nav = navigator();
    let route = use_route::<Route>();
    let mut tracker = use_signal(RedirectTracker::default);

    let snapshot = NavigationState {
        current_path: Some(route.to_string()),
        is_ready: true,
    };
    let status = auth.status.read().clone();

    match guard::evaluate(&status, &snapshot, SIGN_IN_PATH) {
        GuardAction::ShowLoading => {
            tracker.write().reset();
            rsx! { LoadingView {} }
        }
        GuardAction::ShowContent => {
            tracker.write().reset();
            rsx! { DashboardContent {} }
        }
        GuardAction::ShowNothing => rsx! { div {} },
        GuardAction::Redirect { target, .. } => {
            if tracker.write().should_issue(&target) {
                let chain: Vec<Rc<dyn Navigator>> = vec![
                    Rc::new(RouterNavigator::new(nav, route.to_string())),
                    Rc::new(LocationNavigator),
                ];
                spawn(guard::run_redirect(chain, target));
            }
            rsx! { div {} }
        }
    }
}

#[component]
fn DashboardContent() -> Element {
    let mut active_tab = use_signal(|| DashboardTab::Create);
    let mut open_bot = use_signal(|| None::<String>);

    // Back affordance only makes sense while a bot detail is open
    let show_back = active_tab() == DashboardTab::Bots && open_bot().is_some();

    let panel = match active_tab() {
        DashboardTab::Create => rsx! { CreateBot {} },
        DashboardTab::Bots => rsx! { MyBots { open_bot } },
        DashboardTab::Configuration => rsx! { Configuration {} },
    };

    let tab_buttons = DashboardTab::ALL.into_iter().map(|tab| {
        rsx! {
            button {
                class: if active_tab() == tab { "tab-button active" } else { "tab-button" },
                onclick: move |_| {
                    active_tab.set(tab);
                    open_bot.set(None);
                },
                "{tab.label()}"
            }
        }
    });

    rsx! {
        div { class: "dashboard",
            div { class: "dashboard-header",
                h1 { class: "dashboard-title", "CXFlow Meeting Bot" }
                if show_back {
                    button {
                        class: "back-to-list",
                        onclick: move |_| open_bot.set(None),
                        "Back to list"
                    }
                }
            }
            nav { class: "dashboard-tabs",
                {tab_buttons}
            }
            div { class: "dashboard-panel",
                {panel}
            }
        }
    }
}
