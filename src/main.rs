mod frontend;
mod utils;

use std::sync::OnceLock;

use dioxus::LaunchBuilder;
use dioxus::prelude::*;
use dioxus_desktop::{Config, LogicalSize, WindowBuilder};
use dioxus_router::Router;
use tokio::runtime::Runtime;

use crate::frontend::app::Route;
use crate::frontend::services::context::AuthState;
use crate::frontend::services::guard::AuthStatus;
use crate::utils::css::StyleLoader;

static RUNTIME: OnceLock<Runtime> = OnceLock::new();

fn main() {
    // Logging setup
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Initialize runtime once
    let _rt = RUNTIME.get_or_init(|| {
        tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .expect("Failed to create runtime")
    });

    let size = LogicalSize::new(1280.0, 800.0);

    let config = Config::default()
        .with_window(
            WindowBuilder::new()
                .with_title("CXFlow Meeting Bot")
                .with_inner_size(size)
                .with_min_inner_size(LogicalSize::new(1024.0, 700.0))
                .with_resizable(true),
        )
        .with_menu(None);

    LaunchBuilder::new().with_cfg(config).launch(AppRoot);
}

#[component]
fn AppRoot() -> Element {
    let status = use_signal(|| AuthStatus::Loading);
    let auth = AuthState { status };
    provide_context(auth);

    // Resolve the stored session into a definite status once at startup
    use_future(move || async move {
        let mut auth = auth;
        auth.load_saved_session().await;
    });

    rsx! {
        style { dangerous_inner_html: StyleLoader::get("base") }
        Router::<Route> {}
    }
}
