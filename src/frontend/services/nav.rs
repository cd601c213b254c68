//! Ranked navigator implementations for the redirect guard.

use dioxus::document;
use futures_util::future::LocalBoxFuture;

use super::guard::{NavigateError, Navigator};

/// Primary mechanism: the in-app router.
pub struct RouterNavigator {
    handle: dioxus_router::Navigator,
    current_path: String,
}

impl RouterNavigator {
    pub fn new(handle: dioxus_router::Navigator, current_path: String) -> Self {
        Self {
            handle,
            current_path,
        }
    }
}

impl Navigator for RouterNavigator {
    fn name(&self) -> &'static str {
        "router"
    }

    fn is_ready(&self) -> bool {
        true
    }

    fn current_path(&self) -> Option<String> {
        Some(self.current_path.clone())
    }

    fn navigate(&self, target: &str) -> LocalBoxFuture<'static, Result<(), NavigateError>> {
        let handle = self.handle;
        let target = target.to_string();
        Box::pin(async move {
            match handle.replace(target) {
                Some(failure) => Err(NavigateError::Rejected(format!("{failure:?}"))),
                None => Ok(()),
            }
        })
    }
}

/// Fallback mechanism: direct location assignment through the webview.
/// Only usable where a window-like scripting context exists.
pub struct LocationNavigator;

impl Navigator for LocationNavigator {
    fn name(&self) -> &'static str {
        "location"
    }

    fn is_ready(&self) -> bool {
        true
    }

    fn current_path(&self) -> Option<String> {
        // No synchronous view of the webview location
        None
    }

    fn navigate(&self, target: &str) -> LocalBoxFuture<'static, Result<(), NavigateError>> {
        let script = format!("window.location.assign({target:?});");
        Box::pin(async move {
            match document::eval(&script).await {
                Ok(_) => Ok(()),
                Err(document::EvalError::Unsupported) => Err(NavigateError::Unavailable),
                Err(e) => Err(NavigateError::Rejected(format!("{e:?}"))),
            }
        })
    }
}
