//! Sign-in redirect guard for protected views.

use std::fmt;
use std::rc::Rc;

use futures_util::future::LocalBoxFuture;

use super::session::Account;

/// Authentication status as reported by the auth context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthStatus {
    Loading,
    Authenticated(Account),
    Unauthenticated,
}

/// Snapshot of the navigation subsystem at evaluation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    pub current_path: Option<String>,
    pub is_ready: bool,
}

/// Which redirect mechanism a decision selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mechanism {
    Primary,
    Fallback,
}

/// What a protected view should do after a guard evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardAction {
    ShowLoading,
    ShowNothing,
    Redirect { target: String, via: Mechanism },
    ShowContent,
}

/// Decides what a protected view renders and whether a redirect to `target`
/// must be issued. Pure; the side effect lives in [`run_redirect`].
pub fn evaluate(status: &AuthStatus, nav: &NavigationState, target: &str) -> GuardAction {
    match status {
        AuthStatus::Loading => GuardAction::ShowLoading,
        AuthStatus::Authenticated(_) => GuardAction::ShowContent,
        AuthStatus::Unauthenticated => {
            // Already at the sign-in destination, nothing to issue
            if nav.current_path.as_deref() == Some(target) {
                return GuardAction::ShowNothing;
            }
            let via = if nav.is_ready {
                Mechanism::Primary
            } else {
                Mechanism::Fallback
            };
            GuardAction::Redirect {
                target: target.to_string(),
                via,
            }
        }
    }
}

/// A ranked navigation capability the guard can redirect through.
pub trait Navigator {
    /// Short name used in log lines.
    fn name(&self) -> &'static str;

    /// Whether this capability can currently accept a redirect.
    fn is_ready(&self) -> bool;

    /// This capability's view of the current location, if it has one.
    fn current_path(&self) -> Option<String>;

    /// Starts navigating to `target`. The outcome is observed
    /// asynchronously; callers never block a render on it.
    fn navigate(&self, target: &str) -> LocalBoxFuture<'static, Result<(), NavigateError>>;
}

/// Why a navigation attempt did not go through.
#[derive(Debug)]
pub enum NavigateError {
    /// The capability is missing in the current execution context.
    Unavailable,
    /// The capability exists but the attempt was rejected.
    Rejected(String),
}

impl fmt::Display for NavigateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable => write!(f, "navigation capability unavailable"),
            Self::Rejected(reason) => write!(f, "navigation rejected: {reason}"),
        }
    }
}

impl std::error::Error for NavigateError {}

/// Tries each navigator in rank order until one reaches `target`.
///
/// Every attempt re-checks the location first, so a redirect that became
/// redundant mid-flight resolves as a no-op. A failed attempt is logged and
/// the next capability is tried; running out of capabilities is not fatal.
pub async fn run_redirect(chain: Vec<Rc<dyn Navigator>>, target: String) {
    for nav in chain {
        if nav.current_path().as_deref() == Some(target.as_str()) {
            return;
        }
        if !nav.is_ready() {
            log::debug!("{} navigator not ready, trying next", nav.name());
            continue;
        }
        match nav.navigate(&target).await {
            Ok(()) => return,
            Err(e) => log::warn!("{} redirect to {target} failed: {e}", nav.name()),
        }
    }
    log::warn!("No navigator could reach {target}");
}

/// Remembers the last issued redirect so re-renders with unchanged inputs
/// do not repeat navigation commands.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RedirectTracker {
    requested: Option<String>,
}

impl RedirectTracker {
    /// Returns true exactly once per target until [`Self::reset`] is called.
    pub fn should_issue(&mut self, target: &str) -> bool {
        if self.requested.as_deref() == Some(target) {
            return false;
        }
        self.requested = Some(target.to_string());
        true
    }

    /// Clears the issued marker once the view state is consistent again.
    pub fn reset(&mut self) {
        self.requested = None;
    }
}

#[cfg(test)]
#[path = "guard_test.rs"]
mod tests;
