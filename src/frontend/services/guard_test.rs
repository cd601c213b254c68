use std::cell::RefCell;
use std::rc::Rc;

use super::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Outcome {
    Succeed,
    Reject,
    Unavailable,
}

struct FakeNavigator {
    name: &'static str,
    ready: bool,
    outcome: Outcome,
    path: Rc<RefCell<Option<String>>>,
    calls: Rc<RefCell<Vec<String>>>,
}

impl FakeNavigator {
    fn new(name: &'static str, ready: bool, outcome: Outcome, path: Option<&str>) -> Self {
        Self {
            name,
            ready,
            outcome,
            path: Rc::new(RefCell::new(path.map(str::to_string))),
            calls: Rc::new(RefCell::new(Vec::new())),
        }
    }

    fn calls(&self) -> Rc<RefCell<Vec<String>>> {
        Rc::clone(&self.calls)
    }
}

impl Navigator for FakeNavigator {
    fn name(&self) -> &'static str {
        self.name
    }

    fn is_ready(&self) -> bool {
        self.ready
    }

    fn current_path(&self) -> Option<String> {
        self.path.borrow().clone()
    }

    fn navigate(&self, target: &str) -> LocalBoxFuture<'static, Result<(), NavigateError>> {
        self.calls.borrow_mut().push(target.to_string());
        let outcome = self.outcome;
        let path = Rc::clone(&self.path);
        let target = target.to_string();
        Box::pin(async move {
            match outcome {
                Outcome::Succeed => {
                    *path.borrow_mut() = Some(target);
                    Ok(())
                }
                Outcome::Reject => Err(NavigateError::Rejected("boom".to_string())),
                Outcome::Unavailable => Err(NavigateError::Unavailable),
            }
        })
    }
}

fn authenticated() -> AuthStatus {
    AuthStatus::Authenticated(Account {
        email: "user@example.com".to_string(),
    })
}

fn nav_state(path: Option<&str>, ready: bool) -> NavigationState {
    NavigationState {
        current_path: path.map(str::to_string),
        is_ready: ready,
    }
}

#[test]
fn authenticated_always_shows_content() {
    let states = [
        nav_state(Some("/meeting-bot"), true),
        nav_state(None, false),
        nav_state(Some("/signin"), true),
    ];
    for nav in states {
        assert_eq!(
            evaluate(&authenticated(), &nav, "/signin"),
            GuardAction::ShowContent
        );
    }
}

#[test]
fn loading_shows_loading_and_never_redirects() {
    let action = evaluate(
        &AuthStatus::Loading,
        &nav_state(Some("/meeting-bot"), true),
        "/signin",
    );
    assert_eq!(action, GuardAction::ShowLoading);
}

#[test]
fn unauthenticated_prefers_primary_when_ready() {
    let action = evaluate(
        &AuthStatus::Unauthenticated,
        &nav_state(Some("/meeting-bot"), true),
        "/signin",
    );
    assert_eq!(
        action,
        GuardAction::Redirect {
            target: "/signin".to_string(),
            via: Mechanism::Primary,
        }
    );
}

#[test]
fn unauthenticated_without_ready_router_selects_fallback() {
    let action = evaluate(
        &AuthStatus::Unauthenticated,
        &nav_state(Some("/dashboard"), false),
        "/signin",
    );
    assert_eq!(
        action,
        GuardAction::Redirect {
            target: "/signin".to_string(),
            via: Mechanism::Fallback,
        }
    );
}

#[test]
fn already_at_target_is_a_no_op() {
    let action = evaluate(
        &AuthStatus::Unauthenticated,
        &nav_state(Some("/signin"), true),
        "/signin",
    );
    assert_eq!(action, GuardAction::ShowNothing);
}

#[test]
fn unknown_location_still_redirects() {
    let action = evaluate(&AuthStatus::Unauthenticated, &nav_state(None, true), "/signin");
    assert!(matches!(
        action,
        GuardAction::Redirect {
            via: Mechanism::Primary,
            ..
        }
    ));
}

#[tokio::test]
async fn ready_primary_is_called_exactly_once() {
    let primary = FakeNavigator::new("router", true, Outcome::Succeed, Some("/meeting-bot"));
    let fallback = FakeNavigator::new("location", true, Outcome::Succeed, None);
    let primary_calls = primary.calls();
    let fallback_calls = fallback.calls();

    run_redirect(
        vec![Rc::new(primary), Rc::new(fallback)],
        "/signin".to_string(),
    )
    .await;

    assert_eq!(*primary_calls.borrow(), vec!["/signin".to_string()]);
    assert!(fallback_calls.borrow().is_empty());
}

#[tokio::test]
async fn primary_rejection_triggers_one_fallback_attempt() {
    let primary = FakeNavigator::new("router", true, Outcome::Reject, Some("/meeting-bot"));
    let fallback = FakeNavigator::new("location", true, Outcome::Succeed, Some("/meeting-bot"));
    let primary_calls = primary.calls();
    let fallback_calls = fallback.calls();

    run_redirect(
        vec![Rc::new(primary), Rc::new(fallback)],
        "/signin".to_string(),
    )
    .await;

    assert_eq!(primary_calls.borrow().len(), 1);
    assert_eq!(*fallback_calls.borrow(), vec!["/signin".to_string()]);
}

#[tokio::test]
async fn fallback_is_skipped_when_location_already_moved() {
    // The primary rejects, but something else lands us on the target first
    let primary = FakeNavigator::new("router", true, Outcome::Reject, Some("/meeting-bot"));
    let fallback = FakeNavigator::new("location", true, Outcome::Succeed, Some("/signin"));
    let fallback_calls = fallback.calls();

    run_redirect(
        vec![Rc::new(primary), Rc::new(fallback)],
        "/signin".to_string(),
    )
    .await;

    assert!(fallback_calls.borrow().is_empty());
}

#[tokio::test]
async fn unready_primary_is_never_called() {
    let primary = FakeNavigator::new("router", false, Outcome::Succeed, Some("/dashboard"));
    let fallback = FakeNavigator::new("location", true, Outcome::Succeed, None);
    let primary_calls = primary.calls();
    let fallback_calls = fallback.calls();

    run_redirect(
        vec![Rc::new(primary), Rc::new(fallback)],
        "/signin".to_string(),
    )
    .await;

    assert!(primary_calls.borrow().is_empty());
    assert_eq!(*fallback_calls.borrow(), vec!["/signin".to_string()]);
}

#[tokio::test]
async fn exhausted_chain_is_swallowed() {
    let primary = FakeNavigator::new("router", true, Outcome::Reject, Some("/meeting-bot"));
    let fallback = FakeNavigator::new("location", true, Outcome::Unavailable, None);
    let primary_calls = primary.calls();
    let fallback_calls = fallback.calls();

    run_redirect(
        vec![Rc::new(primary), Rc::new(fallback)],
        "/signin".to_string(),
    )
    .await;

    // Both attempts failed and neither escaped as a panic
    assert_eq!(primary_calls.borrow().len(), 1);
    assert_eq!(fallback_calls.borrow().len(), 1);
}

#[tokio::test]
async fn completed_navigation_makes_reruns_no_ops() {
    let primary = Rc::new(FakeNavigator::new(
        "router",
        true,
        Outcome::Succeed,
        Some("/meeting-bot"),
    ));
    let calls = primary.calls();

    run_redirect(
        vec![Rc::clone(&primary) as Rc<dyn Navigator>],
        "/signin".to_string(),
    )
    .await;
    run_redirect(vec![primary as Rc<dyn Navigator>], "/signin".to_string()).await;

    // The second run sees the updated location and issues nothing
    assert_eq!(calls.borrow().len(), 1);
}

#[test]
fn tracker_issues_once_per_target() {
    let mut tracker = RedirectTracker::default();
    assert!(tracker.should_issue("/signin"));
    assert!(!tracker.should_issue("/signin"));
    assert!(tracker.should_issue("/welcome"));
}

#[test]
fn tracker_reset_allows_reissue() {
    let mut tracker = RedirectTracker::default();
    assert!(tracker.should_issue("/signin"));
    tracker.reset();
    assert!(tracker.should_issue("/signin"));
}
