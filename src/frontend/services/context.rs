//! Authentication context and state management.

use dioxus::prelude::*;

use super::guard::AuthStatus;
use super::session::SessionConfig;

/// App-wide authentication state, provided from the root component.
#[derive(Clone, Copy)]
pub struct AuthState {
    pub status: Signal<AuthStatus>,
}

impl AuthState {
    /// Resolves the stored session into a definite authentication status.
    pub async fn load_saved_session(&mut self) {
        match SessionConfig::load().await {
            Some(session) if !session.is_expired() => {
                self.status.set(AuthStatus::Authenticated(session.account()));
            }
            Some(_) => {
                // Stale session, drop it
                if let Err(e) = SessionConfig::delete().await {
                    log::warn!("Failed to delete expired session: {e}");
                }
                self.status.set(AuthStatus::Unauthenticated);
            }
            None => self.status.set(AuthStatus::Unauthenticated),
        }
    }

    /// Signs in with an email and persists the session.
    pub async fn sign_in(&mut self, email: String) -> Result<(), String> {
        let Some(email) = SessionConfig::normalize_email(&email) else {
            return Err("Enter a valid work email address".to_string());
        };

        let session = SessionConfig::new(email);

        if let Err(e) = session.save().await {
            return Err(format!("Failed to save session: {e}"));
        }

        self.status.set(AuthStatus::Authenticated(session.account()));

        Ok(())
    }

    /// Signs out the current user.
    pub async fn sign_out(&mut self) {
        self.status.set(AuthStatus::Unauthenticated);
        if let Err(e) = SessionConfig::delete().await {
            log::warn!("Failed to delete session file: {e}");
        }
    }

    /// Email of the signed-in account, if any.
    pub fn account_email(&self) -> Option<String> {
        match &*self.status.read() {
            AuthStatus::Authenticated(account) => Some(account.email.clone()),
            _ => None,
        }
    }
}
