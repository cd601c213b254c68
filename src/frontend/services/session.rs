//! Session persistence for the signed-in account.

use std::path::PathBuf;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::utils::paths::get_dashboard_dir;

/// How long a stored session stays valid.
const SESSION_TTL_DAYS: i64 = 30;

/// The signed-in user as the rest of the app sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl SessionConfig {
    /// Creates a fresh session for the given normalized email.
    pub fn new(email: String) -> Self {
        Self {
            email,
            created_at: Utc::now(),
        }
    }

    /// Lowercases and trims an email, rejecting obviously broken shapes.
    pub fn normalize_email(email: &str) -> Option<String> {
        let email = email.trim().to_lowercase();
        let (local, domain) = email.split_once('@')?;
        if local.is_empty() || domain.is_empty() || domain.contains('@') {
            return None;
        }
        if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
            return None;
        }
        Some(email)
    }

    /// Account view of this session.
    pub fn account(&self) -> Account {
        Account {
            email: self.email.clone(),
        }
    }

    /// Whether the session has outlived its TTL.
    pub fn is_expired(&self) -> bool {
        Utc::now() - self.created_at > Duration::days(SESSION_TTL_DAYS)
    }

    /// Gets the path to the session file.
    pub fn get_session_path() -> PathBuf {
        get_dashboard_dir()
            .unwrap_or_else(|_| PathBuf::from("CXFlowDashboard"))
            .join("session.json")
    }

    /// Saves the session to disk.
    pub async fn save(&self) -> anyhow::Result<()> {
        let path = Self::get_session_path();

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).await?;

        Ok(())
    }

    /// Loads the session from disk.
    pub async fn load() -> Option<Self> {
        let path = Self::get_session_path();

        if !path.exists() {
            return None;
        }

        match fs::read_to_string(path).await {
            Ok(json) => serde_json::from_str(&json).ok(),
            Err(_) => None,
        }
    }

    /// Deletes the session file.
    pub async fn delete() -> anyhow::Result<()> {
        let path = Self::get_session_path();
        if path.exists() {
            fs::remove_file(path).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
