//! Path utilities.

use std::path::PathBuf;

use anyhow::Result;

/// Name of the dashboard data directory.
const DASHBOARD_DIR: &str = "CXFlowDashboard";

/// Get the base data directory (`CXFlowDashboard`).
#[inline]
pub fn get_dashboard_dir() -> Result<PathBuf> {
    let base_dir = match std::env::consts::OS {
        "windows" => env_path("APPDATA")?,
        "macos" => env_path("HOME")?.join("Library/Application Support"),
        _ => match std::env::var_os("XDG_CONFIG_HOME") {
            Some(dir) => PathBuf::from(dir),
            None => env_path("HOME")?.join(".config"),
        },
    };
    Ok(base_dir.join(DASHBOARD_DIR))
}

fn env_path(var: &str) -> Result<PathBuf> {
    std::env::var_os(var)
        .map(PathBuf::from)
        .ok_or_else(|| anyhow::anyhow!("Could not determine {var} directory"))
}
