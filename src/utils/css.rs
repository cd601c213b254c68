//! CSS loading and caching utilities.

use std::collections::HashMap;
use std::sync::OnceLock;

static STYLE_CACHE: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();

pub struct StyleLoader;

impl StyleLoader {
    fn get_all_styles() -> HashMap<&'static str, &'static str> {
        let mut styles = HashMap::new();
        styles.insert(
            "base",
            include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/styles/base.css")),
        );
        styles.insert(
            "auth",
            include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/styles/auth.css")),
        );
        styles.insert(
            "dashboard",
            include_str!(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/assets/styles/dashboard.css"
            )),
        );
        styles
    }

    /// Returns the cached stylesheet for `name`, empty when unknown.
    pub fn get(name: &str) -> &'static str {
        STYLE_CACHE
            .get_or_init(Self::get_all_styles)
            .get(name)
            .copied()
            .unwrap_or("")
    }
}
