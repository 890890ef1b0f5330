//! Backend endpoint configuration.

use serde::{Deserialize, Serialize};

/// Base URL of the bot backend when the config names none.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Where the widget's backend lives. Fixed for the widget's lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    pub base_url: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
        }
    }
}

impl BackendConfig {
    /// Base URL without a trailing slash, ready for path joining.
    pub fn normalized_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_base_url_strips_trailing_slashes() {
        let config = BackendConfig {
            base_url: "https://bots.example.com//".into(),
        };
        assert_eq!(config.normalized_base_url(), "https://bots.example.com");
    }
}
