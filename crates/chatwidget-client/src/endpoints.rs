//! Backend URL layout.

use chatwidget_common::BotIdentity;

const DEFAULT_AVATAR_PATH: &str = "/static/bot.png";

/// Builds every URL the widget requests from one fixed base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base_url: String,
}

impl Endpoints {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn theme_url(&self, bot: &BotIdentity, cachebust: i64) -> String {
        format!("{}/theme/{}?_={cachebust}", self.base_url, encode(bot))
    }

    pub fn avatar_url(&self, bot: &BotIdentity, cachebust: i64) -> String {
        format!("{}/bot/{}/avatar?_={cachebust}", self.base_url, encode(bot))
    }

    pub fn chat_url(&self, bot: &BotIdentity) -> String {
        format!("{}/chat/{}", self.base_url, encode(bot))
    }

    /// Static fallback image, used whenever no custom avatar is available.
    pub fn default_avatar_url(&self) -> String {
        format!("{}{DEFAULT_AVATAR_PATH}", self.base_url)
    }
}

/// Cache-busting token: current unix time in milliseconds.
pub fn cachebust() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

fn encode(bot: &BotIdentity) -> String {
    urlencoding::encode(bot.as_str()).into_owned()
}
