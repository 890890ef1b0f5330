//! Bot backend client for the chat widget.
//!
//! Consumes the backend's HTTP contract:
//! - `GET /theme/{bot}` for the theme record
//! - `HEAD /bot/{bot}/avatar` to probe for a custom avatar
//! - `POST /chat/{bot}` for chat replies
//!
//! The widget runtime talks to any [`WidgetBackend`]; [`HttpBackend`] is the
//! reqwest implementation.

pub mod endpoints;
pub mod http;

use async_trait::async_trait;
use chatwidget_common::BotIdentity;

pub use endpoints::Endpoints;
pub use http::HttpBackend;

/// A JSON theme record as returned by the backend.
pub type ThemeRecord = serde_json::Map<String, serde_json::Value>;

#[async_trait]
pub trait WidgetBackend: Send + Sync {
    /// URL layout of this backend.
    fn endpoints(&self) -> &Endpoints;

    /// Fetch the bot's theme record.
    async fn fetch_theme(&self, bot: &BotIdentity) -> Result<ThemeRecord, BackendError>;

    /// Check whether a custom avatar exists. Returns the URL that was probed.
    async fn probe_avatar(&self, bot: &BotIdentity) -> Result<String, BackendError>;

    /// Send one user query and wait for the bot's reply.
    async fn send_chat(
        &self,
        bot: &BotIdentity,
        request: &ChatRequest,
    ) -> Result<ChatReply, BackendError>;
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ChatRequest {
    pub query: String,
    pub session_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ChatReply {
    pub response: String,
}

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// The request never completed.
    #[error("Network error: {0}")]
    Transport(String),
    /// The server answered with a non-success status.
    #[error("HTTP {0}")]
    Status(u16),
    /// The server answered, but the body was not what we expected.
    #[error("Parse error: {0}")]
    Parse(String),
}

impl BackendError {
    /// `true` when the server never answered, as opposed to answering badly.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

impl From<BackendError> for chatwidget_common::WidgetError {
    fn from(err: BackendError) -> Self {
        Self::Backend(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_request_wire_shape() {
        let req = ChatRequest {
            query: "Hello".into(),
            session_id: "session_1_abc".into(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"query": "Hello", "session_id": "session_1_abc"})
        );
    }

    #[test]
    fn chat_reply_requires_response_field() {
        let reply: ChatReply = serde_json::from_str(r#"{"response":"Hi!"}"#).unwrap();
        assert_eq!(reply.response, "Hi!");
        assert!(serde_json::from_str::<ChatReply>(r#"{"error":"nope"}"#).is_err());
    }

    #[test]
    fn error_classification() {
        assert!(BackendError::Transport("refused".into()).is_transport());
        assert!(!BackendError::Status(500).is_transport());
        assert!(!BackendError::Parse("eof".into()).is_transport());
    }

    #[test]
    fn error_display() {
        assert_eq!(BackendError::Status(404).to_string(), "HTTP 404");
        assert_eq!(
            BackendError::Transport("refused".into()).to_string(),
            "Network error: refused"
        );
    }
}
