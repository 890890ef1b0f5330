//! HTTP backend struct and response classification.

use crate::{BackendError, ChatReply, Endpoints, ThemeRecord};

/// Talks to the bot backend over HTTP.
///
/// No request timeout is configured; a slow backend only delays its own reply.
pub struct HttpBackend {
    pub(crate) endpoints: Endpoints,
    pub(crate) http: reqwest::Client,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Result<Self, BackendError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("chatwidget/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| BackendError::Transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            endpoints: Endpoints::new(base_url),
            http,
        })
    }

    /// Turn a non-success status into [`BackendError::Status`].
    pub(crate) fn check_status(status: reqwest::StatusCode) -> Result<(), BackendError> {
        if status.is_success() {
            Ok(())
        } else {
            Err(BackendError::Status(status.as_u16()))
        }
    }
}

/// Parse a theme body. Anything but a JSON object is a parse failure.
pub(crate) fn parse_theme_record(body: &str) -> Result<ThemeRecord, BackendError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| BackendError::Parse(e.to_string()))?;
    match value {
        serde_json::Value::Object(map) => Ok(map),
        other => Err(BackendError::Parse(format!(
            "theme record is not an object: {other}"
        ))),
    }
}

/// Parse a chat body of the form `{"response": "..."}`.
pub(crate) fn parse_chat_reply(body: &str) -> Result<ChatReply, BackendError> {
    serde_json::from_str(body).map_err(|e| BackendError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_record_object_parses() {
        let record = parse_theme_record(r##"{"buttonColor":"#ff0000"}"##).unwrap();
        assert_eq!(record["buttonColor"], "#ff0000");
    }

    #[test]
    fn theme_record_array_is_parse_error() {
        let err = parse_theme_record("[1,2,3]").unwrap_err();
        assert!(matches!(err, BackendError::Parse(_)));
    }

    #[test]
    fn theme_record_garbage_is_parse_error() {
        let err = parse_theme_record("<html>oops</html>").unwrap_err();
        assert!(matches!(err, BackendError::Parse(_)));
    }

    #[test]
    fn chat_reply_parses() {
        let reply = parse_chat_reply(r#"{"response":"Hi!"}"#).unwrap();
        assert_eq!(reply.response, "Hi!");
    }

    #[test]
    fn chat_reply_with_non_string_response_is_parse_error() {
        let err = parse_chat_reply(r#"{"response":null}"#).unwrap_err();
        assert!(matches!(err, BackendError::Parse(_)));
    }

    #[test]
    fn status_classification() {
        assert!(HttpBackend::check_status(reqwest::StatusCode::OK).is_ok());
        assert!(HttpBackend::check_status(reqwest::StatusCode::NO_CONTENT).is_ok());
        assert!(matches!(
            HttpBackend::check_status(reqwest::StatusCode::INTERNAL_SERVER_ERROR),
            Err(BackendError::Status(500))
        ));
        assert!(matches!(
            HttpBackend::check_status(reqwest::StatusCode::NOT_FOUND),
            Err(BackendError::Status(404))
        ));
    }

    #[test]
    fn new_normalizes_base_url() {
        let backend = HttpBackend::new("http://127.0.0.1:5000/").unwrap();
        assert_eq!(backend.endpoints.base_url(), "http://127.0.0.1:5000");
    }
}
