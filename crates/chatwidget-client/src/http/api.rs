//! WidgetBackend trait implementation for HttpBackend.

use async_trait::async_trait;
use chatwidget_common::BotIdentity;
use tracing::debug;

use crate::endpoints::cachebust;
use crate::{BackendError, ChatReply, ChatRequest, Endpoints, ThemeRecord, WidgetBackend};

use super::client::{parse_chat_reply, parse_theme_record, HttpBackend};

#[async_trait]
impl WidgetBackend for HttpBackend {
    fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    async fn fetch_theme(&self, bot: &BotIdentity) -> Result<ThemeRecord, BackendError> {
        let url = self.endpoints.theme_url(bot, cachebust());
        debug!(%url, "theme request");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;

        Self::check_status(response.status())?;

        let body = response
            .text()
            .await
            .map_err(|e| BackendError::Parse(e.to_string()))?;
        parse_theme_record(&body)
    }

    async fn probe_avatar(&self, bot: &BotIdentity) -> Result<String, BackendError> {
        let url = self.endpoints.avatar_url(bot, cachebust());
        debug!(%url, "avatar probe");

        let response = self
            .http
            .head(&url)
            .send()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;

        Self::check_status(response.status())?;
        Ok(url)
    }

    async fn send_chat(
        &self,
        bot: &BotIdentity,
        request: &ChatRequest,
    ) -> Result<ChatReply, BackendError> {
        let url = self.endpoints.chat_url(bot);
        debug!(%url, session = %request.session_id, "chat request");

        let response = self
            .http
            .post(&url)
            .header("content-type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;

        Self::check_status(response.status())?;

        let body = response
            .text()
            .await
            .map_err(|e| BackendError::Parse(e.to_string()))?;
        parse_chat_reply(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Nothing listens on port 1, so every request fails before a response.
    fn unreachable_backend() -> HttpBackend {
        HttpBackend::new("http://127.0.0.1:1").unwrap()
    }

    #[tokio::test]
    async fn unreachable_chat_is_transport_error() {
        let backend = unreachable_backend();
        let request = ChatRequest {
            query: "Hello".into(),
            session_id: "session_0_test".into(),
        };
        let err = backend
            .send_chat(&BotIdentity::default(), &request)
            .await
            .unwrap_err();
        assert!(err.is_transport());
    }

    #[tokio::test]
    async fn unreachable_theme_is_transport_error() {
        let err = unreachable_backend()
            .fetch_theme(&BotIdentity::default())
            .await
            .unwrap_err();
        assert!(err.is_transport());
    }

    #[tokio::test]
    async fn unreachable_avatar_probe_is_transport_error() {
        let err = unreachable_backend()
            .probe_avatar(&BotIdentity::default())
            .await
            .unwrap_err();
        assert!(err.is_transport());
    }
}
