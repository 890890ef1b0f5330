//! Sending user messages and rendering the bot's replies.

use tracing::{debug, warn};

use chatwidget_client::ChatRequest;
use chatwidget_common::{Message, Result, Role, WidgetEvent};
use chatwidget_view::ViewError;

use super::ChatWidget;

/// Shown when the server answered but not with a usable reply.
pub const SERVER_ERROR_REPLY: &str = "Error: Failed to get response from server.";
/// Shown when the request never reached the server.
pub const TRANSPORT_ERROR_REPLY: &str = "Error: Could not connect to server.";

/// How a send settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// Blank input, or no view to render into. Nothing was sent.
    Ignored,
    /// The bot's reply was rendered.
    Replied,
    /// Non-success status or unreadable body.
    ServerError,
    /// Connection failure.
    TransportError,
}

impl ChatWidget {
    /// Send `text` to the bot and render the exchange.
    ///
    /// The user message and typing indicator appear before the request goes
    /// out; the indicator is removed when it settles, whichever way. Backend
    /// failures become a fixed bot message, never an error. Overlapping sends
    /// run independently but share the one typing indicator, so the first
    /// reply to arrive hides it for all of them.
    pub async fn send_message(&self, text: &str) -> Result<SendOutcome> {
        let query = text.trim();
        if query.is_empty() {
            debug!(widget = %self.id, "empty message ignored");
            return Ok(SendOutcome::Ignored);
        }
        if !self.view_state().is_created() {
            debug!(widget = %self.id, "send before view exists, ignored");
            return Ok(SendOutcome::Ignored);
        }

        self.with_state(|s| -> std::result::Result<(), ViewError> {
            s.view.append_message(&Message::user(query), s.theme.theme())?;
            s.view.clear_input()?;
            s.view.show_typing(s.theme.theme(), s.avatar.current_url())?;
            Ok(())
        })?;
        self.emit(WidgetEvent::MessageAppended {
            role: Role::User,
            text: query.to_string(),
        });

        let request = ChatRequest {
            query: query.to_string(),
            session_id: self.session_id.to_string(),
        };
        let result = self.backend.send_chat(&self.bot, &request).await;

        let (reply, outcome) = match result {
            Ok(reply) => (reply.response, SendOutcome::Replied),
            Err(e) if e.is_transport() => {
                warn!(widget = %self.id, error = %e, "chat request failed");
                (TRANSPORT_ERROR_REPLY.to_string(), SendOutcome::TransportError)
            }
            Err(e) => {
                warn!(widget = %self.id, error = %e, "chat request rejected");
                (SERVER_ERROR_REPLY.to_string(), SendOutcome::ServerError)
            }
        };

        self.with_state(|s| -> std::result::Result<(), ViewError> {
            s.view.hide_typing()?;
            let message = Message::bot(reply.as_str(), s.avatar.current_url());
            s.view.append_message(&message, s.theme.theme())?;
            Ok(())
        })?;
        debug!(widget = %self.id, ?outcome, "chat exchange settled");
        self.emit(WidgetEvent::MessageAppended {
            role: Role::Bot,
            text: reply,
        });

        Ok(outcome)
    }

    /// Send whatever is in the input field: the send button and Enter path.
    pub async fn submit_input(&self) -> Result<SendOutcome> {
        let text = self.input_value();
        self.send_message(&text).await
    }

    /// Replace the input field's text, as typing would.
    pub fn set_input(&self, text: impl Into<String>) -> Result<()> {
        let text = text.into();
        self.with_state(|s| s.view.set_input_value(text))?;
        Ok(())
    }
}
