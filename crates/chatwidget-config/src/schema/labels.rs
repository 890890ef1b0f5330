//! User-visible widget text.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelsConfig {
    /// Text on the floating toggle button.
    pub button: String,
    pub placeholder: String,
    pub send: String,
    /// Placeholder text shown while awaiting a reply.
    pub typing: String,
}

impl Default for LabelsConfig {
    fn default() -> Self {
        Self {
            button: "Chat with AI".into(),
            placeholder: "Type your message...".into(),
            send: "Send".into(),
            typing: "Typing...".into(),
        }
    }
}
