use serde::{Deserialize, Serialize};

/// Who authored a conversation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Bot,
}

/// A rendered conversation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub text: String,
    /// Avatar URL chosen at render time. Only set for bot messages.
    pub avatar_url: Option<String>,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
            avatar_url: None,
        }
    }

    pub fn bot(text: impl Into<String>, avatar_url: impl Into<String>) -> Self {
        Self {
            role: Role::Bot,
            text: text.into(),
            avatar_url: Some(avatar_url.into()),
        }
    }
}

/// Lifecycle of the render tree and the popup panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ViewState {
    #[default]
    NotCreated,
    CreatedClosed,
    CreatedOpen,
}

impl ViewState {
    pub fn is_created(self) -> bool {
        !matches!(self, Self::NotCreated)
    }

    pub fn is_open(self) -> bool {
        matches!(self, Self::CreatedOpen)
    }
}
