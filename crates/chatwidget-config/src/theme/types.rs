//! Theme record and key definitions.

use serde::{Deserialize, Serialize};

/// The fixed set of style keys a theme carries.
///
/// `name()` is the key as it appears in the backend's JSON theme record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeKey {
    BackgroundColor,
    TextColor,
    ButtonColor,
    FontFamily,
    InputBackgroundColor,
    InputBorderColor,
    InputTextColor,
    UserMessageBackgroundColor,
    BotMessageBackgroundColor,
}

impl ThemeKey {
    pub const ALL: [ThemeKey; 9] = [
        ThemeKey::BackgroundColor,
        ThemeKey::TextColor,
        ThemeKey::ButtonColor,
        ThemeKey::FontFamily,
        ThemeKey::InputBackgroundColor,
        ThemeKey::InputBorderColor,
        ThemeKey::InputTextColor,
        ThemeKey::UserMessageBackgroundColor,
        ThemeKey::BotMessageBackgroundColor,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::BackgroundColor => "backgroundColor",
            Self::TextColor => "textColor",
            Self::ButtonColor => "buttonColor",
            Self::FontFamily => "fontFamily",
            Self::InputBackgroundColor => "inputBackgroundColor",
            Self::InputBorderColor => "inputBorderColor",
            Self::InputTextColor => "inputTextColor",
            Self::UserMessageBackgroundColor => "userMessageBackgroundColor",
            Self::BotMessageBackgroundColor => "botMessageBackgroundColor",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.name() == name)
    }
}

/// A fully populated widget theme.
///
/// Every key always holds a value; fetched records only ever override.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Theme {
    pub background_color: String,
    pub text_color: String,
    pub button_color: String,
    pub font_family: String,
    pub input_background_color: String,
    pub input_border_color: String,
    pub input_text_color: String,
    pub user_message_background_color: String,
    pub bot_message_background_color: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background_color: "white".into(),
            text_color: "#000000".into(),
            button_color: "#4a90e2".into(),
            font_family: "Arial, sans-serif".into(),
            input_background_color: "#fff".into(),
            input_border_color: "#ccc".into(),
            input_text_color: "#000000".into(),
            user_message_background_color: "#4a90e2".into(),
            bot_message_background_color: "#f1f0f0".into(),
        }
    }
}

impl Theme {
    pub fn get(&self, key: ThemeKey) -> &str {
        match key {
            ThemeKey::BackgroundColor => &self.background_color,
            ThemeKey::TextColor => &self.text_color,
            ThemeKey::ButtonColor => &self.button_color,
            ThemeKey::FontFamily => &self.font_family,
            ThemeKey::InputBackgroundColor => &self.input_background_color,
            ThemeKey::InputBorderColor => &self.input_border_color,
            ThemeKey::InputTextColor => &self.input_text_color,
            ThemeKey::UserMessageBackgroundColor => &self.user_message_background_color,
            ThemeKey::BotMessageBackgroundColor => &self.bot_message_background_color,
        }
    }

    pub fn set(&mut self, key: ThemeKey, value: impl Into<String>) {
        let slot = match key {
            ThemeKey::BackgroundColor => &mut self.background_color,
            ThemeKey::TextColor => &mut self.text_color,
            ThemeKey::ButtonColor => &mut self.button_color,
            ThemeKey::FontFamily => &mut self.font_family,
            ThemeKey::InputBackgroundColor => &mut self.input_background_color,
            ThemeKey::InputBorderColor => &mut self.input_border_color,
            ThemeKey::InputTextColor => &mut self.input_text_color,
            ThemeKey::UserMessageBackgroundColor => &mut self.user_message_background_color,
            ThemeKey::BotMessageBackgroundColor => &mut self.bot_message_background_color,
        };
        *slot = value.into();
    }

    /// Color for input text and its placeholder.
    ///
    /// An empty `inputTextColor` falls back to the general text color.
    pub fn input_text_color(&self) -> &str {
        if self.input_text_color.is_empty() {
            &self.text_color
        } else {
            &self.input_text_color
        }
    }

    /// Color for the typing placeholder text.
    pub fn typing_text_color(&self) -> &str {
        if self.text_color.is_empty() {
            "#666"
        } else {
            &self.text_color
        }
    }
}

/// Optional theme overrides from the local config file.
///
/// All fields are optional; only present fields override the defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeOverrides {
    pub background_color: Option<String>,
    pub text_color: Option<String>,
    pub button_color: Option<String>,
    pub font_family: Option<String>,
    pub input_background_color: Option<String>,
    pub input_border_color: Option<String>,
    pub input_text_color: Option<String>,
    pub user_message_background_color: Option<String>,
    pub bot_message_background_color: Option<String>,
}

impl ThemeOverrides {
    pub fn get(&self, key: ThemeKey) -> Option<&str> {
        let value = match key {
            ThemeKey::BackgroundColor => &self.background_color,
            ThemeKey::TextColor => &self.text_color,
            ThemeKey::ButtonColor => &self.button_color,
            ThemeKey::FontFamily => &self.font_family,
            ThemeKey::InputBackgroundColor => &self.input_background_color,
            ThemeKey::InputBorderColor => &self.input_border_color,
            ThemeKey::InputTextColor => &self.input_text_color,
            ThemeKey::UserMessageBackgroundColor => &self.user_message_background_color,
            ThemeKey::BotMessageBackgroundColor => &self.bot_message_background_color,
        };
        value.as_deref()
    }
}
