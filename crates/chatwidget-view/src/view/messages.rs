//! Message bubbles, the typing indicator and avatar images.

use chatwidget_common::{Message, Role};
use chatwidget_config::Theme;
use tracing::debug;

use crate::styles::{
    self, AVATAR_CLASS, BOT_CONTAINER_CLASS, BOT_MESSAGE_CLASS, TYPING_CLASS, USER_MESSAGE_CLASS,
};
use crate::tree::{NodeId, Tag};
use crate::ViewError;

use super::WidgetView;

/// What happened to an avatar image after it failed to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvatarFallback {
    /// The image now points at the default avatar.
    SwitchedToDefault,
    /// The default avatar failed too; the image is hidden but keeps its slot.
    Hidden,
    /// Already hidden, nothing left to try.
    Exhausted,
}

impl WidgetView {
    /// Render one conversation entry at the end of the message list and
    /// scroll to it. Returns the entry's outermost node.
    pub fn append_message(&mut self, message: &Message, theme: &Theme) -> Result<NodeId, ViewError> {
        let els = self.built()?;

        let node = match message.role {
            Role::User => {
                let bubble = self.tree.create(Tag::Div);
                self.tree.set_text(bubble, message.text.clone())?;
                self.tree.add_class(bubble, USER_MESSAGE_CLASS)?;
                self.tree.set_styles(bubble, styles::BUBBLE)?;
                self.tree.set_styles(bubble, styles::USER_BUBBLE)?;
                self.tree.set_styles(
                    bubble,
                    &[
                        ("background-color", theme.user_message_background_color.as_str()),
                        ("color", theme.text_color.as_str()),
                    ],
                )?;
                bubble
            }
            Role::Bot => {
                let container = self.tree.create(Tag::Div);
                self.tree.add_class(container, BOT_CONTAINER_CLASS)?;
                self.tree.set_styles(container, styles::BOT_CONTAINER)?;

                let avatar_url = message
                    .avatar_url
                    .clone()
                    .unwrap_or_else(|| self.default_avatar_url.clone());
                let avatar = self.create_avatar(&avatar_url)?;
                self.tree.append_child(container, avatar)?;

                let bubble = self.tree.create(Tag::Div);
                self.tree.set_text(bubble, message.text.clone())?;
                self.tree.add_class(bubble, BOT_MESSAGE_CLASS)?;
                self.tree.set_styles(bubble, styles::BUBBLE)?;
                self.tree.set_styles(bubble, styles::BOT_BUBBLE)?;
                self.tree.set_styles(
                    bubble,
                    &[
                        ("background-color", theme.bot_message_background_color.as_str()),
                        ("color", theme.text_color.as_str()),
                    ],
                )?;
                self.tree.append_child(container, bubble)?;
                container
            }
        };

        self.tree.append_child(els.message_list, node)?;
        self.tree.scroll_to_end(els.message_list)?;
        debug!(role = ?message.role, %node, "message appended");
        Ok(node)
    }

    /// Show the typing indicator. No-op if one is already visible.
    ///
    /// Returns whether a new indicator was added.
    pub fn show_typing(&mut self, theme: &Theme, avatar_url: &str) -> Result<bool, ViewError> {
        let els = self.built()?;
        if self.typing.is_some() {
            return Ok(false);
        }

        let container = self.tree.create(Tag::Div);
        self.tree.set_styles(container, styles::BOT_CONTAINER)?;

        let avatar = self.create_avatar(avatar_url)?;
        self.tree.append_child(container, avatar)?;

        let indicator = self.tree.create(Tag::Div);
        self.tree.set_text(indicator, self.labels.typing.clone())?;
        self.tree.add_class(indicator, TYPING_CLASS)?;
        self.tree.set_styles(indicator, styles::TYPING_TEXT)?;
        self.tree.set_styles(
            indicator,
            &[
                ("background-color", theme.bot_message_background_color.as_str()),
                ("color", theme.typing_text_color()),
            ],
        )?;
        self.tree.append_child(container, indicator)?;

        self.tree.append_child(els.message_list, container)?;
        self.tree.scroll_to_end(els.message_list)?;
        self.typing = Some(container);
        Ok(true)
    }

    /// Remove the typing indicator with its avatar. Safe when none is shown.
    ///
    /// Returns whether an indicator was removed.
    pub fn hide_typing(&mut self) -> Result<bool, ViewError> {
        let Some(container) = self.typing.take() else {
            return Ok(false);
        };
        if self.tree.contains(container) {
            self.tree.remove(container)?;
        }
        Ok(true)
    }

    /// Walk the fallback chain for an avatar image that failed to load.
    ///
    /// First failure switches to the default avatar; a failing default hides
    /// the image. Never loops.
    pub fn avatar_load_failed(&mut self, image: NodeId) -> Result<AvatarFallback, ViewError> {
        if !self.tree.contains(image) {
            return Err(ViewError::UnknownNode(image));
        }
        if !self.tree.has_class(image, AVATAR_CLASS) {
            return Err(ViewError::NotAnAvatar(image));
        }

        if self.tree.style(image, "display") == Some("none") {
            return Ok(AvatarFallback::Exhausted);
        }

        if self.tree.attr(image, "src") != Some(self.default_avatar_url.as_str()) {
            let default = self.default_avatar_url.clone();
            self.tree.set_attr(image, "src", default)?;
            debug!(%image, "avatar failed to load, using default");
            Ok(AvatarFallback::SwitchedToDefault)
        } else {
            self.tree.set_style(image, "display", "none")?;
            debug!(%image, "default avatar failed to load, hiding");
            Ok(AvatarFallback::Hidden)
        }
    }

    fn create_avatar(&mut self, src: &str) -> Result<NodeId, ViewError> {
        let avatar = self.tree.create(Tag::Img);
        self.tree.set_attr(avatar, "src", src)?;
        self.tree.add_class(avatar, AVATAR_CLASS)?;
        self.tree.set_styles(avatar, styles::AVATAR)?;
        Ok(avatar)
    }
}
