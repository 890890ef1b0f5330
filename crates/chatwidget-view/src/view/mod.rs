//! The widget view: owner of the render tree.
//!
//! All visual mutation goes through [`WidgetView`]. Construction happens once
//! (`build`), after which theme application, message rendering and the
//! typing indicator may run in any order and any number of times.

mod build;
mod messages;
mod theme;


use chatwidget_common::{BotIdentity, Role, ViewState};
use chatwidget_config::LabelsConfig;
use tracing::debug;

use crate::styles::{
    BOT_CONTAINER_CLASS, BOT_MESSAGE_CLASS, PANEL_HIDDEN, PANEL_SHOWN, USER_MESSAGE_CLASS,
};
use crate::tree::{NodeId, RenderTree};
use crate::ViewError;

pub use messages::AvatarFallback;

/// Node ids of the fixed widget elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Elements {
    pub toggle_button: NodeId,
    pub panel: NodeId,
    pub message_list: NodeId,
    pub input_row: NodeId,
    pub input: NodeId,
    pub send_button: NodeId,
}

pub struct WidgetView {
    tree: RenderTree,
    bot: BotIdentity,
    labels: LabelsConfig,
    default_avatar_url: String,
    state: ViewState,
    elements: Option<Elements>,
    /// Container of the typing indicator while one is shown.
    typing: Option<NodeId>,
}

impl WidgetView {
    pub fn new(
        bot: BotIdentity,
        labels: LabelsConfig,
        default_avatar_url: impl Into<String>,
    ) -> Self {
        Self {
            tree: RenderTree::new(),
            bot,
            labels,
            default_avatar_url: default_avatar_url.into(),
            state: ViewState::NotCreated,
            elements: None,
            typing: None,
        }
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn tree(&self) -> &RenderTree {
        &self.tree
    }

    pub fn elements(&self) -> Option<&Elements> {
        self.elements.as_ref()
    }

    pub fn default_avatar_url(&self) -> &str {
        &self.default_avatar_url
    }

    fn built(&self) -> Result<Elements, ViewError> {
        self.elements.ok_or(ViewError::NotBuilt)
    }

    /// Flip the panel between open and closed. Opening focuses the input.
    ///
    /// Returns whether the panel is now open.
    pub fn toggle(&mut self) -> Result<bool, ViewError> {
        let els = self.built()?;
        let open = !self.state.is_open();

        if open {
            self.tree.set_style(els.panel, "display", PANEL_SHOWN)?;
            self.tree.focus(els.input)?;
            self.state = ViewState::CreatedOpen;
        } else {
            self.tree.set_style(els.panel, "display", PANEL_HIDDEN)?;
            self.state = ViewState::CreatedClosed;
        }

        debug!(bot = %self.bot, open, "panel toggled");
        Ok(open)
    }

    /// Current text of the input field.
    pub fn input_value(&self) -> &str {
        self.elements
            .and_then(|els| self.tree.attr(els.input, "value"))
            .unwrap_or_default()
    }

    pub fn set_input_value(&mut self, text: impl Into<String>) -> Result<(), ViewError> {
        let els = self.built()?;
        self.tree.set_attr(els.input, "value", text)
    }

    pub fn clear_input(&mut self) -> Result<(), ViewError> {
        self.set_input_value(String::new())
    }

    pub fn typing_visible(&self) -> bool {
        self.typing.is_some()
    }

    /// Role and text of every rendered message, in display order.
    ///
    /// The typing indicator is not a message and is left out.
    pub fn transcript(&self) -> Vec<(Role, String)> {
        let Some(els) = self.elements else {
            return Vec::new();
        };

        let mut entries = Vec::new();
        for &child in self.tree.children(els.message_list) {
            if self.tree.has_class(child, USER_MESSAGE_CLASS) {
                let text = self.tree.text(child).unwrap_or_default();
                entries.push((Role::User, text.to_string()));
            } else if self.tree.has_class(child, BOT_CONTAINER_CLASS) {
                if let Some(&bubble) = self.tree.query_class(child, BOT_MESSAGE_CLASS).first() {
                    let text = self.tree.text(bubble).unwrap_or_default();
                    entries.push((Role::Bot, text.to_string()));
                }
            }
        }
        entries
    }
}
