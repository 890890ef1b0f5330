//! One-time construction of the widget elements.

use chatwidget_common::ViewState;
use chatwidget_config::Theme;
use tracing::{debug, info};

use crate::styles;
use crate::theme_bridge::input_class;
use crate::tree::Tag;
use crate::ViewError;

use super::{Elements, WidgetView};

impl WidgetView {
    /// Build the toggle button, the hidden panel and its contents.
    ///
    /// Runs at most once; later calls return `Ok(false)` and touch nothing.
    /// Initial colors come from `theme`, the same way a later `apply_theme`
    /// would write them.
    pub fn build(&mut self, theme: &Theme) -> Result<bool, ViewError> {
        if self.state.is_created() {
            debug!(bot = %self.bot, "view already built");
            return Ok(false);
        }

        let body = self.tree.body();
        let tree = &mut self.tree;

        let toggle_button = tree.create(Tag::Button);
        tree.set_text(toggle_button, self.labels.button.clone())?;
        tree.set_styles(toggle_button, styles::TOGGLE_BUTTON)?;
        tree.append_child(body, toggle_button)?;

        let panel = tree.create(Tag::Div);
        tree.set_styles(panel, styles::PANEL)?;
        tree.append_child(body, panel)?;

        let message_list = tree.create(Tag::Div);
        tree.set_styles(message_list, styles::MESSAGE_LIST)?;
        tree.append_child(panel, message_list)?;

        let input_row = tree.create(Tag::Div);
        tree.set_styles(input_row, styles::INPUT_ROW)?;
        tree.append_child(panel, input_row)?;

        let input = tree.create(Tag::Input);
        tree.set_attr(input, "type", "text")?;
        tree.set_attr(input, "placeholder", self.labels.placeholder.clone())?;
        tree.set_attr(input, "value", "")?;
        tree.add_class(input, input_class(self.bot.as_str()))?;
        tree.set_styles(input, styles::INPUT)?;
        tree.append_child(input_row, input)?;

        let send_button = tree.create(Tag::Button);
        tree.set_text(send_button, self.labels.send.clone())?;
        tree.set_styles(send_button, styles::SEND_BUTTON)?;
        tree.append_child(input_row, send_button)?;

        self.elements = Some(Elements {
            toggle_button,
            panel,
            message_list,
            input_row,
            input,
            send_button,
        });
        self.state = ViewState::CreatedClosed;

        self.apply_theme(theme)?;

        info!(bot = %self.bot, nodes = self.tree.len(), "widget view built");
        Ok(true)
    }
}
