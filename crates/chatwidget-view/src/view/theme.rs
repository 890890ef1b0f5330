//! Theme application over every existing element.

use chatwidget_config::Theme;
use tracing::{debug, warn};

use crate::styles::{BOT_CONTAINER_CLASS, BOT_MESSAGE_CLASS, TYPING_CLASS, USER_MESSAGE_CLASS};
use crate::theme_bridge::{
    generate_inherited_placeholder_css, generate_placeholder_css, input_class,
    placeholder_style_id,
};
use crate::ViewError;

use super::WidgetView;

impl WidgetView {
    /// Write `theme` onto every styled element that exists right now,
    /// including messages rendered before the theme arrived.
    ///
    /// Only ever overwrites theme-derived properties, so repeated calls with
    /// the same theme leave the tree unchanged. Returns `Ok(false)` before
    /// `build`.
    pub fn apply_theme(&mut self, theme: &Theme) -> Result<bool, ViewError> {
        let Some(els) = self.elements else {
            debug!(bot = %self.bot, "apply_theme before build, skipped");
            return Ok(false);
        };

        let font = theme.font_family.as_str();
        let text = theme.text_color.as_str();
        let input_text = theme.input_text_color();

        self.tree.set_styles(
            els.toggle_button,
            &[
                ("background-color", theme.button_color.as_str()),
                ("font-family", font),
                ("color", text),
            ],
        )?;

        self.tree.set_styles(
            els.panel,
            &[
                ("background-color", theme.background_color.as_str()),
                ("color", text),
                ("font-family", font),
            ],
        )?;

        self.tree.set_styles(
            els.input,
            &[
                ("font-family", font),
                ("color", input_text),
                ("background-color", theme.input_background_color.as_str()),
                ("border-color", theme.input_border_color.as_str()),
            ],
        )?;
        self.apply_placeholder_color(input_text);

        self.tree.set_styles(
            els.send_button,
            &[
                ("background-color", theme.button_color.as_str()),
                ("font-family", font),
                ("color", text),
            ],
        )?;

        self.tree
            .set_styles(els.message_list, &[("font-family", font), ("color", text)])?;

        for bubble in self.tree.query_class(els.message_list, USER_MESSAGE_CLASS) {
            self.tree.set_styles(
                bubble,
                &[
                    ("background-color", theme.user_message_background_color.as_str()),
                    ("color", text),
                ],
            )?;
        }

        for container in self.tree.query_class(els.message_list, BOT_CONTAINER_CLASS) {
            if let Some(&bubble) = self.tree.query_class(container, BOT_MESSAGE_CLASS).first() {
                self.tree.set_styles(
                    bubble,
                    &[
                        ("background-color", theme.bot_message_background_color.as_str()),
                        ("color", text),
                    ],
                )?;
            }
        }

        for indicator in self.tree.query_class(els.message_list, TYPING_CLASS) {
            self.tree.set_styles(
                indicator,
                &[
                    ("background-color", theme.bot_message_background_color.as_str()),
                    ("color", theme.typing_text_color()),
                ],
            )?;
        }

        debug!(bot = %self.bot, ?theme, "theme applied");
        Ok(true)
    }

    /// Point the scoped placeholder rule at `color`.
    ///
    /// A color the sanitizer refuses is not written into the rule; the
    /// placeholder inherits from the input instead, whose inline color is
    /// already `color`.
    fn apply_placeholder_color(&mut self, color: &str) {
        let class = input_class(self.bot.as_str());
        let css = match generate_placeholder_css(&class, color) {
            Ok(css) => css,
            Err(e) => {
                warn!(color, error = %e, "placeholder color rejected, inheriting from input");
                generate_inherited_placeholder_css(&class)
            }
        };
        self.tree
            .set_stylesheet(placeholder_style_id(self.bot.as_str()), css);
    }
}
