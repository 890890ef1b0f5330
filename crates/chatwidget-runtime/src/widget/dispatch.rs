//! User input routed to the widget.

use tracing::debug;

use chatwidget_common::{Result, WidgetEvent};
use chatwidget_view::NodeId;

use super::ChatWidget;

/// Key that submits the input field.
const SUBMIT_KEY: &str = "Enter";

/// Something the user did to the widget's elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    ToggleClicked,
    SendClicked,
    /// A key pressed while the input field has focus.
    KeyDown(String),
    /// The input field's text changed.
    InputChanged(String),
    /// An avatar image could not be loaded by the host.
    AvatarLoadFailed(NodeId),
}

impl ChatWidget {
    /// Route one user action. Actions that arrive before the view exists
    /// have no element to come from and are dropped.
    pub async fn dispatch(&self, action: UserAction) -> Result<()> {
        if !self.view_state().is_created() {
            debug!(widget = %self.id, ?action, "action before view exists, ignored");
            return Ok(());
        }

        match action {
            UserAction::ToggleClicked => {
                let open = self.with_state(|s| s.view.toggle())?;
                self.emit(WidgetEvent::PanelToggled { open });
            }
            UserAction::SendClicked => {
                self.submit_input().await?;
            }
            UserAction::KeyDown(key) => {
                if key == SUBMIT_KEY {
                    self.submit_input().await?;
                }
            }
            UserAction::InputChanged(text) => {
                self.set_input(text)?;
            }
            UserAction::AvatarLoadFailed(image) => {
                let fallback = self.with_state(|s| s.view.avatar_load_failed(image))?;
                debug!(widget = %self.id, %image, ?fallback, "avatar fallback");
            }
        }
        Ok(())
    }
}
