use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::types::Role;

/// State changes a widget instance announces to whoever is listening.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum WidgetEvent {
    ViewBuilt,
    ThemeUpdated,
    ThemeApplied,
    AvatarResolved { url: String, custom: bool },
    PanelToggled { open: bool },
    MessageAppended { role: Role, text: String },
    Ready,
    #[serde(other)]
    Unknown,
}

pub struct EventBus {
    sender: broadcast::Sender<WidgetEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<WidgetEvent> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: WidgetEvent) -> usize {
        self.sender.send(event).unwrap_or(0)
    }
}
