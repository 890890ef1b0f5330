//! One embedded chat widget instance.
//!
//! `ChatWidget` owns everything a single embedding needs: bot identity,
//! session, theme, avatar, and the view. State sits behind a plain mutex that
//! is only ever locked between suspension points, so each mutation is atomic
//! with respect to the other in-flight operations of the same widget.
//! Several instances can live side by side; they share nothing.

mod conversation;
mod dispatch;
mod lifecycle;


use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use chatwidget_client::WidgetBackend;
use chatwidget_common::{
    new_correlation_id, BotIdentity, EventBus, Role, SessionId, ViewState, WidgetEvent,
};
use chatwidget_config::{resolve_bot_identity, Theme, WidgetConfig};
use chatwidget_view::{RenderTree, WidgetView};

use crate::avatar::AvatarResolver;
use crate::host::HostPage;
use crate::store::ThemeStore;

pub use conversation::{SendOutcome, SERVER_ERROR_REPLY, TRANSPORT_ERROR_REPLY};
pub use dispatch::UserAction;
pub use lifecycle::LifecyclePhase;

const EVENT_CAPACITY: usize = 64;

/// Mutable state of one widget, always accessed through [`ChatWidget::with_state`].
struct WidgetState {
    view: WidgetView,
    theme: ThemeStore,
    avatar: AvatarResolver,
    phase: LifecyclePhase,
    started: bool,
}

pub struct ChatWidget {
    /// Short tag that tells instances apart in logs.
    id: String,
    bot: BotIdentity,
    session_id: SessionId,
    host: HostPage,
    backend: Arc<dyn WidgetBackend>,
    events: EventBus,
    state: Mutex<WidgetState>,
}

impl ChatWidget {
    /// Create a widget for `host`. Nothing is built until [`ChatWidget::run`].
    pub fn new(host: HostPage, config: &WidgetConfig, backend: Arc<dyn WidgetBackend>) -> Self {
        let bot = resolve_bot_identity(host.script_src());
        let default_avatar_url = backend.endpoints().default_avatar_url();

        let state = WidgetState {
            view: WidgetView::new(bot.clone(), config.labels.clone(), default_avatar_url.clone()),
            theme: ThemeStore::new(config.initial_theme()),
            avatar: AvatarResolver::new(default_avatar_url),
            phase: LifecyclePhase::WaitingForDocument,
            started: false,
        };

        let widget = Self {
            id: new_correlation_id(),
            bot,
            session_id: SessionId::new(),
            host,
            backend,
            events: EventBus::new(EVENT_CAPACITY),
            state: Mutex::new(state),
        };
        debug!(
            widget = %widget.id,
            bot = %widget.bot,
            session = %widget.session_id,
            "chat widget created"
        );
        widget
    }

    pub fn bot(&self) -> &BotIdentity {
        &self.bot
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    /// Listen to this widget's events.
    pub fn subscribe(&self) -> broadcast::Receiver<WidgetEvent> {
        self.events.subscribe()
    }

    pub fn phase(&self) -> LifecyclePhase {
        self.with_state(|s| s.phase)
    }

    pub fn view_state(&self) -> ViewState {
        self.with_state(|s| s.view.state())
    }

    /// Current theme values.
    pub fn theme(&self) -> Theme {
        self.with_state(|s| s.theme.theme().clone())
    }

    pub fn theme_loaded(&self) -> bool {
        self.with_state(|s| s.theme.is_loaded())
    }

    /// Avatar URL used for bot messages rendered from now on.
    pub fn avatar_url(&self) -> String {
        self.with_state(|s| s.avatar.current_url().to_string())
    }

    pub fn transcript(&self) -> Vec<(Role, String)> {
        self.with_state(|s| s.view.transcript())
    }

    pub fn input_value(&self) -> String {
        self.with_state(|s| s.view.input_value().to_string())
    }

    pub fn typing_visible(&self) -> bool {
        self.with_state(|s| s.view.typing_visible())
    }

    /// Copy of the render tree as it stands right now.
    pub fn snapshot(&self) -> RenderTree {
        self.with_state(|s| s.view.tree().clone())
    }

    /// Read-only access to the view for inspection.
    pub fn with_view<R>(&self, f: impl FnOnce(&WidgetView) -> R) -> R {
        self.with_state(|s| f(&s.view))
    }

    fn with_state<R>(&self, f: impl FnOnce(&mut WidgetState) -> R) -> R {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut state)
    }

    /// Handle an event locally, then announce it to subscribers.
    fn emit(&self, event: WidgetEvent) {
        if event == WidgetEvent::ThemeUpdated {
            self.reapply_theme();
        }
        self.events.publish(event);
    }

    /// Push the current theme onto the view, if there is one.
    fn reapply_theme(&self) {
        match self.with_state(|s| s.view.apply_theme(s.theme.theme())) {
            Ok(true) => {
                info!(widget = %self.id, bot = %self.bot, "Theme applied");
                self.events.publish(WidgetEvent::ThemeApplied);
            }
            Ok(false) => debug!(widget = %self.id, "no view yet, theme kept for build"),
            Err(e) => warn!(widget = %self.id, error = %e, "failed to apply theme"),
        }
    }
}
