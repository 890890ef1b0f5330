//! Scripted in-memory backend for runtime tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;

use chatwidget_client::{BackendError, ChatReply, ChatRequest, Endpoints, ThemeRecord, WidgetBackend};
use chatwidget_common::BotIdentity;

pub const BASE_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_AVATAR: &str = "http://127.0.0.1:5000/static/bot.png";

/// Scripted outcome of one backend call.
#[derive(Debug, Clone)]
pub enum Scripted<T> {
    Ok(T),
    Status(u16),
    Malformed,
    Unreachable,
}

impl<T> Scripted<T> {
    fn into_result(self) -> Result<T, BackendError> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Status(code) => Err(BackendError::Status(code)),
            Self::Malformed => Err(BackendError::Parse("unexpected body".into())),
            Self::Unreachable => Err(BackendError::Transport("connection refused".into())),
        }
    }
}

pub struct MockBackend {
    endpoints: Endpoints,
    theme: Scripted<ThemeRecord>,
    avatar: Scripted<()>,
    chat: Mutex<VecDeque<Scripted<String>>>,
    theme_gate: Option<Arc<Notify>>,
    chat_gate: Option<Arc<Notify>>,
    requests: Mutex<Vec<(BotIdentity, ChatRequest)>>,
    theme_calls: AtomicUsize,
    probe_calls: AtomicUsize,
}

impl MockBackend {
    /// Empty theme record, no custom avatar, chat echoes the query.
    pub fn new() -> Self {
        Self {
            endpoints: Endpoints::new(BASE_URL),
            theme: Scripted::Ok(ThemeRecord::new()),
            avatar: Scripted::Status(404),
            chat: Mutex::new(VecDeque::new()),
            theme_gate: None,
            chat_gate: None,
            requests: Mutex::new(Vec::new()),
            theme_calls: AtomicUsize::new(0),
            probe_calls: AtomicUsize::new(0),
        }
    }

    pub fn with_theme(mut self, theme: Scripted<ThemeRecord>) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_theme_json(self, value: serde_json::Value) -> Self {
        let record = value.as_object().cloned().unwrap_or_default();
        self.with_theme(Scripted::Ok(record))
    }

    pub fn with_avatar(mut self, avatar: Scripted<()>) -> Self {
        self.avatar = avatar;
        self
    }

    /// Queue chat outcomes, consumed in request order.
    pub fn with_replies(self, replies: impl IntoIterator<Item = Scripted<String>>) -> Self {
        self.chat.lock().unwrap().extend(replies);
        self
    }

    /// Hold theme fetches until the gate is notified.
    pub fn with_theme_gate(mut self, gate: Arc<Notify>) -> Self {
        self.theme_gate = Some(gate);
        self
    }

    /// Hold chat requests until the gate is notified.
    pub fn with_chat_gate(mut self, gate: Arc<Notify>) -> Self {
        self.chat_gate = Some(gate);
        self
    }

    pub fn requests(&self) -> Vec<(BotIdentity, ChatRequest)> {
        self.requests.lock().unwrap().clone()
    }

    pub fn theme_calls(&self) -> usize {
        self.theme_calls.load(Ordering::SeqCst)
    }

    pub fn probe_calls(&self) -> usize {
        self.probe_calls.load(Ordering::SeqCst)
    }

    pub fn custom_avatar_url(&self, bot: &BotIdentity) -> String {
        self.endpoints.avatar_url(bot, 42)
    }
}

#[async_trait]
impl WidgetBackend for MockBackend {
    fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    async fn fetch_theme(&self, _bot: &BotIdentity) -> Result<ThemeRecord, BackendError> {
        self.theme_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.theme_gate {
            gate.notified().await;
        }
        tokio::task::yield_now().await;
        self.theme.clone().into_result()
    }

    async fn probe_avatar(&self, bot: &BotIdentity) -> Result<String, BackendError> {
        self.probe_calls.fetch_add(1, Ordering::SeqCst);
        tokio::task::yield_now().await;
        self.avatar
            .clone()
            .into_result()
            .map(|()| self.custom_avatar_url(bot))
    }

    async fn send_chat(
        &self,
        bot: &BotIdentity,
        request: &ChatRequest,
    ) -> Result<ChatReply, BackendError> {
        self.requests
            .lock()
            .unwrap()
            .push((bot.clone(), request.clone()));
        let scripted = self
            .chat
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Scripted::Ok(format!("echo: {}", request.query)));

        if let Some(gate) = &self.chat_gate {
            gate.notified().await;
        }
        tokio::task::yield_now().await;
        scripted
            .into_result()
            .map(|response| ChatReply { response })
    }
}
