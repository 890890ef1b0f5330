//! The page a widget is embedded into.
//!
//! A host supplies the embedding script's source URL (where the bot identity
//! comes from) and a document readiness signal the widget waits on before
//! building anything.

use tokio::sync::watch;
use tracing::debug;

use chatwidget_common::{Result, WidgetError};

/// Readiness of the host document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentState {
    /// Still parsing; nothing may be attached yet.
    Loading,
    /// Content loaded; the widget may build.
    Ready,
}

/// A host page as seen by the widget.
#[derive(Debug, Clone)]
pub struct HostPage {
    script_src: String,
    document: watch::Receiver<DocumentState>,
}

/// Host-side handle that announces the document finished loading.
#[derive(Debug)]
pub struct DocumentHandle {
    sender: watch::Sender<DocumentState>,
}

impl HostPage {
    /// A page whose document has already loaded.
    pub fn loaded(script_src: impl Into<String>) -> Self {
        let (_, document) = watch::channel(DocumentState::Ready);
        Self {
            script_src: script_src.into(),
            document,
        }
    }

    /// A page that is still loading. The widget waits until the returned
    /// handle marks it ready.
    pub fn loading(script_src: impl Into<String>) -> (Self, DocumentHandle) {
        let (sender, document) = watch::channel(DocumentState::Loading);
        let page = Self {
            script_src: script_src.into(),
            document,
        };
        (page, DocumentHandle { sender })
    }

    pub fn script_src(&self) -> &str {
        &self.script_src
    }

    #[cfg(test)]
    pub(crate) fn document_state(&self) -> DocumentState {
        *self.document.borrow()
    }

    /// Resolve once the document is ready. Returns immediately if it already is.
    pub async fn wait_ready(&self) -> Result<()> {
        let mut document = self.document.clone();
        if *document.borrow() == DocumentState::Ready {
            return Ok(());
        }

        debug!("host document loading, waiting for ready signal");
        document
            .wait_for(|state| *state == DocumentState::Ready)
            .await
            .map_err(|_| WidgetError::Other("host document closed before it was ready".into()))?;
        Ok(())
    }
}

impl DocumentHandle {
    /// Fire the ready signal. Later calls do nothing.
    pub fn mark_ready(&self) {
        self.sender.send_if_modified(|state| {
            if *state == DocumentState::Ready {
                return false;
            }
            *state = DocumentState::Ready;
            true
        });
    }
}
