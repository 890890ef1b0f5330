//! Chat widget runtime.
//!
//! Ties configuration, backend client and view together into a
//! [`ChatWidget`]: the per-embedding instance that waits for its host page,
//! builds the view, loads theme and avatar, and runs the conversation.

pub mod avatar;
pub mod host;
pub mod store;
pub mod widget;

#[cfg(test)]
mod testing;

pub use avatar::{AvatarReference, AvatarResolver};
pub use host::{DocumentHandle, DocumentState, HostPage};
pub use store::ThemeStore;
pub use widget::{
    ChatWidget, LifecyclePhase, SendOutcome, UserAction, SERVER_ERROR_REPLY,
    TRANSPORT_ERROR_REPLY,
};
