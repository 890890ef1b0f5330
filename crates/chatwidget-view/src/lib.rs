//! Render tree and view logic for the embeddable chat widget.
//!
//! The widget draws into an in-memory [`RenderTree`], a DOM-equivalent that a
//! concrete host mirrors. [`WidgetView`] owns the tree and knows how to:
//! - build the toggle button, popup panel, message list and input row
//! - re-apply a [`Theme`](chatwidget_config::Theme) to every existing element
//! - render conversation messages and the transient typing indicator
//! - walk the avatar image fallback chain on load failure

pub mod styles;
pub mod theme_bridge;
pub mod tree;
pub mod view;

pub use tree::{Node, NodeId, RenderTree, Tag};
pub use view::{AvatarFallback, WidgetView};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ViewError {
    #[error("view has not been built yet")]
    NotBuilt,
    #[error("unknown render node {0}")]
    UnknownNode(NodeId),
    #[error("{0} is not an avatar image")]
    NotAnAvatar(NodeId),
}

impl From<ViewError> for chatwidget_common::WidgetError {
    fn from(err: ViewError) -> Self {
        Self::View(err.to_string())
    }
}
