//! In-memory render tree.
//!
//! A small arena of element nodes with inline styles, classes, attributes and
//! text, plus a set of scoped stylesheets keyed by id. Removed nodes leave a
//! hole in the arena so ids are never reused.

use std::collections::BTreeMap;
use std::fmt;

use crate::ViewError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node-{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Body,
    Div,
    Button,
    Input,
    Img,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub id: NodeId,
    pub tag: Tag,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    pub classes: Vec<String>,
    pub text: String,
    pub attrs: BTreeMap<String, String>,
    pub style: BTreeMap<String, String>,
    /// Scroll offset in content rows.
    pub scroll_top: usize,
}

impl Node {
    fn new(id: NodeId, tag: Tag) -> Self {
        Self {
            id,
            tag,
            parent: None,
            children: Vec::new(),
            classes: Vec::new(),
            text: String::new(),
            attrs: BTreeMap::new(),
            style: BTreeMap::new(),
            scroll_top: 0,
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// The widget's whole visual state. Two trees compare equal when they would
/// render identically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderTree {
    nodes: Vec<Option<Node>>,
    body: NodeId,
    stylesheets: BTreeMap<String, String>,
    focused: Option<NodeId>,
}

impl Default for RenderTree {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderTree {
    pub fn new() -> Self {
        let body = NodeId(0);
        Self {
            nodes: vec![Some(Node::new(body, Tag::Body))],
            body,
            stylesheets: BTreeMap::new(),
            focused: None,
        }
    }

    /// The host document body every widget element hangs off.
    pub fn body(&self) -> NodeId {
        self.body
    }

    /// Create a detached node.
    pub fn create(&mut self, tag: Tag) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Some(Node::new(id, tag)));
        id
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0 as usize).and_then(Option::as_ref)
    }

    fn get_mut(&mut self, id: NodeId) -> Result<&mut Node, ViewError> {
        self.nodes
            .get_mut(id.0 as usize)
            .and_then(Option::as_mut)
            .ok_or(ViewError::UnknownNode(id))
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    /// Attach `child` as the last child of `parent`.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), ViewError> {
        if !self.contains(parent) {
            return Err(ViewError::UnknownNode(parent));
        }
        self.get_mut(child)?.parent = Some(parent);
        self.get_mut(parent)?.children.push(child);
        Ok(())
    }

    /// Detach `id` from its parent and drop it with its whole subtree.
    pub fn remove(&mut self, id: NodeId) -> Result<(), ViewError> {
        let parent = self.get_mut(id)?.parent;
        if let Some(parent) = parent {
            self.get_mut(parent)?.children.retain(|c| *c != id);
        }

        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            if let Some(slot) = self.nodes.get_mut(next.0 as usize) {
                if let Some(node) = slot.take() {
                    stack.extend(node.children);
                }
            }
            if self.focused == Some(next) {
                self.focused = None;
            }
        }
        Ok(())
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent)
    }

    pub fn set_style(
        &mut self,
        id: NodeId,
        prop: &str,
        value: impl Into<String>,
    ) -> Result<(), ViewError> {
        self.get_mut(id)?.style.insert(prop.to_string(), value.into());
        Ok(())
    }

    /// Set several style properties at once.
    pub fn set_styles(&mut self, id: NodeId, styles: &[(&str, &str)]) -> Result<(), ViewError> {
        let node = self.get_mut(id)?;
        for (prop, value) in styles {
            node.style.insert((*prop).to_string(), (*value).to_string());
        }
        Ok(())
    }

    pub fn style(&self, id: NodeId, prop: &str) -> Option<&str> {
        self.get(id)?.style.get(prop).map(String::as_str)
    }

    pub fn add_class(&mut self, id: NodeId, class: impl Into<String>) -> Result<(), ViewError> {
        let class = class.into();
        let node = self.get_mut(id)?;
        if !node.has_class(&class) {
            node.classes.push(class);
        }
        Ok(())
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.get(id).is_some_and(|n| n.has_class(class))
    }

    pub fn set_text(&mut self, id: NodeId, text: impl Into<String>) -> Result<(), ViewError> {
        self.get_mut(id)?.text = text.into();
        Ok(())
    }

    pub fn text(&self, id: NodeId) -> Option<&str> {
        self.get(id).map(|n| n.text.as_str())
    }

    pub fn set_attr(
        &mut self,
        id: NodeId,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), ViewError> {
        self.get_mut(id)?.attrs.insert(name.to_string(), value.into());
        Ok(())
    }

    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.get(id)?.attrs.get(name).map(String::as_str)
    }

    /// Descendants of `root` carrying `class`, in document order.
    pub fn query_class(&self, root: NodeId, class: &str) -> Vec<NodeId> {
        let mut found = Vec::new();
        let mut stack: Vec<NodeId> = self.children(root).iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            let Some(node) = self.get(id) else { continue };
            if node.has_class(class) {
                found.push(id);
            }
            stack.extend(node.children.iter().rev().copied());
        }
        found
    }

    pub fn focus(&mut self, id: NodeId) -> Result<(), ViewError> {
        if !self.contains(id) {
            return Err(ViewError::UnknownNode(id));
        }
        self.focused = Some(id);
        Ok(())
    }

    pub fn focused(&self) -> Option<NodeId> {
        self.focused
    }

    /// Content height of a scroll container, one row per child.
    pub fn scroll_height(&self, id: NodeId) -> usize {
        self.children(id).len()
    }

    pub fn scroll_to_end(&mut self, id: NodeId) -> Result<(), ViewError> {
        let height = self.scroll_height(id);
        self.get_mut(id)?.scroll_top = height;
        Ok(())
    }

    /// Install or replace a scoped stylesheet.
    pub fn set_stylesheet(&mut self, id: impl Into<String>, css: impl Into<String>) {
        self.stylesheets.insert(id.into(), css.into());
    }

    pub fn stylesheet(&self, id: &str) -> Option<&str> {
        self.stylesheets.get(id).map(String::as_str)
    }

    /// Number of live nodes, body included.
    pub fn len(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
