//! In-process focus host
//!
//! `UiContext` tracks which node holds input focus and records focus/blur
//! notifications for the host to deliver back to the affected controls. It
//! also hands out unique IDs for controls that were not given one.
//!
//! Hosts with their own focus model (a browser, a native toolkit) implement
//! [`FocusHost`] directly instead.

use crate::FocusHost;

/// Unique identifier of a control's real focus target
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeId(String);

impl NodeId {
    /// Create a new NodeId from a string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A change of the focus holder, to be delivered to the affected control
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FocusChange {
    /// Node gained focus
    Focus(NodeId),
    /// Node lost focus
    Blur(NodeId),
}

/// Focus bookkeeping and ID generation for one UI
#[derive(Debug, Default)]
pub struct UiContext {
    /// Currently focused node ID, if any
    focused_node: Option<NodeId>,

    /// Focus changes not yet taken by the host
    changes: Vec<FocusChange>,

    /// ID stack for hierarchical ID generation
    id_stack: Vec<String>,

    /// Counter for generating unique IDs
    id_counter: usize,
}

impl UiContext {
    /// Create a new UI context
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the focused node
    ///
    /// This is how the host reports focus moves it made on its own, such as
    /// keyboard navigation. A Blur for the previous holder and a Focus for
    /// the new one are recorded.
    pub fn set_focus(&mut self, node_id: Option<NodeId>) {
        if self.focused_node == node_id {
            return;
        }

        if let Some(old_id) = self.focused_node.take() {
            self.changes.push(FocusChange::Blur(old_id));
        }
        if let Some(ref new_id) = node_id {
            self.changes.push(FocusChange::Focus(new_id.clone()));
        }
        self.focused_node = node_id;
    }

    /// Check if a node is focused
    pub fn is_focused(&self, id: &str) -> bool {
        self.focused_node
            .as_ref()
            .map(|fid| fid.as_str() == id)
            .unwrap_or(false)
    }

    /// Take the focus changes recorded since the last call
    pub fn take_focus_changes(&mut self) -> Vec<FocusChange> {
        std::mem::take(&mut self.changes)
    }

    /// Push an ID scope onto the stack
    ///
    /// IDs generated inside the scope are prefixed with it.
    pub fn push_id(&mut self, id: impl Into<String>) {
        self.id_stack.push(id.into());
    }

    /// Pop the innermost ID scope
    pub fn pop_id(&mut self) {
        self.id_stack.pop();
    }
}

impl FocusHost for UiContext {
    fn focus(&mut self, target: &NodeId) {
        self.set_focus(Some(target.clone()));
    }

    fn blur(&mut self, target: &NodeId) {
        if self.focused_node.as_ref() == Some(target) {
            self.set_focus(None);
        }
    }

    fn focused(&self) -> Option<&NodeId> {
        self.focused_node.as_ref()
    }

    fn generate_id(&mut self, label: &str) -> NodeId {
        let id = if self.id_stack.is_empty() {
            format!("{}_{}", label, self.id_counter)
        } else {
            format!("{}/{}_{}", self.id_stack.join("/"), label, self.id_counter)
        };
        self.id_counter += 1;
        NodeId::new(id)
    }
}
