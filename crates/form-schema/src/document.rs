//! Schema Mutation Engine
//!
//! Every operation consumes a document and returns the next one. Callers
//! that keep the previous snapshot (a clone) never see it change.
//! Unknown ids and out-of-range indices are silent no-ops.

use serde::{Deserialize, Serialize};

use crate::node::{Node, NodeId};
use crate::props::{self, Props};

/// Ordered form document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    pub nodes: Vec<Node>,
}

/// Builder actions dispatched against a document
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaAction {
    SetTitle(String),
    /// Insert at index, or append when `None` / out of range
    AddNode { node: Node, index: Option<usize> },
    UpdateNode { id: NodeId, props: Props },
    DeleteNode(NodeId),
    DuplicateNode(NodeId),
    MoveNode { drag_index: usize, hover_index: usize },
    /// Swap in a freshly loaded document
    Replace(Document),
}

impl Document {
    pub fn new(title: impl Into<String>, nodes: Vec<Node>) -> Self {
        Self {
            title: title.into(),
            nodes,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id() == id)
    }

    pub fn index_of(&self, id: &NodeId) -> Option<usize> {
        self.nodes.iter().position(|n| n.id() == id)
    }

    /// Reducer entry point
    pub fn apply(self, action: SchemaAction) -> Self {
        match action {
            SchemaAction::SetTitle(title) => self.set_title(title),
            SchemaAction::AddNode { node, index } => self.add_node(node, index),
            SchemaAction::UpdateNode { id, props } => self.update_node(&id, props),
            SchemaAction::DeleteNode(id) => self.delete_node(&id),
            SchemaAction::DuplicateNode(id) => self.duplicate_node(&id),
            SchemaAction::MoveNode {
                drag_index,
                hover_index,
            } => self.move_node_by_index(drag_index, hover_index),
            SchemaAction::Replace(doc) => doc,
        }
    }

    pub fn set_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn add_node(mut self, node: Node, index: Option<usize>) -> Self {
        match index {
            Some(i) if i <= self.nodes.len() => self.nodes.insert(i, node),
            _ => self.nodes.push(node),
        }
        self
    }

    /// Shallow-merge `partial` into the node's props.
    ///
    /// Editing `options` drops the `hasNoBackendOptions` marker unless the
    /// same update sets it, so the edited options are persisted on save.
    pub fn update_node(mut self, id: &NodeId, partial: Props) -> Self {
        if let Some(node) = self.nodes.iter_mut().find(|n| n.id() == id) {
            let edits_options = partial.contains(props::OPTIONS)
                && !partial.contains(props::HAS_NO_BACKEND_OPTIONS);
            node.props.merge(partial);
            if edits_options {
                node.props.remove(props::HAS_NO_BACKEND_OPTIONS);
            }
        }
        self
    }

    pub fn delete_node(mut self, id: &NodeId) -> Self {
        self.nodes.retain(|n| n.id() != id);
        self
    }

    pub fn duplicate_node(mut self, id: &NodeId) -> Self {
        if let Some(index) = self.index_of(id) {
            let copy = self.nodes[index].duplicate();
            self.nodes.insert(index + 1, copy);
        }
        self
    }

    /// Remove the node at `drag_index` and reinsert it at `hover_index`
    /// of the shortened list. `hover_index` past the end is clamped.
    ///
    /// The drag coordinator already filters no-op gestures; the checks
    /// here only keep direct callers from panicking.
    pub fn move_node_by_index(mut self, drag_index: usize, hover_index: usize) -> Self {
        if drag_index == hover_index || drag_index >= self.nodes.len() {
            return self;
        }
        let node = self.nodes.remove(drag_index);
        let target = hover_index.min(self.nodes.len());
        self.nodes.insert(target, node);
        self
    }
}
