//! Builder State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The document is
//! replaced wholesale on every action; components subscribe to the fields
//! they render.

use leptos::prelude::*;
use reactive_stores::Store;

use form_schema::{Document, Node, NodeId, NodeType, SchemaAction};

/// State of the open form
#[derive(Clone, Debug, Default, Store)]
pub struct BuilderState {
    /// Current document snapshot
    pub document: Document,
    /// Node shown in the properties panel
    pub selected_id: Option<NodeId>,
    /// Backend id once saved or loaded
    pub form_id: Option<i64>,
    /// Form published on the backend
    pub published: bool,
    /// Preview instead of edit canvas
    pub previewing: bool,
    /// Edited since the last save
    pub dirty: bool,
}

/// Type alias for the store
pub type BuilderStore = Store<BuilderState>;

/// Get the builder store from context
pub fn use_builder_store() -> BuilderStore {
    expect_context::<BuilderStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Apply one mutation to the document
pub fn dispatch(store: &BuilderStore, action: SchemaAction) {
    let replacing = matches!(action, SchemaAction::Replace(_));
    let next = store.document().get_untracked().apply(action);
    store.document().set(next);
    store.dirty().set(!replacing);
}

/// Insert a fresh node after the selection (or at the end) and select it
pub fn store_insert_node(store: &BuilderStore, node_type: NodeType) {
    let node = Node::with_defaults(node_type);
    let id = node.id().clone();
    let index = store
        .selected_id()
        .get_untracked()
        .and_then(|sel| store.document().with_untracked(|d| d.index_of(&sel)))
        .map(|i| i + 1);
    dispatch(store, SchemaAction::AddNode { node, index });
    store.selected_id().set(Some(id));
}

/// Delete a node, clearing the selection if it pointed at it
pub fn store_delete_node(store: &BuilderStore, id: NodeId) {
    if store.selected_id().get_untracked().as_ref() == Some(&id) {
        store.selected_id().set(None);
    }
    dispatch(store, SchemaAction::DeleteNode(id));
}

/// Record a successful save of `saved`
///
/// Edits made while the request was in flight keep the form dirty.
pub fn store_mark_saved(store: &BuilderStore, form_id: i64, saved: &Document) {
    store.form_id().set(Some(form_id));
    store.published().set(false);
    if store.document().with_untracked(|d| d == saved) {
        store.dirty().set(false);
    }
}

/// Swap in a loaded form
pub fn store_load_document(store: &BuilderStore, form_id: Option<i64>, document: Document) {
    store.selected_id().set(None);
    store.form_id().set(form_id);
    store.published().set(false);
    dispatch(store, SchemaAction::Replace(document));
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn with_store(f: impl FnOnce(BuilderStore)) {
        let owner = Owner::new();
        owner.with(|| f(Store::new(BuilderState::default())));
    }

    #[test]
    fn test_insert_after_selection() {
        with_store(|store| {
            store_insert_node(&store, NodeType::Text);
            let first = store.selected_id().get_untracked().unwrap();
            store_insert_node(&store, NodeType::Number);
            store_insert_node(&store, NodeType::Date);

            // Each insert lands after the node selected at the time
            let types: Vec<NodeType> = store
                .document()
                .with_untracked(|d| d.nodes.iter().map(|n| n.node_type()).collect());
            assert_eq!(types, vec![NodeType::Text, NodeType::Number, NodeType::Date]);
            assert_eq!(store.document().with_untracked(|d| d.index_of(&first)), Some(0));
            assert!(store.dirty().get_untracked());
        });
    }

    #[test]
    fn test_delete_clears_selection() {
        with_store(|store| {
            store_insert_node(&store, NodeType::Text);
            let id = store.selected_id().get_untracked().unwrap();
            store_delete_node(&store, id);
            assert_eq!(store.selected_id().get_untracked(), None);
            assert!(store.document().with_untracked(|d| d.is_empty()));
        });
    }

    #[test]
    fn test_mark_saved_keeps_later_edits_dirty() {
        with_store(|store| {
            store_insert_node(&store, NodeType::Text);
            let snapshot = store.document().get_untracked();
            dispatch(&store, SchemaAction::SetTitle("Edited mid-save".into()));

            store_mark_saved(&store, 3, &snapshot);
            assert_eq!(store.form_id().get_untracked(), Some(3));
            assert!(store.dirty().get_untracked());

            let current = store.document().get_untracked();
            store_mark_saved(&store, 4, &current);
            assert!(!store.dirty().get_untracked());
        });
    }

    #[test]
    fn test_load_resets_dirty_and_selection() {
        with_store(|store| {
            store_insert_node(&store, NodeType::Text);
            store_load_document(&store, Some(12), Document::new("Loaded", Vec::new()));
            assert_eq!(store.form_id().get_untracked(), Some(12));
            assert_eq!(store.selected_id().get_untracked(), None);
            assert!(!store.dirty().get_untracked());
            assert_eq!(store.document().with_untracked(|d| d.title.clone()), "Loaded");
        });
    }
}
