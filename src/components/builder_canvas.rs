//! Builder Canvas Component
//!
//! Displays the document's nodes in order with drag-to-reorder.
//! One `DragStore` is created per canvas; every row reads its insertion
//! markers from it.

use leptos::prelude::*;

use form_schema::{Document, SchemaAction};
use leptos_dragdrop::*;

use crate::components::CanvasNode;
use crate::store::{dispatch, use_builder_store, BuilderStateStoreFields};

/// Key for a canvas row. Index and props are part of it so that moved or
/// edited rows re-render with fresh handlers and preview.
fn row_key(index: usize, node: &form_schema::Node) -> (usize, String, String) {
    (
        index,
        node.id().to_string(),
        serde_json::to_string(node.props()).unwrap_or_default(),
    )
}

#[component]
pub fn BuilderCanvas() -> impl IntoView {
    let store = use_builder_store();

    let dnd = provide_reorder_context(DragStore::new());
    bind_global_handlers(dnd, move |reorder: Reorder| {
        log::info!("[APP] Move node {} -> {}", reorder.from_index, reorder.to_index);
        dispatch(
            &store,
            SchemaAction::MoveNode {
                drag_index: reorder.from_index,
                hover_index: reorder.to_index,
            },
        );
    });

    let rows = move || {
        store
            .document()
            .with(|d| d.nodes.iter().cloned().enumerate().collect::<Vec<_>>())
    };
    let is_empty = move || store.document().with(Document::is_empty);

    view! {
        <div class=move || if dnd.is_dragging() { "builder-canvas dragging" } else { "builder-canvas" }>
            <Show when=is_empty>
                <div class="canvas-empty">"Pick a field from the palette to start building your form"</div>
            </Show>
            <For
                each=rows
                key=|(index, node)| row_key(*index, node)
                children=move |(index, node)| view! { <CanvasNode node=node index=index /> }
            />
        </div>
    }
}
