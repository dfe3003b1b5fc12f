//! Canvas Node Component
//!
//! A single node row on the builder canvas: insertion markers, toolbar and
//! the registry preview.

use leptos::prelude::*;

use form_schema::{display_name, Document, Node, SchemaAction};
use leptos_dragdrop::*;

use crate::components::DeleteConfirmButton;
use crate::registry::render_builder_node;
use crate::store::{dispatch, store_delete_node, use_builder_store, BuilderStateStoreFields};

#[component]
pub fn CanvasNode(node: Node, index: usize) -> impl IntoView {
    let store = use_builder_store();
    let dnd = use_reorder();

    let id = node.id().clone();
    let drag_id = id.to_string();

    // DnD handlers
    let on_mousedown = make_on_mousedown(dnd, drag_id.clone(), index);
    let on_mousemove = make_on_row_mousemove(dnd, index);

    // Visual state
    let selected_id = id.clone();
    let is_selected = move || store.selected_id().with(|s| s.as_ref() == Some(&selected_id));
    let is_dragged = move || dnd.is_dragged(&drag_id);
    let len = move || store.document().with(Document::len);

    let row_class = move || {
        let mut c = String::from("canvas-node");
        if is_selected() { c.push_str(" selected"); }
        if is_dragged() { c.push_str(" dragging"); }
        c
    };

    let click_id = id.clone();
    let duplicate_id = id.clone();
    let delete_id = id;
    let type_name = display_name(node.node_type());
    let preview = render_builder_node(&node);

    view! {
        <Show when=move || dnd.marker_before(index)>
            <div class="insertion-marker" />
        </Show>
        <div
            class=row_class
            on:mousedown=on_mousedown
            on:mousemove=on_mousemove
            on:click=move |_| store.selected_id().set(Some(click_id.clone()))
        >
            <div class="canvas-node-toolbar">
                <span class="drag-handle" title="Drag to reorder">"⠿"</span>
                <span class="canvas-node-type">{type_name}</span>
                <button
                    type="button"
                    class="duplicate-btn"
                    title="Duplicate"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        dispatch(&store, SchemaAction::DuplicateNode(duplicate_id.clone()));
                    }
                >
                    "⧉"
                </button>
                <DeleteConfirmButton
                    button_class="delete-btn"
                    on_confirm=move || store_delete_node(&store, delete_id.clone())
                />
            </div>
            <div class="canvas-node-body">{preview}</div>
        </div>
        <Show when=move || dnd.marker_after(index, len())>
            <div class="insertion-marker" />
        </Show>
    }
}
