//! Palette Panel Component
//!
//! Left column: insertable field types grouped by category.

use leptos::prelude::*;

use form_schema::{PaletteCategory, PALETTE};

use crate::store::{store_insert_node, use_builder_store};

#[component]
pub fn PalettePanel() -> impl IntoView {
    let store = use_builder_store();

    view! {
        <aside class="palette-panel">
            <h2 class="panel-title">"Fields"</h2>
            {PaletteCategory::ALL
                .iter()
                .map(|&category| {
                    view! {
                        <section class="palette-group">
                            <h3 class="palette-group-title">{category.title()}</h3>
                            <div class="palette-items">
                                {PALETTE
                                    .iter()
                                    .filter(|entry| entry.category == category)
                                    .map(|entry| {
                                        let node_type = entry.node_type;
                                        view! {
                                            <button
                                                type="button"
                                                class="palette-item"
                                                title=format!("Add {}", entry.label)
                                                on:click=move |_| store_insert_node(&store, node_type)
                                            >
                                                {entry.label}
                                            </button>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </section>
                    }
                })
                .collect_view()}
        </aside>
    }
}
