//! Builder Page Component
//!
//! Three-column editor: palette, canvas (or preview) and properties.
//! Owns the builder store for the open form.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use form_schema::Node;

use crate::components::{BuilderCanvas, FormFill, PalettePanel, PropertiesPanel, TitleBar};
use crate::context::{use_app_context, LoadTicket, ToastKind};
use crate::store::{store_load_document, BuilderState, BuilderStateStoreFields};

#[component]
pub fn BuilderPage(form_id: Option<i64>) -> impl IntoView {
    let ctx = use_app_context();
    let store = Store::new(BuilderState::default());
    provide_context(store);

    let (loading, set_loading) = signal(form_id.is_some());
    let loads = LoadTicket::new();

    if let Some(form_id) = form_id {
        let ticket = loads.begin();
        spawn_local(async move {
            let result = ctx.api().fetch_form(form_id).await;
            if !loads.is_current(ticket) {
                log::debug!("[APP] Ignoring stale load of form {}", form_id);
                return;
            }
            match result {
                Ok(doc) => store_load_document(&store, Some(form_id), doc),
                Err(e) => ctx.notify(ToastKind::Error, format!("Could not load form #{}: {}", form_id, e)),
            }
            set_loading.set(false);
        });
    }

    // Preview hides fields switched off for it
    let preview_nodes = Signal::derive(move || {
        store.document().with(|d| {
            d.nodes
                .iter()
                .filter(|n| n.props().visible_in_preview())
                .cloned()
                .collect::<Vec<Node>>()
        })
    });

    view! {
        <div class="app-layout">
            <PalettePanel />
            <main class="main-content">
                <TitleBar />
                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <div class="loading">"Loading form..."</div> }
                >
                    <Show
                        when=move || store.previewing().get()
                        fallback=|| view! { <BuilderCanvas /> }
                    >
                        <div class="form-preview">
                            <h1 class="form-title">{move || store.document().with(|d| d.title.clone())}</h1>
                            <FormFill nodes=preview_nodes />
                        </div>
                    </Show>
                </Show>
            </main>
            <PropertiesPanel />
        </div>
    }
}
