//! Builder Title Bar Component
//!
//! Form title plus the preview, save and publish controls.

use leptos::prelude::*;
use leptos::task::spawn_local;

use form_schema::SchemaAction;

use crate::context::{use_app_context, ToastKind};
use crate::store::{dispatch, store_mark_saved, use_builder_store, BuilderStateStoreFields};

#[component]
pub fn TitleBar() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_builder_store();
    let (busy, set_busy) = signal(false);

    // Saving always creates a new form on the backend
    let save = move |_| {
        if busy.get_untracked() {
            return;
        }
        let doc = store.document().get_untracked();
        if doc.title.trim().is_empty() {
            ctx.notify(ToastKind::Error, "Give the form a title before saving");
            return;
        }
        set_busy.set(true);
        spawn_local(async move {
            match ctx.api().create_form(&doc).await {
                Ok(form_id) => {
                    store_mark_saved(&store, form_id, &doc);
                    ctx.notify(ToastKind::Success, format!("Form saved (#{})", form_id));
                }
                Err(e) => ctx.notify(ToastKind::Error, format!("Save failed: {}", e)),
            }
            let _ = set_busy.try_set(false);
        });
    };

    let publish = move |_| {
        if busy.get_untracked() {
            return;
        }
        let Some(form_id) = store.form_id().get_untracked() else {
            ctx.notify(ToastKind::Error, "Save the form before publishing");
            return;
        };
        if store.dirty().get_untracked() {
            ctx.notify(ToastKind::Error, "Save your changes before publishing");
            return;
        }
        set_busy.set(true);
        spawn_local(async move {
            match ctx.api().publish_form(form_id).await {
                Ok(()) => {
                    store.published().set(true);
                    ctx.notify(ToastKind::Success, format!("Published: share #/answer/{}", form_id));
                }
                Err(e) => ctx.notify(ToastKind::Error, format!("Publish failed: {}", e)),
            }
            let _ = set_busy.try_set(false);
        });
    };

    let status = move || {
        match (store.form_id().get(), store.dirty().get(), store.published().get()) {
            (_, true, _) => "Unsaved changes".to_string(),
            (Some(id), false, true) => format!("Published #{}", id),
            (Some(id), false, false) => format!("Saved #{}", id),
            (None, false, _) => "Not saved".to_string(),
        }
    };

    view! {
        <div class="builder-titlebar">
            <a class="titlebar-back" href="#/" title="All forms">"←"</a>
            <input
                type="text"
                class="title-input"
                placeholder="Untitled form"
                prop:value=move || store.document().with(|d| d.title.clone())
                on:input=move |ev| dispatch(&store, SchemaAction::SetTitle(event_target_value(&ev)))
            />
            <span class="titlebar-status">{status}</span>
            <div class="titlebar-controls">
                <button
                    type="button"
                    class=move || if store.previewing().get() { "titlebar-btn active" } else { "titlebar-btn" }
                    on:click=move |_| store.previewing().update(|p| *p = !*p)
                >
                    {move || if store.previewing().get() { "Edit" } else { "Preview" }}
                </button>
                <button type="button" class="titlebar-btn" disabled=busy on:click=save>
                    "Save"
                </button>
                <button type="button" class="titlebar-btn primary" disabled=busy on:click=publish>
                    "Publish"
                </button>
            </div>
        </div>
    }
}
