//! Form List Component
//!
//! Landing view: the user's published forms and how many were answered.

use leptos::prelude::*;
use leptos::task::spawn_local;

use form_schema::backend::wire::FormSummary;

use crate::context::{use_app_context, ToastKind};

#[component]
pub fn FormList() -> impl IntoView {
    let ctx = use_app_context();
    let (forms, set_forms) = signal(Vec::<FormSummary>::new());
    let (answered, set_answered) = signal::<Option<usize>>(None);

    spawn_local(async move {
        let api = ctx.api();
        match api.list_published().await {
            Ok(loaded) => {
                log::info!("[APP] Loaded {} published forms", loaded.len());
                let _ = set_forms.try_set(loaded);
            }
            Err(e) => ctx.notify(ToastKind::Error, format!("Could not load forms: {}", e)),
        }
        match api.answered_count().await {
            Ok(count) => {
                let _ = set_answered.try_set(Some(count));
            }
            Err(e) => log::warn!("[APP] Answered count unavailable: {}", e),
        }
    });

    view! {
        <div class="form-list-page">
            <div class="form-list-header">
                <h1>"Forms"</h1>
                <a class="titlebar-btn primary" href="#/new">"+ New form"</a>
            </div>
            <ul class="form-list">
                <For
                    each=move || forms.get()
                    key=|form| form.id
                    children=move |form| {
                        let title = if form.title.trim().is_empty() {
                            format!("Form #{}", form.id)
                        } else {
                            form.title.clone()
                        };
                        view! {
                            <li class="form-list-item">
                                <span class="form-list-title">{title}</span>
                                <a href=format!("#/edit/{}", form.id)>"Edit"</a>
                                <a href=format!("#/answer/{}", form.id)>"Open"</a>
                            </li>
                        }
                    }
                />
            </ul>
            <Show when=move || forms.with(Vec::is_empty)>
                <p class="form-list-empty">"No published forms yet"</p>
            </Show>
            <p class="item-count">
                {move || match answered.get() {
                    Some(n) => format!("{} published, {} answered", forms.with(Vec::len), n),
                    None => format!("{} published", forms.with(Vec::len)),
                }}
            </p>
        </div>
    }
}
