//! Respond Page Component
//!
//! Loads a published form and hands it to the form-fill controller.

use leptos::prelude::*;
use leptos::task::spawn_local;

use form_schema::Document;

use crate::components::FormFill;
use crate::context::{use_app_context, LoadTicket};

#[derive(Clone, Debug, PartialEq)]
enum LoadState {
    Loading,
    Ready(Document),
    Failed(String),
}

#[component]
pub fn RespondPage(form_id: i64) -> impl IntoView {
    let ctx = use_app_context();
    let (state, set_state) = signal(LoadState::Loading);
    let loads = LoadTicket::new();

    let ticket = loads.begin();
    spawn_local(async move {
        let result = ctx.api().fetch_answer_form(form_id).await;
        if !loads.is_current(ticket) {
            return;
        }
        set_state.set(match result {
            Ok(doc) => LoadState::Ready(doc),
            Err(e) => {
                log::error!("[APP] Answer form {} failed to load: {}", form_id, e);
                LoadState::Failed(e.to_string())
            }
        });
    });

    view! {
        <div class="respond-page">
            {move || match state.get() {
                LoadState::Loading => view! { <div class="loading">"Loading form..."</div> }.into_any(),
                LoadState::Failed(message) => view! {
                    <div class="load-error">
                        <h2>"This form is not available"</h2>
                        <p>{message}</p>
                    </div>
                }
                .into_any(),
                LoadState::Ready(doc) => {
                    let Document { title, nodes } = doc;
                    view! {
                        <h1 class="form-title">{title}</h1>
                        <FormFill nodes=Signal::stored(nodes) form_id=form_id />
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
