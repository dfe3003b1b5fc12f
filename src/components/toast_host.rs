//! Toast Host Component
//!
//! Stack of transient notifications; click to dismiss early.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn ToastHost() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="toast-host">
            <For
                each=move || ctx.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class=format!("toast {}", toast.kind.as_str())
                            on:click=move |_| ctx.dismiss(id)
                        >
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
