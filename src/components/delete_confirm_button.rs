//! Delete Confirm Button Component
//!
//! Inline two-step delete for canvas rows.

use leptos::prelude::*;

/// Keep a press on the control from selecting or dragging the row under it
fn swallow(ev: &web_sys::MouseEvent) {
    ev.stop_propagation();
}

/// × first, then "Delete?" with confirm and cancel
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirming, set_confirming) = signal(false);

    // Every button is type="button": previews render inside a <form>,
    // where the default type would submit it.
    let idle = move || {
        view! {
            <button
                type="button"
                class=button_class.clone()
                title="Delete field"
                on:mousedown=|ev| swallow(&ev)
                on:click=move |ev| {
                    swallow(&ev);
                    set_confirming.set(true);
                }
            >
                "×"
            </button>
        }
    };

    view! {
        <Show when=move || confirming.get() fallback=idle>
            <span class="delete-confirm" on:mousedown=|ev| swallow(&ev)>
                <span class="delete-confirm-text">"Delete?"</span>
                <button
                    type="button"
                    class="confirm-btn"
                    title="Confirm delete"
                    on:click=move |ev| {
                        swallow(&ev);
                        set_confirming.set(false);
                        on_confirm.run(());
                    }
                >
                    "✓"
                </button>
                <button
                    type="button"
                    class="cancel-btn"
                    title="Keep field"
                    on:click=move |ev| {
                        swallow(&ev);
                        set_confirming.set(false);
                    }
                >
                    "✗"
                </button>
            </span>
        </Show>
    }
}
