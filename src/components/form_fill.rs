//! Form Fill Component
//!
//! Respondent-facing form: owns answer values and inline errors, renders
//! each node through the respondent registry, validates and submits.
//! Without a form id it runs as the builder's preview and never submits.

use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::Value;

use form_schema::answers::{
    add_row, build_submission, remove_row, update_cell, validate, validate_field, FieldErrors,
    FieldValues,
};
use form_schema::{Node, NodeId, NodeType};

use crate::context::{use_app_context, ToastKind};
use crate::registry::{render_respondent_node, FieldContext, TableContext};

/// Store a new value; a field already showing an error is re-checked
fn commit_value(values: &mut FieldValues, errors: &mut FieldErrors, node: &Node, value: Value) {
    let id = node.id().clone();
    if errors.contains_key(&id) {
        match validate_field(node, Some(&value)) {
            Some(message) => {
                errors.insert(id.clone(), message);
            }
            None => {
                errors.remove(&id);
            }
        }
    }
    values.insert(id, value);
}

#[component]
pub fn FormFill(
    #[prop(into)] nodes: Signal<Vec<Node>>,
    /// Backend form to submit to; `None` for preview
    #[prop(optional)] form_id: Option<i64>,
) -> impl IntoView {
    let ctx = use_app_context();
    let values = RwSignal::new(FieldValues::new());
    let errors = RwSignal::new(FieldErrors::new());
    let (submitting, set_submitting) = signal(false);
    let (submitted, set_submitted) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let current = nodes.get_untracked();
        let found = values.with_untracked(|v| validate(&current, v));
        if !found.is_empty() {
            log::info!("[FORM] {} fields failed validation", found.len());
            errors.set(found);
            ctx.notify(ToastKind::Error, "Please fill in the required fields");
            return;
        }
        errors.set(FieldErrors::new());

        let Some(form_id) = form_id else {
            ctx.notify(ToastKind::Info, "Preview only: answers are not submitted");
            return;
        };
        let submission = values.with_untracked(|v| build_submission(&current, v));
        set_submitting.set(true);
        spawn_local(async move {
            match ctx.api().submit_answers(form_id, &submission).await {
                Ok(()) => {
                    let _ = set_submitted.try_set(true);
                    ctx.notify(ToastKind::Success, "Thank you! Your answers were submitted");
                }
                Err(e) => ctx.notify(ToastKind::Error, format!("Submission failed: {}", e)),
            }
            let _ = set_submitting.try_set(false);
        });
    };

    let on_reset = move |ev: web_sys::Event| {
        ev.prevent_default();
        values.set(FieldValues::new());
        errors.set(FieldErrors::new());
    };

    view! {
        <Show
            when=move || !submitted.get()
            fallback=|| view! { <div class="form-submitted">"Your response has been recorded."</div> }
        >
            <form class="form-fill" novalidate=true on:submit=on_submit on:reset=on_reset>
                <For
                    each=move || nodes.get()
                    key=|node| (node.id().clone(), serde_json::to_string(node.props()).unwrap_or_default())
                    children=move |node| field_view(node, values, errors)
                />
            </form>
        </Show>
    }
}

fn field_view(node: Node, values: RwSignal<FieldValues>, errors: RwSignal<FieldErrors>) -> AnyView {
    let id = node.id().clone();

    let value = {
        let id = id.clone();
        Signal::derive(move || values.with(|v| v.get(&id).cloned()))
    };
    let error = {
        let id = id.clone();
        Signal::derive(move || errors.with(|e| e.get(&id).cloned()))
    };
    let on_change = {
        let node = node.clone();
        Callback::new(move |value: Value| {
            values.update(|v| errors.update(|e| commit_value(v, e, &node, value)));
        })
    };
    let table = (node.node_type() == NodeType::Table).then(|| table_context(&node, id, values, errors));

    render_respondent_node(
        &node,
        FieldContext {
            value,
            error,
            on_change,
            table,
        },
    )
}

fn table_context(
    node: &Node,
    id: NodeId,
    values: RwSignal<FieldValues>,
    errors: RwSignal<FieldErrors>,
) -> TableContext {
    // Apply `f` to the table's current rows and commit the result
    let edit = {
        let node = node.clone();
        move |f: &dyn Fn(Option<&Value>) -> Value| {
            let next = values.with_untracked(|v| f(v.get(&id)));
            values.update(|v| errors.update(|e| commit_value(v, e, &node, next)));
        }
    };
    let columns = node.props().columns();

    let add = edit.clone();
    let remove = edit.clone();
    let update = edit;
    TableContext {
        on_add_row: Callback::new(move |_: ()| add(&|rows| add_row(rows, &columns))),
        on_remove_row: Callback::new(move |row: usize| remove(&|rows| remove_row(rows, row))),
        on_update_cell: Callback::new(move |(row, key, cell): (usize, String, Value)| {
            update(&|rows| update_cell(rows, row, &key, cell.clone()))
        }),
    }
}
