//! Properties Panel Component
//!
//! Right column: edits the selected node's props. Every edit dispatches an
//! `UpdateNode` with only the changed keys.

use leptos::prelude::*;
use serde_json::Value;

use form_schema::props::{self, columns_value, options_value};
use form_schema::{display_name, FieldKind, FieldOption, NodeId, NodeType, Props, SchemaAction, TableColumn};

use crate::store::{dispatch, use_builder_store, BuilderStateStoreFields};

/// Parse a numeric constraint; blank clears it
fn constraint_value(raw: &str) -> Value {
    raw.trim()
        .parse::<f64>()
        .ok()
        .and_then(serde_json::Number::from_f64)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}

/// Next default option, numbered after the existing ones
fn next_option(existing: &[FieldOption]) -> FieldOption {
    let n = existing.len() + 1;
    FieldOption::new(format!("option_{}", n), format!("Option {}", n))
}

fn next_column(existing: &[TableColumn]) -> TableColumn {
    let n = existing.len() + 1;
    TableColumn::new(format!("column_{}", n), format!("Column {}", n))
}

#[component]
pub fn PropertiesPanel() -> impl IntoView {
    let store = use_builder_store();

    // Changes only when another node is selected, so inputs keep focus while typing
    let selected = Memo::new(move |_| {
        store
            .selected_id()
            .get()
            .filter(|id| store.document().with(|d| d.node(id).is_some()))
    });

    view! {
        <aside class="properties-panel">
            <h2 class="panel-title">"Properties"</h2>
            {move || match selected.get() {
                Some(id) => view! { <NodeProperties id=id /> }.into_any(),
                None => view! { <p class="properties-empty">"Select a field to edit it"</p> }.into_any(),
            }}
        </aside>
    }
}

#[component]
fn NodeProperties(id: NodeId) -> impl IntoView {
    let store = use_builder_store();

    let lookup_id = id.clone();
    let current = Memo::new(move |_| {
        store
            .document()
            .with(|d| d.node(&lookup_id).map(|n| n.props().clone()))
            .unwrap_or_default()
    });
    let node_type = store
        .document()
        .with_untracked(|d| d.node(&id).map(|n| n.node_type()))
        .unwrap_or(NodeType::Unknown);

    let update = Callback::new(move |(key, value): (&'static str, Value)| {
        dispatch(
            &store,
            SchemaAction::UpdateNode {
                id: id.clone(),
                props: Props::new().with(key, value),
            },
        );
    });

    let editors = match node_type.kind() {
        FieldKind::Heading | FieldKind::Display => view! {
            <TextProp label="Text" prop_key=props::TEXT current=current update=update multiline=true />
        }
        .into_any(),
        FieldKind::Input => view! {
            <TextProp label="Label" prop_key=props::LABEL current=current update=update />
            <TextProp label="Placeholder" prop_key=props::PLACEHOLDER current=current update=update />
            <FlagProp label="Required" prop_key=props::REQUIRED current=current update=update />
            {(node_type == NodeType::Number).then(|| view! {
                <NumberProp label="Minimum" prop_key=props::MIN current=current update=update />
                <NumberProp label="Maximum" prop_key=props::MAX current=current update=update />
                <NumberProp label="Step" prop_key=props::STEP current=current update=update />
            })}
            <FlagProp label="Visible in preview" prop_key=props::VISIBLE_IN_PREVIEW current=current update=update />
        }
        .into_any(),
        FieldKind::Choice => view! {
            <TextProp label="Label" prop_key=props::LABEL current=current update=update />
            {matches!(node_type, NodeType::Select | NodeType::Multiselect).then(|| view! {
                <TextProp label="Placeholder" prop_key=props::PLACEHOLDER current=current update=update />
            })}
            <FlagProp label="Required" prop_key=props::REQUIRED current=current update=update />
            <OptionsEditor current=current update=update />
            <FlagProp label="Visible in preview" prop_key=props::VISIBLE_IN_PREVIEW current=current update=update />
        }
        .into_any(),
        FieldKind::Table => view! {
            <TextProp label="Label" prop_key=props::LABEL current=current update=update />
            <FlagProp label="Required" prop_key=props::REQUIRED current=current update=update />
            <ColumnsEditor current=current update=update />
        }
        .into_any(),
        FieldKind::Media => match node_type {
            NodeType::Image => view! {
                <TextProp label="Image URL" prop_key=props::SRC current=current update=update />
                <TextProp label="Alt text" prop_key=props::ALT current=current update=update />
            }
            .into_any(),
            _ => view! { <p class="properties-empty">"No properties"</p> }.into_any(),
        },
        FieldKind::Button => view! {
            <TextProp label="Button text" prop_key=props::LABEL current=current update=update />
        }
        .into_any(),
        FieldKind::Unknown => view! {
            <p class="properties-empty">"Unknown field type; nothing to edit"</p>
        }
        .into_any(),
    };

    view! {
        <div class="node-properties">
            <div class="node-properties-type">{display_name(node_type)}</div>
            {editors}
        </div>
    }
}

// ========================
// Property Editors
// ========================

#[component]
fn TextProp(
    label: &'static str,
    prop_key: &'static str,
    current: Memo<Props>,
    update: Callback<(&'static str, Value)>,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let value = move || current.with(|p| p.str(prop_key).unwrap_or_default().to_string());
    let input = if multiline {
        view! {
            <textarea
                class="prop-input"
                rows=3
                prop:value=value
                on:input=move |ev| update.run((prop_key, Value::String(event_target_value(&ev))))
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                type="text"
                class="prop-input"
                prop:value=value
                on:input=move |ev| update.run((prop_key, Value::String(event_target_value(&ev))))
            />
        }
        .into_any()
    };
    view! {
        <label class="prop-row">
            <span class="prop-label">{label}</span>
            {input}
        </label>
    }
}

#[component]
fn NumberProp(
    label: &'static str,
    prop_key: &'static str,
    current: Memo<Props>,
    update: Callback<(&'static str, Value)>,
) -> impl IntoView {
    let value = move || current.with(|p| p.number(prop_key).map(|n| n.to_string()).unwrap_or_default());
    view! {
        <label class="prop-row">
            <span class="prop-label">{label}</span>
            <input
                type="number"
                class="prop-input"
                prop:value=value
                on:input=move |ev| update.run((prop_key, constraint_value(&event_target_value(&ev))))
            />
        </label>
    }
}

#[component]
fn FlagProp(
    label: &'static str,
    prop_key: &'static str,
    current: Memo<Props>,
    update: Callback<(&'static str, Value)>,
) -> impl IntoView {
    // visibleInPreview defaults to on when absent
    let checked = move || {
        current.with(|p| {
            if prop_key == props::VISIBLE_IN_PREVIEW {
                p.visible_in_preview()
            } else {
                p.flag(prop_key)
            }
        })
    };
    view! {
        <label class="prop-row checkbox">
            <input
                type="checkbox"
                prop:checked=checked
                on:change=move |ev| update.run((prop_key, Value::Bool(event_target_checked(&ev))))
            />
            <span class="prop-label">{label}</span>
        </label>
    }
}

#[component]
fn OptionsEditor(current: Memo<Props>, update: Callback<(&'static str, Value)>) -> impl IntoView {
    let options = move || current.with(Props::options);
    let commit = move |next: Vec<FieldOption>| update.run((props::OPTIONS, options_value(&next)));

    view! {
        <div class="prop-list">
            <span class="prop-label">"Options"</span>
            <For
                each=move || 0..current.with(|p| p.options().len())
                key=|i| *i
                children=move |i| {
                    let label = move || options().get(i).map(|o| o.label.clone()).unwrap_or_default();
                    let value = move || options().get(i).map(|o| o.value.clone()).unwrap_or_default();
                    view! {
                        <div class="prop-list-row">
                            <input
                                type="text"
                                class="prop-input"
                                placeholder="Label"
                                prop:value=label
                                on:input=move |ev| {
                                    let mut next = current.with_untracked(Props::options);
                                    if let Some(option) = next.get_mut(i) {
                                        option.label = event_target_value(&ev);
                                    }
                                    commit(next);
                                }
                            />
                            <input
                                type="text"
                                class="prop-input"
                                placeholder="Value"
                                prop:value=value
                                on:input=move |ev| {
                                    let mut next = current.with_untracked(Props::options);
                                    if let Some(option) = next.get_mut(i) {
                                        option.value = event_target_value(&ev);
                                    }
                                    commit(next);
                                }
                            />
                            <button
                                type="button"
                                class="prop-list-remove"
                                title="Remove option"
                                on:click=move |_| {
                                    let mut next = current.with_untracked(Props::options);
                                    if i < next.len() {
                                        next.remove(i);
                                    }
                                    commit(next);
                                }
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
            <button
                type="button"
                class="prop-list-add"
                on:click=move |_| {
                    let mut next = current.with_untracked(Props::options);
                    next.push(next_option(&next));
                    commit(next);
                }
            >
                "+ Add option"
            </button>
        </div>
    }
}

#[component]
fn ColumnsEditor(current: Memo<Props>, update: Callback<(&'static str, Value)>) -> impl IntoView {
    let columns = move || current.with(Props::columns);
    let commit = move |next: Vec<TableColumn>| update.run((props::COLUMNS, columns_value(&next)));

    view! {
        <div class="prop-list">
            <span class="prop-label">"Columns"</span>
            <For
                each=move || 0..current.with(|p| p.columns().len())
                key=|i| *i
                children=move |i| {
                    let label = move || columns().get(i).map(|c| c.label.clone()).unwrap_or_default();
                    let key = move || columns().get(i).map(|c| c.key.clone()).unwrap_or_default();
                    view! {
                        <div class="prop-list-row">
                            <input
                                type="text"
                                class="prop-input"
                                placeholder="Header"
                                prop:value=label
                                on:input=move |ev| {
                                    let mut next = current.with_untracked(Props::columns);
                                    if let Some(column) = next.get_mut(i) {
                                        column.label = event_target_value(&ev);
                                    }
                                    commit(next);
                                }
                            />
                            <input
                                type="text"
                                class="prop-input"
                                placeholder="Key"
                                prop:value=key
                                on:input=move |ev| {
                                    let mut next = current.with_untracked(Props::columns);
                                    if let Some(column) = next.get_mut(i) {
                                        column.key = event_target_value(&ev);
                                    }
                                    commit(next);
                                }
                            />
                            <button
                                type="button"
                                class="prop-list-remove"
                                title="Remove column"
                                on:click=move |_| {
                                    let mut next = current.with_untracked(Props::columns);
                                    if i < next.len() {
                                        next.remove(i);
                                    }
                                    commit(next);
                                }
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
            <button
                type="button"
                class="prop-list-add"
                on:click=move |_| {
                    let mut next = current.with_untracked(Props::columns);
                    next.push(next_column(&next));
                    commit(next);
                }
            >
                "+ Add column"
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_constraint_value() {
        assert_eq!(constraint_value("10"), json!(10.0));
        assert_eq!(constraint_value(" 0.5"), json!(0.5));
        assert_eq!(constraint_value(""), Value::Null);
        assert_eq!(constraint_value("abc"), Value::Null);
    }

    #[test]
    fn test_next_option_numbering() {
        let existing = vec![FieldOption::new("option_1", "Option 1")];
        assert_eq!(next_option(&existing), FieldOption::new("option_2", "Option 2"));
        assert_eq!(next_column(&[]).key, "column_1");
    }
}
