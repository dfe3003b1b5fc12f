//! Respondent Renderers
//!
//! Interactive fields for filling in a form. Values and errors are read from
//! the [`FieldContext`]; every edit goes back through `on_change`.

use leptos::prelude::*;
use serde_json::{Number, Value};

use form_schema::answers::toggle_choice;
use form_schema::{Node, NodeType};

use super::{
    display_text, divider_view, heading_view, help_text_view, image_view, label_view,
    page_break_view, paragraph_view, unknown_view, FieldContext, TableContext,
};

/// Render the interactive field for a node
pub fn render_respondent_node(node: &Node, ctx: FieldContext) -> AnyView {
    match node.node_type() {
        NodeType::H1 => heading_view(1, display_text(node)),
        NodeType::H2 => heading_view(2, display_text(node)),
        NodeType::H3 => heading_view(3, display_text(node)),
        NodeType::H4 => heading_view(4, display_text(node)),
        NodeType::H5 => heading_view(5, display_text(node)),
        NodeType::H6 => heading_view(6, display_text(node)),
        NodeType::Paragraph => paragraph_view(node),
        NodeType::HelpText => help_text_view(node),
        NodeType::Text => text_input(node, ctx, "text"),
        NodeType::Textarea => textarea_input(node, ctx),
        NodeType::Number => number_input(node, ctx),
        NodeType::Date => text_input(node, ctx, "date"),
        NodeType::Time => text_input(node, ctx, "time"),
        NodeType::Datetime => text_input(node, ctx, "datetime-local"),
        NodeType::File => file_input(node, ctx),
        NodeType::Select => select_input(node, ctx),
        NodeType::Multiselect => multi_choice(node, ctx, "multiselect-group"),
        NodeType::Radio => radio_group(node, ctx),
        NodeType::Checkbox => multi_choice(node, ctx, "choice-group"),
        NodeType::Table => match ctx.table {
            Some(table) => table_input(node, ctx, table),
            None => {
                log::warn!("[REGISTRY] Table {} rendered without row callbacks", node.id());
                unknown_view(node)
            }
        },
        NodeType::Image => image_view(node),
        NodeType::Divider => divider_view(),
        NodeType::PageBreak => page_break_view(),
        NodeType::Submit => button(node, "submit", "Submit"),
        NodeType::Reset => button(node, "reset", "Reset"),
        NodeType::Unknown => unknown_view(node),
    }
}

// ========================
// Value Helpers
// ========================

/// Text to show in an input for a stored value
fn value_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

/// Number inputs store numbers; blank is null, anything else stays text
fn number_value(raw: &str) -> Value {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Value::Null;
    }
    trimmed
        .parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map(Value::Number)
        .unwrap_or_else(|| Value::String(raw.to_string()))
}

fn is_selected(value: Option<&Value>, option: &str) -> bool {
    match value {
        Some(Value::Array(items)) => items.iter().any(|v| v.as_str() == Some(option)),
        Some(Value::String(s)) => s == option,
        _ => false,
    }
}

fn cell_input_type(column_type: &str) -> &'static str {
    match column_type {
        "number" => "number",
        "date" => "date",
        "time" => "time",
        "email" => "email",
        _ => "text",
    }
}

// ========================
// Renderers
// ========================

fn error_view(ctx: FieldContext) -> impl IntoView {
    move || ctx.error.get().map(|e| view! { <p class="field-error">{e}</p> })
}

fn field_class(ctx: FieldContext) -> impl Fn() -> &'static str + Send + Sync + 'static {
    move || {
        if ctx.error.with(Option::is_some) {
            "form-field has-error"
        } else {
            "form-field"
        }
    }
}

fn text_input(node: &Node, ctx: FieldContext, input_type: &'static str) -> AnyView {
    let placeholder = node.props().placeholder().unwrap_or_default().to_string();
    view! {
        <div class=field_class(ctx)>
            {label_view(node)}
            <input
                type=input_type
                class="field-input"
                placeholder=placeholder
                prop:value=move || ctx.value.with(|v| value_text(v.as_ref()))
                on:input=move |ev| ctx.on_change.run(Value::String(event_target_value(&ev)))
            />
            {error_view(ctx)}
        </div>
    }
    .into_any()
}

fn number_input(node: &Node, ctx: FieldContext) -> AnyView {
    let p = node.props();
    let placeholder = p.placeholder().unwrap_or_default().to_string();
    let min = p.number(form_schema::props::MIN).map(|n| n.to_string());
    let max = p.number(form_schema::props::MAX).map(|n| n.to_string());
    let step = p.number(form_schema::props::STEP).map(|n| n.to_string());
    view! {
        <div class=field_class(ctx)>
            {label_view(node)}
            <input
                type="number"
                class="field-input"
                placeholder=placeholder
                min=min
                max=max
                step=step
                prop:value=move || ctx.value.with(|v| value_text(v.as_ref()))
                on:input=move |ev| ctx.on_change.run(number_value(&event_target_value(&ev)))
            />
            {error_view(ctx)}
        </div>
    }
    .into_any()
}

fn textarea_input(node: &Node, ctx: FieldContext) -> AnyView {
    let placeholder = node.props().placeholder().unwrap_or_default().to_string();
    view! {
        <div class=field_class(ctx)>
            {label_view(node)}
            <textarea
                class="field-input"
                rows=4
                placeholder=placeholder
                prop:value=move || ctx.value.with(|v| value_text(v.as_ref()))
                on:input=move |ev| ctx.on_change.run(Value::String(event_target_value(&ev)))
            ></textarea>
            {error_view(ctx)}
        </div>
    }
    .into_any()
}

/// File inputs cannot be written to; only the chosen file name is kept
fn file_input(node: &Node, ctx: FieldContext) -> AnyView {
    view! {
        <div class=field_class(ctx)>
            {label_view(node)}
            <input
                type="file"
                class="field-input"
                on:change=move |ev| {
                    let path = event_target_value(&ev);
                    let name = path.rsplit(|c: char| c == '/' || c == '\\').next().unwrap_or_default().to_string();
                    ctx.on_change.run(Value::String(name));
                }
            />
            {error_view(ctx)}
        </div>
    }
    .into_any()
}

fn select_input(node: &Node, ctx: FieldContext) -> AnyView {
    let placeholder = node
        .props()
        .placeholder()
        .filter(|p| !p.is_empty())
        .unwrap_or("Select...")
        .to_string();
    let options = node.props().options();
    view! {
        <div class=field_class(ctx)>
            {label_view(node)}
            <select
                class="field-input"
                prop:value=move || ctx.value.with(|v| value_text(v.as_ref()))
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    ctx.on_change.run(if value.is_empty() { Value::Null } else { Value::String(value) });
                }
            >
                <option value="">{placeholder}</option>
                {options
                    .into_iter()
                    .map(|option| view! { <option value=option.value>{option.label}</option> })
                    .collect_view()}
            </select>
            {error_view(ctx)}
        </div>
    }
    .into_any()
}

fn radio_group(node: &Node, ctx: FieldContext) -> AnyView {
    let group = node.id().to_string();
    let options = node.props().options();
    view! {
        <div class=field_class(ctx)>
            {label_view(node)}
            <div class="choice-group">
                {options
                    .into_iter()
                    .map(|option| {
                        let value = option.value;
                        let attr_value = value.clone();
                        let checked_value = value.clone();
                        view! {
                            <label class="choice-option">
                                <input
                                    type="radio"
                                    name=group.clone()
                                    value=attr_value
                                    prop:checked=move || ctx.value.with(|v| is_selected(v.as_ref(), &checked_value))
                                    on:change=move |_| ctx.on_change.run(Value::String(value.clone()))
                                />
                                <span>{option.label}</span>
                            </label>
                        }
                    })
                    .collect_view()}
            </div>
            {error_view(ctx)}
        </div>
    }
    .into_any()
}

/// Checkbox group; also used for multiselect. The answer is an array of
/// selected option values.
fn multi_choice(node: &Node, ctx: FieldContext, group_class: &'static str) -> AnyView {
    let options = node.props().options();
    view! {
        <div class=field_class(ctx)>
            {label_view(node)}
            <div class=group_class>
                {options
                    .into_iter()
                    .map(|option| {
                        let value = option.value;
                        let attr_value = value.clone();
                        let checked_value = value.clone();
                        view! {
                            <label class="choice-option">
                                <input
                                    type="checkbox"
                                    value=attr_value
                                    prop:checked=move || ctx.value.with(|v| is_selected(v.as_ref(), &checked_value))
                                    on:change=move |_| {
                                        let next = ctx.value.with_untracked(|v| toggle_choice(v.as_ref(), &value));
                                        ctx.on_change.run(next);
                                    }
                                />
                                <span>{option.label}</span>
                            </label>
                        }
                    })
                    .collect_view()}
            </div>
            {error_view(ctx)}
        </div>
    }
    .into_any()
}

fn table_input(node: &Node, ctx: FieldContext, table: TableContext) -> AnyView {
    let columns = node.props().columns();
    let headers = columns.clone();
    let row_count = move || ctx.value.with(|v| match v {
        Some(Value::Array(rows)) => rows.len(),
        _ => 0,
    });
    view! {
        <div class=field_class(ctx)>
            {label_view(node)}
            <table class="field-table">
                <thead>
                    <tr>
                        {headers.into_iter().map(|c| view! { <th>{c.label}</th> }).collect_view()}
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || 0..row_count()
                        key=|row| *row
                        children=move |row| {
                            let cells = columns
                                .iter()
                                .map(|column| {
                                    let key = column.key.clone();
                                    let read_key = key.clone();
                                    view! {
                                        <td>
                                            <input
                                                type=cell_input_type(&column.column_type)
                                                class="field-input"
                                                prop:value=move || ctx.value.with(|v| {
                                                    let cell = v
                                                        .as_ref()
                                                        .and_then(|rows| rows.get(row))
                                                        .and_then(|r| r.get(&read_key));
                                                    value_text(cell)
                                                })
                                                on:input=move |ev| {
                                                    table.on_update_cell.run((row, key.clone(), Value::String(event_target_value(&ev))));
                                                }
                                            />
                                        </td>
                                    }
                                })
                                .collect_view();
                            view! {
                                <tr>
                                    {cells}
                                    <td>
                                        <button
                                            type="button"
                                            class="row-delete-btn"
                                            on:click=move |_| table.on_remove_row.run(row)
                                        >
                                            "×"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
            <button type="button" class="row-add-btn" on:click=move |_| table.on_add_row.run(())>
                "+ Add row"
            </button>
            {error_view(ctx)}
        </div>
    }
    .into_any()
}

fn button(node: &Node, button_type: &'static str, fallback: &'static str) -> AnyView {
    let label = node
        .props()
        .label()
        .filter(|l| !l.is_empty())
        .unwrap_or(fallback)
        .to_string();
    let class = if button_type == "reset" { "form-button secondary" } else { "form-button primary" };
    view! { <button type=button_type class=class>{label}</button> }.into_any()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_value_text() {
        assert_eq!(value_text(Some(&json!("abc"))), "abc");
        assert_eq!(value_text(Some(&json!(42))), "42");
        assert_eq!(value_text(Some(&Value::Null)), "");
        assert_eq!(value_text(None), "");
    }

    #[test]
    fn test_number_value() {
        assert_eq!(number_value(""), Value::Null);
        assert_eq!(number_value(" 3.5 "), json!(3.5));
        assert_eq!(number_value("-"), json!("-"));
    }

    #[test]
    fn test_is_selected() {
        assert!(is_selected(Some(&json!(["a", "b"])), "b"));
        assert!(!is_selected(Some(&json!(["a"])), "b"));
        assert!(is_selected(Some(&json!("a")), "a"));
        assert!(!is_selected(None, "a"));
    }

    #[test]
    fn test_cell_input_type() {
        assert_eq!(cell_input_type("number"), "number");
        assert_eq!(cell_input_type("text"), "text");
        assert_eq!(cell_input_type("whatever"), "text");
    }
}
