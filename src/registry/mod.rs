//! Field Component Registry
//!
//! Maps every `NodeType` to a renderer. Two registries exist: a static preview
//! for the builder canvas and an interactive one for respondents. Both are
//! exhaustive matches, so a new node type does not compile until both handle it.
//! Renderers own no state; values flow in through [`FieldContext`].

mod builder;
mod respondent;

pub use builder::render_builder_node;
pub use respondent::render_respondent_node;

use leptos::prelude::*;
use serde_json::Value;

use form_schema::{display_name, Node};

/// Value, error and change callback for one respondent field
#[derive(Clone, Copy)]
pub struct FieldContext {
    pub value: Signal<Option<Value>>,
    pub error: Signal<Option<String>>,
    pub on_change: Callback<Value>,
    /// Row editing, supplied for table nodes only
    pub table: Option<TableContext>,
}

/// Row editing callbacks for table fields
#[derive(Clone, Copy)]
pub struct TableContext {
    pub on_add_row: Callback<()>,
    pub on_remove_row: Callback<usize>,
    /// (row, column key, cell value)
    pub on_update_cell: Callback<(usize, String, Value)>,
}

// ========================
// Shared Renderers
// ========================

/// Label shown above a field; falls back to the type's display name
fn field_label(node: &Node) -> String {
    node.props()
        .label()
        .filter(|l| !l.trim().is_empty())
        .unwrap_or(display_name(node.node_type()))
        .to_string()
}

fn label_view(node: &Node) -> impl IntoView {
    let required = node.props().required();
    view! {
        <label class="field-label">
            {field_label(node)}
            {required.then(|| view! { <span class="required-mark">"*"</span> })}
        </label>
    }
}

/// Text of a display node (heading, paragraph, help text)
fn display_text(node: &Node) -> String {
    let p = node.props();
    p.text().or(p.label()).unwrap_or_default().to_string()
}

fn heading_view(level: u8, text: String) -> AnyView {
    match level {
        1 => view! { <h1 class="form-heading">{text}</h1> }.into_any(),
        2 => view! { <h2 class="form-heading">{text}</h2> }.into_any(),
        3 => view! { <h3 class="form-heading">{text}</h3> }.into_any(),
        4 => view! { <h4 class="form-heading">{text}</h4> }.into_any(),
        5 => view! { <h5 class="form-heading">{text}</h5> }.into_any(),
        _ => view! { <h6 class="form-heading">{text}</h6> }.into_any(),
    }
}

fn paragraph_view(node: &Node) -> AnyView {
    view! { <p class="form-paragraph">{display_text(node)}</p> }.into_any()
}

fn help_text_view(node: &Node) -> AnyView {
    view! { <p class="form-help-text">{display_text(node)}</p> }.into_any()
}

fn image_view(node: &Node) -> AnyView {
    let p = node.props();
    let alt = p.str(form_schema::props::ALT).unwrap_or_default().to_string();
    match p.str(form_schema::props::SRC).filter(|s| !s.is_empty()) {
        Some(src) => view! { <img class="form-image" src=src.to_string() alt=alt /> }.into_any(),
        None => view! { <div class="form-image placeholder">"No image selected"</div> }.into_any(),
    }
}

fn divider_view() -> AnyView {
    view! { <hr class="form-divider" /> }.into_any()
}

fn page_break_view() -> AnyView {
    view! { <div class="form-page-break"><span>"Page break"</span></div> }.into_any()
}

fn unknown_view(node: &Node) -> AnyView {
    log::warn!("[REGISTRY] No renderer for node {}", node.id());
    view! {
        <div class="field-unknown">
            <strong>"Unknown field type"</strong>
            <span class="field-unknown-id">{node.id().to_string()}</span>
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;
    use form_schema::{props, NodeType, Props};

    #[test]
    fn test_field_label_fallback() {
        let blank = Node::new(NodeType::Number, Props::new().with(props::LABEL, "  "));
        assert_eq!(field_label(&blank), "Number");
        let named = Node::new(NodeType::Number, Props::new().with(props::LABEL, "Age"));
        assert_eq!(field_label(&named), "Age");
    }

    #[test]
    fn test_display_text_prefers_text() {
        let node = Node::new(
            NodeType::H2,
            Props::new().with(props::TEXT, "Contact").with(props::LABEL, "ignored"),
        );
        assert_eq!(display_text(&node), "Contact");
        let bare = Node::new(NodeType::Paragraph, Props::new());
        assert_eq!(display_text(&bare), "");
    }
}
