//! Document → backend components

use serde_json::{json, Value};

use crate::document::Document;
use crate::node::{FieldKind, Node, NodeType};
use crate::props;

use super::component::{BackendComponent, FUNCTION, HEADING, INPUT_TYPE, ORDER};

/// Backend type token for a node type
///
/// `None` means the backend cannot store the type. `select` and
/// `multiselect` land here too: the backend has no save path for them.
pub fn backend_token(node_type: NodeType) -> Option<&'static str> {
    match node_type {
        NodeType::H1 | NodeType::H2 | NodeType::H3 | NodeType::H4 | NodeType::H5 | NodeType::H6 => {
            Some("heading")
        }
        NodeType::Text => Some("text"),
        NodeType::Textarea => Some("textarea"),
        NodeType::Number => Some("number"),
        NodeType::Date => Some("date"),
        NodeType::Time => Some("time"),
        NodeType::Datetime => Some("datetime-local"),
        NodeType::File => Some("file"),
        NodeType::Checkbox => Some("checkbox"),
        NodeType::Radio => Some("radio"),
        NodeType::Table => Some("table"),
        NodeType::Submit | NodeType::Reset => Some("button"),
        NodeType::Select
        | NodeType::Multiselect
        | NodeType::Paragraph
        | NodeType::HelpText
        | NodeType::Image
        | NodeType::Divider
        | NodeType::PageBreak
        | NodeType::Unknown => None,
    }
}

/// Serialize a document; unconvertible nodes are skipped and do not
/// consume an `order` slot.
pub fn to_backend_components(doc: &Document) -> Vec<BackendComponent> {
    let mut components = Vec::with_capacity(doc.nodes.len());
    for node in &doc.nodes {
        let order = components.len() as i64 + 1;
        match to_backend_component(node, order) {
            Some(component) => components.push(component),
            None => log::debug!(
                "[ADAPTER] Skipping node {} of type '{}': no backend representation",
                node.id(),
                node.node_type()
            ),
        }
    }
    components
}

pub fn to_backend_component(node: &Node, order: i64) -> Option<BackendComponent> {
    let node_type = node.node_type();
    let token = backend_token(node_type)?;
    let p = node.props();

    let label = match node_type.kind() {
        FieldKind::Heading => p.text().or(p.label()).unwrap_or(""),
        FieldKind::Button => p.label().unwrap_or(default_button_label(node_type)),
        _ => p.label().unwrap_or(""),
    };

    let name = p
        .str(props::NAME)
        .filter(|n| !n.is_empty())
        .map(str::to_string)
        .or_else(|| Some(snake_case(label)).filter(|s| !s.is_empty()))
        .unwrap_or_else(|| format!("{}_{}", token, order));

    let mut component = BackendComponent::new(token, name, order)
        .with_property(INPUT_TYPE, token)
        .with_property(ORDER, order)
        .with_property("label", label);
    component.id = p.component_id();

    if let Some(level) = node_type.heading_level() {
        component = component.with_property(HEADING, level);
        return Some(component);
    }

    if node_type.accepts_answer() {
        component = component.with_property("required", p.required());
    }
    if let Some(placeholder) = p.placeholder().filter(|s| !s.is_empty()) {
        component = component.with_property("placeholder", placeholder);
    }
    for key in [props::MIN, props::MAX, props::STEP] {
        if let Some(n) = p.number(key) {
            component = component.with_property(key, n);
        }
    }

    match node_type {
        NodeType::Checkbox => {
            let options: Vec<Value> = if p.has_no_backend_options() {
                Vec::new()
            } else {
                p.options().iter().map(|o| json!({ "label": o.label })).collect()
            };
            component = component.with_property("options", options);
        }
        NodeType::Radio => {
            let options: Vec<Value> = p
                .options()
                .iter()
                .map(|o| json!({ "label": o.label, "value": o.value }))
                .collect();
            component = component.with_property("options", options);
        }
        NodeType::Table => {
            component = component.with_property("columns", props::columns_value(&p.columns()));
        }
        NodeType::Submit => component = component.with_property(FUNCTION, "submit"),
        NodeType::Reset => component = component.with_property(FUNCTION, "reset"),
        _ => {}
    }

    Some(component)
}

fn default_button_label(node_type: NodeType) -> &'static str {
    match node_type {
        NodeType::Reset => "Reset",
        _ => "Submit",
    }
}

/// "Your E-mail?" → "your_e_mail"
fn snake_case(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    for c in label.chars() {
        if c.is_alphanumeric() {
            out.extend(c.to_lowercase());
        } else if !out.is_empty() && !out.ends_with('_') {
            out.push('_');
        }
    }
    while out.ends_with('_') {
        out.pop();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::props::{FieldOption, Props};
    use pretty_assertions::assert_eq;

    fn node(node_type: NodeType, props: Props) -> Node {
        Node::new(node_type, props)
    }

    #[test]
    fn test_order_skips_unconvertible_nodes() {
        let doc = Document::new(
            "Form",
            vec![
                node(NodeType::Text, Props::new().with(props::LABEL, "Name")),
                node(NodeType::Divider, Props::new()),
                node(NodeType::Select, Props::new().with(props::LABEL, "Team")),
                node(NodeType::Number, Props::new().with(props::LABEL, "Age")),
            ],
        );
        let components = to_backend_components(&doc);
        assert_eq!(components.len(), 2);
        assert_eq!(components[0].order, 1);
        assert_eq!(components[1].order, 2);
        assert_eq!(components[1].component_type, "number");
        assert_eq!(components[1].sort_order(), 2);
    }

    #[test]
    fn test_datetime_token() {
        let c = to_backend_component(&node(NodeType::Datetime, Props::new()), 1).unwrap();
        assert_eq!(c.component_type, "datetime-local");
        assert_eq!(c.input_type(), "datetime-local");
    }

    #[test]
    fn test_buttons_carry_function() {
        let submit = to_backend_component(&node(NodeType::Submit, Props::new()), 3).unwrap();
        assert_eq!(submit.component_type, "button");
        assert_eq!(submit.str_property(FUNCTION), Some("submit"));
        assert_eq!(submit.label(), "Submit");

        let reset = to_backend_component(&node(NodeType::Reset, Props::new()), 4).unwrap();
        assert_eq!(reset.str_property(FUNCTION), Some("reset"));
    }

    #[test]
    fn test_checkbox_options_are_label_only() {
        let mut p = Props::new().with(props::LABEL, "Toppings");
        p.set_options(&[FieldOption::new("ham", "Ham"), FieldOption::new("egg", "Egg")]);
        let c = to_backend_component(&node(NodeType::Checkbox, p), 1).unwrap();
        assert_eq!(c.properties["options"], json!([{"label": "Ham"}, {"label": "Egg"}]));
    }

    #[test]
    fn test_radio_options_keep_values() {
        let mut p = Props::new().with(props::LABEL, "Size");
        p.set_options(&[FieldOption::new("s", "Small")]);
        let c = to_backend_component(&node(NodeType::Radio, p), 1).unwrap();
        assert_eq!(c.properties["options"], json!([{"label": "Small", "value": "s"}]));
    }

    #[test]
    fn test_synthesized_checkbox_options_not_persisted() {
        let mut p = Props::new()
            .with(props::LABEL, "Agree")
            .with(props::HAS_NO_BACKEND_OPTIONS, true);
        p.set_options(&[FieldOption::labelled("Agree")]);
        let c = to_backend_component(&node(NodeType::Checkbox, p), 1).unwrap();
        assert_eq!(c.properties["options"], json!([]));
    }

    #[test]
    fn test_heading_serialized_with_level() {
        let c = to_backend_component(
            &node(NodeType::H3, Props::new().with(props::TEXT, "Contact")),
            1,
        )
        .unwrap();
        assert_eq!(c.input_type(), "heading");
        assert_eq!(c.heading_level(), 3);
        assert_eq!(c.label(), "Contact");
        assert!(!c.properties.contains_key("required"));
    }

    #[test]
    fn test_constraints_and_placeholder() {
        let p = Props::new()
            .with(props::LABEL, "Qty")
            .with(props::PLACEHOLDER, "1-10")
            .with(props::REQUIRED, true)
            .with(props::MIN, 1)
            .with(props::MAX, "10");
        let c = to_backend_component(&node(NodeType::Number, p), 1).unwrap();
        assert_eq!(c.str_property("placeholder"), Some("1-10"));
        assert!(c.flag("required"));
        assert_eq!(c.number_property("min"), Some(1.0));
        assert_eq!(c.number_property("max"), Some(10.0));
    }

    #[test]
    fn test_name_from_label_or_fallback() {
        let c = to_backend_component(
            &node(NodeType::Text, Props::new().with(props::LABEL, "Your E-mail?")),
            1,
        )
        .unwrap();
        assert_eq!(c.name, "your_e_mail");

        let c = to_backend_component(&node(NodeType::Text, Props::new()), 5).unwrap();
        assert_eq!(c.name, "text_5");
    }

    #[test]
    fn test_loaded_component_keeps_id() {
        let p = Props::new()
            .with(props::LABEL, "Name")
            .with(props::COMPONENT_ID, 91)
            .with(props::NAME, "full_name");
        let c = to_backend_component(&node(NodeType::Text, p), 1).unwrap();
        assert_eq!(c.id, Some(91));
        assert_eq!(c.name, "full_name");
    }

    #[test]
    fn test_unsupported_types_have_no_token() {
        for t in [NodeType::Select, NodeType::Multiselect, NodeType::Image, NodeType::Unknown] {
            assert_eq!(backend_token(t), None);
        }
    }
}
