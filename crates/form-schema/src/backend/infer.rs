//! Type Inference
//!
//! Reconstructs a `NodeType` from a backend component. The backend keeps a
//! narrower vocabulary than the builder, so ambiguous components are
//! reclassified from keywords in their name and label.
//!
//! Rules, first match wins:
//! 1. `inputType == "heading"` becomes `h{level}`.
//! 2. Unambiguous tokens map directly.
//! 3. `checkbox` always stays a checkbox (options are patched on load).
//! 4. `radio` needs options, otherwise it degrades to `text`.
//! 5. `button` reads `function`, then the label; defaults to submit.
//! 6. The generic `input` token is classified by keywords.
//! 7. Anything else is logged and classified by keywords, or dropped.

use crate::node::NodeType;

use super::component::{BackendComponent, FUNCTION};

const SELECT_KEYWORDS: &[&str] = &["select", "dropdown", "department", "choose"];
const RADIO_KEYWORDS: &[&str] = &["radio"];
const CHECKBOX_KEYWORDS: &[&str] = &["agree", "terms", "accept", "checkbox"];

pub fn infer_node_type(component: &BackendComponent) -> Option<NodeType> {
    let token = component.input_type().to_ascii_lowercase();

    if token == "heading" {
        return Some(NodeType::heading(component.heading_level()));
    }
    if let Some(node_type) = direct_type(&token) {
        return Some(node_type);
    }

    match token.as_str() {
        "checkbox" => Some(NodeType::Checkbox),
        "radio" if component.has_options() => Some(NodeType::Radio),
        "radio" => Some(NodeType::Text),
        "button" => Some(button_type(component)),
        "input" => Some(generic_input_type(component)),
        other => {
            log::warn!(
                "[ADAPTER] Unrecognized component type '{}' (name '{}'), inferring from keywords",
                other,
                component.name
            );
            unrecognized_type(component)
        }
    }
}

/// Tokens whose meaning is unambiguous
pub fn direct_type(token: &str) -> Option<NodeType> {
    match token {
        "text" => Some(NodeType::Text),
        "number" => Some(NodeType::Number),
        "datetime-local" | "datetime" => Some(NodeType::Datetime),
        "select" => Some(NodeType::Select),
        "textarea" => Some(NodeType::Textarea),
        "file" => Some(NodeType::File),
        "date" => Some(NodeType::Date),
        "time" => Some(NodeType::Time),
        "table" => Some(NodeType::Table),
        _ => None,
    }
}

fn button_type(component: &BackendComponent) -> NodeType {
    let function = component
        .str_property(FUNCTION)
        .unwrap_or("")
        .to_ascii_lowercase();
    match function.trim() {
        "reset" => return NodeType::Reset,
        "submit" => return NodeType::Submit,
        _ => {}
    }

    let label = component.label().to_ascii_lowercase();
    if label.contains("reset") {
        NodeType::Reset
    } else {
        NodeType::Submit
    }
}

fn generic_input_type(component: &BackendComponent) -> NodeType {
    if component.has_options() {
        choice_from_name(&component.name).unwrap_or(NodeType::Select)
    } else {
        input_from_keywords(&component.name, component.label()).unwrap_or(NodeType::Text)
    }
}

fn unrecognized_type(component: &BackendComponent) -> Option<NodeType> {
    if component.has_options() {
        Some(choice_from_name(&component.name).unwrap_or(NodeType::Select))
    } else {
        input_from_keywords(&component.name, component.label())
    }
}

/// Choice type from keywords in the component name
pub fn choice_from_name(name: &str) -> Option<NodeType> {
    let name = name.to_ascii_lowercase();
    if contains_any(&name, SELECT_KEYWORDS) {
        Some(NodeType::Select)
    } else if contains_any(&name, RADIO_KEYWORDS) {
        Some(NodeType::Radio)
    } else if contains_any(&name, CHECKBOX_KEYWORDS) {
        Some(NodeType::Checkbox)
    } else {
        None
    }
}

/// Input type from keywords in the name or label
///
/// "age" only matches as a whole word so that "message" and "page" do not
/// turn into number fields.
pub fn input_from_keywords(name: &str, label: &str) -> Option<NodeType> {
    let haystack = format!("{} {}", name, label).to_ascii_lowercase();

    if haystack.contains("submit") {
        Some(NodeType::Submit)
    } else if haystack.contains("reset") {
        Some(NodeType::Reset)
    } else if haystack.contains("email") {
        Some(NodeType::Text)
    } else if haystack.contains("phone") || haystack.contains("number") || contains_word(&haystack, "age") {
        Some(NodeType::Number)
    } else if haystack.contains("date") {
        Some(NodeType::Date)
    } else if haystack.contains("time") {
        Some(NodeType::Time)
    } else if haystack.contains("file") || haystack.contains("upload") {
        Some(NodeType::File)
    } else if contains_any(&haystack, &["textarea", "message", "description"]) {
        Some(NodeType::Textarea)
    } else {
        None
    }
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

fn contains_word(haystack: &str, word: &str) -> bool {
    haystack
        .split(|c: char| !c.is_ascii_alphanumeric())
        .any(|w| w == word)
}
