//! Adapter round-trip tests
//!
//! Save a document to backend components and load it back.

use form_schema::backend::wire::{parse_fetch_form, FormPayload};
use form_schema::backend::{from_backend_components, to_backend_components};
use form_schema::props::{self, FieldOption, Props};
use form_schema::{Document, Node, NodeType};
use pretty_assertions::assert_eq;
use serde_json::json;

fn labelled(node_type: NodeType, label: &str, required: bool) -> Node {
    let mut p = Props::new()
        .with(props::LABEL, label)
        .with(props::REQUIRED, required);
    if matches!(node_type, NodeType::Checkbox | NodeType::Radio) {
        p.set_options(&[FieldOption::new("yes", "Yes"), FieldOption::new("no", "No")]);
    }
    Node::new(node_type, p)
}

fn summary(nodes: &[Node]) -> Vec<(NodeType, String, bool)> {
    nodes
        .iter()
        .map(|n| {
            (
                n.node_type(),
                n.props().label().unwrap_or_default().to_string(),
                n.props().required(),
            )
        })
        .collect()
}

#[test]
fn test_representable_types_survive_roundtrip() {
    let doc = Document::new(
        "Registration",
        vec![
            labelled(NodeType::Text, "Full name", true),
            labelled(NodeType::Number, "Guests", false),
            labelled(NodeType::Datetime, "Arrival", true),
            labelled(NodeType::Checkbox, "Dietary needs", false),
            labelled(NodeType::Radio, "Attending", true),
            labelled(NodeType::Submit, "Submit", false),
            labelled(NodeType::Reset, "Reset", false),
        ],
    );

    let components = to_backend_components(&doc);
    let restored = from_backend_components(components);

    // Buttons carry no required flag on the wire.
    let mut expected = summary(&doc.nodes);
    expected[5].2 = false;
    expected[6].2 = false;
    assert_eq!(summary(&restored), expected);

    // Ids are regenerated on load.
    assert_ne!(restored[0].id(), doc.nodes[0].id());
}

#[test]
fn test_select_is_dropped_on_save() {
    let doc = Document::new(
        "Gap",
        vec![
            labelled(NodeType::Text, "Name", false),
            labelled(NodeType::Select, "Team", false),
            labelled(NodeType::Text, "City", false),
        ],
    );
    let restored = from_backend_components(to_backend_components(&doc));
    let labels: Vec<_> = restored.iter().filter_map(|n| n.props().label()).collect();
    assert_eq!(labels, vec!["Name", "City"]);
}

#[test]
fn test_shuffled_wire_order_restored() {
    let doc = Document::new(
        "Order",
        vec![
            labelled(NodeType::Text, "First", false),
            labelled(NodeType::Text, "Second", false),
            labelled(NodeType::Text, "Third", false),
        ],
    );
    let mut components = to_backend_components(&doc);
    components.reverse();
    let restored = from_backend_components(components);
    let labels: Vec<_> = restored.iter().filter_map(|n| n.props().label()).collect();
    assert_eq!(labels, vec!["First", "Second", "Third"]);
}

#[test]
fn test_fetch_response_into_document() {
    let body = json!({
        "value": {
            "title": "Onboarding",
            "components": [
                {"id": 2, "type": "input", "name": "department_select", "order": 2,
                 "properties": {"label": "Department", "options": [{"label": "HR"}, {"label": "Eng"}]}},
                {"id": 1, "type": "checkbox", "name": "terms", "order": 1,
                 "properties": {"label": "Agree to terms", "options": []}},
                {"id": 3, "type": "radio", "name": "shift", "order": 3,
                 "properties": {"label": "Shift", "options": []}}
            ]
        }
    });

    let payload: FormPayload = parse_fetch_form(body).unwrap();
    let doc = payload.into_document();

    assert_eq!(doc.title, "Onboarding");
    let types: Vec<_> = doc.nodes.iter().map(Node::node_type).collect();
    assert_eq!(types, vec![NodeType::Checkbox, NodeType::Select, NodeType::Text]);
    assert!(doc.nodes[0].props().has_no_backend_options());
    assert_eq!(doc.nodes[1].props().component_id(), Some(2));
}

#[test]
fn test_options_added_to_loaded_checkbox_are_saved() {
    let payload = parse_fetch_form(json!({
        "title": "Terms",
        "components": [
            {"id": 5, "type": "checkbox", "name": "agree", "order": 1,
             "properties": {"label": "Agree", "options": []}}
        ]
    }))
    .unwrap();
    let doc = payload.into_document();
    let id = doc.nodes[0].id().clone();
    assert!(doc.nodes[0].props().has_no_backend_options());

    let options = props::options_value(&[FieldOption::new("yes", "Yes"), FieldOption::new("no", "No")]);
    let doc = doc.update_node(&id, Props::new().with(props::OPTIONS, options));

    let components = to_backend_components(&doc);
    assert_eq!(components[0].options().len(), 2);
    let restored = from_backend_components(components);
    assert_eq!(restored[0].props().options().len(), 2);
}
