//! Backend components → nodes

use crate::node::{FieldKind, Node, NodeType};
use crate::props::{self, FieldOption, Props};

use super::component::BackendComponent;
use super::infer::infer_node_type;

/// Deserialize components into document order
///
/// Components are sorted by `properties.order` (falling back to the outer
/// `order`); the wire order is not trusted. Components whose type cannot be
/// inferred are dropped.
pub fn from_backend_components(mut components: Vec<BackendComponent>) -> Vec<Node> {
    components.sort_by_key(BackendComponent::sort_order);
    components
        .iter()
        .filter_map(from_backend_component)
        .collect()
}

pub fn from_backend_component(component: &BackendComponent) -> Option<Node> {
    let Some(node_type) = infer_node_type(component) else {
        log::warn!(
            "[ADAPTER] Dropping component {:?} ('{}', type '{}'): type could not be inferred",
            component.id,
            component.name,
            component.input_type()
        );
        return None;
    };
    Some(Node::new(node_type, build_props(node_type, component)))
}

fn build_props(node_type: NodeType, component: &BackendComponent) -> Props {
    let mut p = Props::new();
    let label = if component.label().trim().is_empty() {
        component.name.as_str()
    } else {
        component.label()
    };

    if let Some(id) = component.id {
        p.insert(props::COMPONENT_ID, id);
    }
    if !component.name.is_empty() {
        p.insert(props::NAME, component.name.as_str());
    }

    match node_type.kind() {
        FieldKind::Heading => {
            p.insert(props::TEXT, label);
            return p;
        }
        FieldKind::Button => {
            let fallback = if node_type == NodeType::Reset { "Reset" } else { "Submit" };
            p.insert(props::LABEL, if label.is_empty() { fallback } else { label });
            return p;
        }
        _ => {}
    }

    p.insert(props::LABEL, label);
    p.insert(props::REQUIRED, component.flag("required"));
    if let Some(placeholder) = component.str_property("placeholder") {
        p.insert(props::PLACEHOLDER, placeholder);
    }
    for key in [props::MIN, props::MAX, props::STEP] {
        if let Some(n) = component.number_property(key) {
            p.insert(key, n);
        }
    }

    match node_type {
        NodeType::Checkbox => {
            let options = component.options();
            if options.is_empty() {
                // The backend stores no options for this checkbox, so any
                // value a respondent picks cannot be validated server side.
                p.set_options(&[FieldOption::labelled(label)]);
                p.insert(props::HAS_NO_BACKEND_OPTIONS, true);
            } else {
                p.set_options(&options);
            }
        }
        NodeType::Radio | NodeType::Select | NodeType::Multiselect => {
            p.set_options(&component.options());
        }
        NodeType::Table => {
            p.set_columns(&component.columns());
        }
        _ => {}
    }

    p
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_checkbox_without_options_synthesized() {
        let c = BackendComponent::new("checkbox", "", 1)
            .with_property("label", "Agree to terms")
            .with_property("options", json!([]));
        let node = from_backend_component(&c).unwrap();

        assert_eq!(node.node_type(), NodeType::Checkbox);
        assert_eq!(
            node.props().options(),
            vec![FieldOption::new("Agree to terms", "Agree to terms")]
        );
        assert!(node.props().has_no_backend_options());
    }

    #[test]
    fn test_department_input_becomes_select() {
        let c = BackendComponent::new("input", "department_select", 1)
            .with_property("label", "Department")
            .with_property("options", json!([{"label": "HR"}, {"label": "Eng"}]));
        let node = from_backend_component(&c).unwrap();

        assert_eq!(node.node_type(), NodeType::Select);
        assert_eq!(
            node.props().options(),
            vec![FieldOption::labelled("HR"), FieldOption::labelled("Eng")]
        );
    }

    #[test]
    fn test_radio_without_options_becomes_text() {
        let c = BackendComponent::new("radio", "", 1).with_property("options", json!([]));
        let node = from_backend_component(&c).unwrap();
        assert_eq!(node.node_type(), NodeType::Text);
        assert!(!node.props().contains(props::OPTIONS));
    }

    #[test]
    fn test_sorted_by_property_order() {
        let components = vec![
            BackendComponent::new("text", "third", 1).with_property("order", 3),
            BackendComponent::new("text", "first", 9).with_property("order", 1),
            BackendComponent::new("text", "second", 2),
        ];
        let nodes = from_backend_components(components);
        let names: Vec<_> = nodes.iter().map(|n| n.props().str(props::NAME).unwrap()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_undecidable_component_dropped() {
        let components = vec![
            BackendComponent::new("signature", "sig", 1),
            BackendComponent::new("text", "name", 2),
        ];
        let nodes = from_backend_components(components);
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].node_type(), NodeType::Text);
    }

    #[test]
    fn test_component_id_and_label_fallback() {
        let mut c = BackendComponent::new("number", "quantity", 1);
        c.id = Some(12);
        let node = from_backend_component(&c).unwrap();
        assert_eq!(node.props().component_id(), Some(12));
        assert_eq!(node.props().label(), Some("quantity"));
    }

    #[test]
    fn test_heading_text() {
        let c = BackendComponent::new("heading", "intro", 1)
            .with_property("label", "About you")
            .with_property("heading", "3");
        let node = from_backend_component(&c).unwrap();
        assert_eq!(node.node_type(), NodeType::H3);
        assert_eq!(node.props().text(), Some("About you"));
    }

    #[test]
    fn test_table_columns() {
        let c = BackendComponent::new("table", "items", 1)
            .with_property("columns", json!([{"key": "item", "label": "Item"}]));
        let node = from_backend_component(&c).unwrap();
        assert_eq!(node.props().columns()[0].label, "Item");
    }
}
