//! Respondent Answers
//!
//! Values entered while filling a form, required-field validation and the
//! submission payload. Table values are lists of row records keyed by
//! column key.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::backend::wire::{Answer, AnswerSubmission};
use crate::node::{Node, NodeId};
use crate::props::TableColumn;

pub const REQUIRED_MESSAGE: &str = "This field is required";

/// Current value per node
pub type FieldValues = BTreeMap<NodeId, Value>;

/// Validation message per node
pub type FieldErrors = BTreeMap<NodeId, String>;

/// One table row, keyed by column key
pub type TableRow = Map<String, Value>;

pub fn is_empty_value(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(Value::Array(items)) => items.is_empty(),
        Some(Value::Object(map)) => map.is_empty(),
        Some(_) => false,
    }
}

/// Nodes whose answers are collected and sent
fn is_answerable(node: &Node) -> bool {
    node.node_type().accepts_answer() && !node.props().has_no_backend_options()
}

/// Collect required-field errors; an empty map means the form may be sent
pub fn validate(nodes: &[Node], values: &FieldValues) -> FieldErrors {
    nodes
        .iter()
        .filter(|n| is_answerable(n) && n.props().required())
        .filter(|n| is_empty_value(values.get(n.id())))
        .map(|n| (n.id().clone(), REQUIRED_MESSAGE.to_string()))
        .collect()
}

/// Re-check one field after its value changed
pub fn validate_field(node: &Node, value: Option<&Value>) -> Option<String> {
    if is_answerable(node) && node.props().required() && is_empty_value(value) {
        Some(REQUIRED_MESSAGE.to_string())
    } else {
        None
    }
}

/// Answers for every answerable node that maps to a backend component and
/// has a value. Checkboxes the backend holds no options for are skipped.
pub fn build_submission(nodes: &[Node], values: &FieldValues) -> AnswerSubmission {
    let answers = nodes
        .iter()
        .filter(|n| is_answerable(n))
        .filter_map(|n| {
            let component_id = n.props().component_id()?;
            let value = values.get(n.id()).filter(|v| !is_empty_value(Some(*v)))?;
            Some(Answer {
                component_id,
                value: value.clone(),
            })
        })
        .collect();
    AnswerSubmission { answers }
}

/// Toggle `option` in a multi-value (checkbox, multiselect) answer
pub fn toggle_choice(current: Option<&Value>, option: &str) -> Value {
    let mut selected: Vec<Value> = match current {
        Some(Value::Array(items)) => items.clone(),
        _ => Vec::new(),
    };
    if let Some(pos) = selected.iter().position(|v| v.as_str() == Some(option)) {
        selected.remove(pos);
    } else {
        selected.push(Value::String(option.to_string()));
    }
    Value::Array(selected)
}

pub fn empty_row(columns: &[TableColumn]) -> TableRow {
    columns
        .iter()
        .map(|c| (c.key.clone(), Value::String(String::new())))
        .collect()
}

fn rows_of(value: Option<&Value>) -> Vec<Value> {
    match value {
        Some(Value::Array(rows)) => rows.clone(),
        _ => Vec::new(),
    }
}

pub fn add_row(value: Option<&Value>, columns: &[TableColumn]) -> Value {
    let mut rows = rows_of(value);
    rows.push(Value::Object(empty_row(columns)));
    Value::Array(rows)
}

/// Out-of-range rows are ignored
pub fn remove_row(value: Option<&Value>, row: usize) -> Value {
    let mut rows = rows_of(value);
    if row < rows.len() {
        rows.remove(row);
    }
    Value::Array(rows)
}

/// Out-of-range rows are ignored
pub fn update_cell(value: Option<&Value>, row: usize, key: &str, cell: Value) -> Value {
    let mut rows = rows_of(value);
    if let Some(Value::Object(record)) = rows.get_mut(row) {
        record.insert(key.to_string(), cell);
    }
    Value::Array(rows)
}
