//! Node Props
//!
//! Open property bag whose expected shape depends on the node type.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const LABEL: &str = "label";
pub const PLACEHOLDER: &str = "placeholder";
pub const REQUIRED: &str = "required";
pub const TEXT: &str = "text";
pub const OPTIONS: &str = "options";
pub const COLUMNS: &str = "columns";
pub const MIN: &str = "min";
pub const MAX: &str = "max";
pub const STEP: &str = "step";
pub const SRC: &str = "src";
pub const ALT: &str = "alt";
pub const VISIBLE_IN_PREVIEW: &str = "visibleInPreview";
pub const HAS_NO_BACKEND_OPTIONS: &str = "hasNoBackendOptions";
pub const COMPONENT_ID: &str = "componentId";
pub const NAME: &str = "name";

/// Choice option
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOption {
    pub value: String,
    pub label: String,
}

impl FieldOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// Option whose value is its label
    pub fn labelled(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            value: label.clone(),
            label,
        }
    }
}

/// Table column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableColumn {
    pub key: String,
    pub label: String,
    #[serde(rename = "type", default = "default_column_type")]
    pub column_type: String,
}

fn default_column_type() -> String {
    "text".to_string()
}

impl TableColumn {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            column_type: default_column_type(),
        }
    }
}

/// Property bag with typed accessors for the well-known keys
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Props(Map<String, Value>);

impl Props {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Builder-style insert
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    pub fn insert(&mut self, key: &str, value: impl Into<Value>) {
        self.0.insert(key.to_string(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Shallow merge: keys of `partial` overwrite, other keys stay
    pub fn merge(&mut self, partial: Props) {
        for (key, value) in partial.0 {
            self.0.insert(key, value);
        }
    }

    pub fn str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    pub fn number(&self, key: &str) -> Option<f64> {
        match self.0.get(key)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn flag(&self, key: &str) -> bool {
        match self.0.get(key) {
            Some(Value::Bool(b)) => *b,
            Some(Value::String(s)) => s.eq_ignore_ascii_case("true"),
            _ => false,
        }
    }

    pub fn label(&self) -> Option<&str> {
        self.str(LABEL)
    }

    pub fn placeholder(&self) -> Option<&str> {
        self.str(PLACEHOLDER)
    }

    pub fn text(&self) -> Option<&str> {
        self.str(TEXT)
    }

    pub fn required(&self) -> bool {
        self.flag(REQUIRED)
    }

    /// Defaults to visible when unset
    pub fn visible_in_preview(&self) -> bool {
        match self.0.get(VISIBLE_IN_PREVIEW) {
            Some(Value::Bool(b)) => *b,
            _ => true,
        }
    }

    pub fn has_no_backend_options(&self) -> bool {
        self.flag(HAS_NO_BACKEND_OPTIONS)
    }

    pub fn component_id(&self) -> Option<i64> {
        match self.0.get(COMPONENT_ID)? {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }

    /// Options that fail to parse are skipped
    pub fn options(&self) -> Vec<FieldOption> {
        match self.0.get(OPTIONS) {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|v| serde_json::from_value(v.clone()).ok())
                .collect(),
            _ => Vec::new(),
        }
    }

    pub fn set_options(&mut self, options: &[FieldOption]) {
        self.insert(OPTIONS, options_value(options));
    }

    pub fn columns(&self) -> Vec<TableColumn> {
        match self.0.get(COLUMNS) {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|v| serde_json::from_value(v.clone()).ok())
                .collect(),
            _ => Vec::new(),
        }
    }

    pub fn set_columns(&mut self, columns: &[TableColumn]) {
        self.insert(COLUMNS, columns_value(columns));
    }
}

impl From<Map<String, Value>> for Props {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

pub fn options_value(options: &[FieldOption]) -> Value {
    serde_json::to_value(options).unwrap_or(Value::Array(Vec::new()))
}

pub fn columns_value(columns: &[TableColumn]) -> Value {
    serde_json::to_value(columns).unwrap_or(Value::Array(Vec::new()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_merge_is_shallow() {
        let mut props = Props::new()
            .with(LABEL, "Name")
            .with(REQUIRED, false)
            .with(OPTIONS, json!([{"value": "a", "label": "A"}]));
        props.merge(Props::new().with(REQUIRED, true).with(OPTIONS, json!([])));

        assert_eq!(props.label(), Some("Name"));
        assert!(props.required());
        assert!(props.options().is_empty());
    }

    #[test]
    fn test_lenient_flags_and_numbers() {
        let props = Props::new()
            .with(REQUIRED, "true")
            .with(MIN, "3")
            .with(MAX, 10)
            .with(COMPONENT_ID, "42");
        assert!(props.required());
        assert_eq!(props.number(MIN), Some(3.0));
        assert_eq!(props.number(MAX), Some(10.0));
        assert_eq!(props.component_id(), Some(42));
    }

    #[test]
    fn test_visible_in_preview_defaults_true() {
        assert!(Props::new().visible_in_preview());
        assert!(!Props::new().with(VISIBLE_IN_PREVIEW, false).visible_in_preview());
    }

    #[test]
    fn test_malformed_options_skipped() {
        let props = Props::new().with(
            OPTIONS,
            json!([{"value": "a", "label": "A"}, "oops", {"label": "no value"}]),
        );
        assert_eq!(props.options(), vec![FieldOption::new("a", "A")]);
    }

    #[test]
    fn test_columns_default_type() {
        let props = Props::new().with(COLUMNS, json!([{"key": "qty", "label": "Qty"}]));
        let columns = props.columns();
        assert_eq!(columns.len(), 1);
        assert_eq!(columns[0].column_type, "text");
    }
}
