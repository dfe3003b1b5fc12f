//! Backend Component
//!
//! The persisted shape of a form field. The backend is loosely typed both
//! inside `properties` and in the outer fields, so the readers here accept
//! strings where numbers or booleans are expected and `null` where strings
//! are expected.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::props::{FieldOption, TableColumn};

pub const INPUT_TYPE: &str = "inputType";
pub const ORDER: &str = "order";
pub const HEADING: &str = "heading";
pub const FUNCTION: &str = "function";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendComponent {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient_id")]
    pub id: Option<i64>,
    #[serde(rename = "type", default, deserialize_with = "lenient_string")]
    pub component_type: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_order")]
    pub order: i64,
    #[serde(default, deserialize_with = "lenient_properties")]
    pub properties: Map<String, Value>,
}

// ========================
// Lenient Field Readers
// ========================

fn integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Strings as-is, numbers as their text, anything else empty
pub(crate) fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

fn lenient_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(integer(&Value::deserialize(deserializer)?))
}

fn lenient_order<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(integer(&Value::deserialize(deserializer)?).unwrap_or(0))
}

fn lenient_properties<'de, D>(deserializer: D) -> Result<Map<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Object(map) => map,
        _ => Map::new(),
    })
}

impl BackendComponent {
    pub fn new(component_type: impl Into<String>, name: impl Into<String>, order: i64) -> Self {
        Self {
            id: None,
            component_type: component_type.into(),
            name: name.into(),
            order,
            properties: Map::new(),
        }
    }

    pub fn with_property(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.properties.insert(key.to_string(), value.into());
        self
    }

    /// `properties.inputType`, or the outer `type` when absent or blank
    pub fn input_type(&self) -> &str {
        match self.properties.get(INPUT_TYPE).and_then(Value::as_str) {
            Some(t) if !t.trim().is_empty() => t.trim(),
            _ => self.component_type.trim(),
        }
    }

    pub fn str_property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).and_then(Value::as_str)
    }

    pub fn label(&self) -> &str {
        self.str_property("label").unwrap_or("")
    }

    pub fn flag(&self, key: &str) -> bool {
        match self.properties.get(key) {
            Some(Value::Bool(b)) => *b,
            Some(Value::String(s)) => s.eq_ignore_ascii_case("true"),
            Some(Value::Number(n)) => n.as_i64() == Some(1),
            _ => false,
        }
    }

    pub fn number_property(&self, key: &str) -> Option<f64> {
        match self.properties.get(key)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// `properties.order` wins over the outer `order`
    pub fn sort_order(&self) -> i64 {
        match self.properties.get(ORDER) {
            Some(Value::Number(n)) => n.as_i64().unwrap_or(self.order),
            Some(Value::String(s)) => s.trim().parse().unwrap_or(self.order),
            _ => self.order,
        }
    }

    /// Heading level from `properties.heading`: `2`, `"2"` or `"h2"`
    pub fn heading_level(&self) -> u8 {
        let level = match self.properties.get(HEADING) {
            Some(Value::Number(n)) => n.as_u64(),
            Some(Value::String(s)) => s
                .trim()
                .trim_start_matches(|c: char| c == 'h' || c == 'H')
                .parse()
                .ok(),
            _ => None,
        };
        level.map(|l| l.clamp(1, 6) as u8).unwrap_or(1)
    }

    /// Options normalized to `{label, value}`
    ///
    /// Accepts plain strings and objects with `label` and/or `value`.
    /// The value defaults to the label and vice versa; entries with
    /// neither are dropped.
    pub fn options(&self) -> Vec<FieldOption> {
        let Some(Value::Array(items)) = self.properties.get("options") else {
            return Vec::new();
        };
        items.iter().filter_map(normalize_option).collect()
    }

    pub fn has_options(&self) -> bool {
        !self.options().is_empty()
    }

    /// Table columns; plain strings become `{key: s, label: s}`
    pub fn columns(&self) -> Vec<TableColumn> {
        let Some(Value::Array(items)) = self.properties.get("columns") else {
            return Vec::new();
        };
        items
            .iter()
            .enumerate()
            .filter_map(|(i, item)| match item {
                Value::String(s) if !s.is_empty() => Some(TableColumn::new(s.clone(), s.clone())),
                Value::Object(map) => {
                    let label = map.get("label").and_then(Value::as_str).unwrap_or("");
                    let key = map
                        .get("key")
                        .and_then(Value::as_str)
                        .map(str::to_string)
                        .unwrap_or_else(|| format!("column_{}", i + 1));
                    let mut column = TableColumn::new(key, label);
                    if let Some(t) = map.get("type").and_then(Value::as_str) {
                        column.column_type = t.to_string();
                    }
                    Some(column)
                }
                _ => None,
            })
            .collect()
    }
}

fn scalar_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn normalize_option(item: &Value) -> Option<FieldOption> {
    match item {
        Value::String(s) if !s.trim().is_empty() => Some(FieldOption::labelled(s.clone())),
        Value::Object(map) => {
            let label = scalar_text(map.get("label"));
            let value = scalar_text(map.get("value"));
            match (label, value) {
                (Some(label), Some(value)) => Some(FieldOption::new(value, label)),
                (Some(label), None) => Some(FieldOption::labelled(label)),
                (None, Some(value)) => Some(FieldOption::labelled(value)),
                (None, None) => None,
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_input_type_prefers_properties() {
        let c = BackendComponent::new("input", "email", 1).with_property(INPUT_TYPE, "number");
        assert_eq!(c.input_type(), "number");
        let c = BackendComponent::new("radio", "pick", 1).with_property(INPUT_TYPE, " ");
        assert_eq!(c.input_type(), "radio");
    }

    #[test]
    fn test_options_normalized() {
        let c = BackendComponent::new("radio", "size", 1).with_property(
            "options",
            json!(["S", {"label": "Medium"}, {"value": "l"}, {"label": "XL", "value": "xl"}, {}, 3]),
        );
        assert_eq!(
            c.options(),
            vec![
                FieldOption::labelled("S"),
                FieldOption::labelled("Medium"),
                FieldOption::labelled("l"),
                FieldOption::new("xl", "XL"),
            ]
        );
    }

    #[test]
    fn test_sort_order_fallback() {
        let c = BackendComponent::new("text", "a", 7);
        assert_eq!(c.sort_order(), 7);
        let c = c.with_property(ORDER, "2");
        assert_eq!(c.sort_order(), 2);
    }

    #[test]
    fn test_heading_level_parsing() {
        let c = BackendComponent::new("heading", "h", 1);
        assert_eq!(c.heading_level(), 1);
        assert_eq!(c.clone().with_property(HEADING, 3).heading_level(), 3);
        assert_eq!(c.clone().with_property(HEADING, "h2").heading_level(), 2);
        assert_eq!(c.with_property(HEADING, 12).heading_level(), 6);
    }

    #[test]
    fn test_outer_fields_read_leniently() {
        let c: BackendComponent = serde_json::from_value(json!({
            "id": "12",
            "type": "text",
            "name": null,
            "order": "2",
            "properties": null
        }))
        .unwrap();
        assert_eq!(c.id, Some(12));
        assert_eq!(c.name, "");
        assert_eq!(c.order, 2);
        assert!(c.properties.is_empty());

        let c: BackendComponent = serde_json::from_value(json!({"name": 5, "order": 1.0})).unwrap();
        assert_eq!(c.component_type, "");
        assert_eq!(c.name, "5");
        assert_eq!(c.order, 1);
    }

    #[test]
    fn test_columns_from_strings_and_objects() {
        let c = BackendComponent::new("table", "items", 1)
            .with_property("columns", json!(["Name", {"label": "Qty", "type": "number"}]));
        let columns = c.columns();
        assert_eq!(columns[0].key, "Name");
        assert_eq!(columns[1].key, "column_2");
        assert_eq!(columns[1].column_type, "number");
    }
}
