//! Wire Envelopes
//!
//! Request and response bodies of the form API. Responses arrive in a few
//! shapes (bare or wrapped in `value`), so they are parsed from
//! `serde_json::Value` here rather than in the HTTP layer.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::document::Document;
use crate::error::{SchemaError, SchemaResult};

use super::component::{lenient_string, BackendComponent};
use super::deserialize::from_backend_components;

/// Title and components of one stored form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(deserialize_with = "lenient_components")]
    pub components: Vec<BackendComponent>,
}

/// Decode each component on its own; one malformed entry is logged and
/// dropped instead of failing the whole form
fn lenient_components<'de, D>(deserializer: D) -> Result<Vec<BackendComponent>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = match Value::deserialize(deserializer)? {
        Value::Array(items) => items,
        Value::Null => Vec::new(),
        other => {
            log::warn!("[ADAPTER] Expected a component list, got {}", other);
            Vec::new()
        }
    };
    Ok(items
        .into_iter()
        .enumerate()
        .filter_map(|(i, item)| match serde_json::from_value(item) {
            Ok(component) => Some(component),
            Err(e) => {
                log::warn!("[ADAPTER] Dropping malformed component #{}: {}", i, e);
                None
            }
        })
        .collect())
}

impl FormPayload {
    pub fn into_document(self) -> Document {
        Document::new(self.title, from_backend_components(self.components))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FetchEnvelope {
    Wrapped { value: FormPayload },
    Bare(FormPayload),
}

#[derive(Deserialize)]
struct AnswerEnvelope {
    value: AnswerValue,
}

#[derive(Deserialize)]
struct AnswerValue {
    form: FormPayload,
}

/// `GET /api/form/fetch/{id}`: `{components, title}` or `{value: {...}}`
pub fn parse_fetch_form(body: Value) -> SchemaResult<FormPayload> {
    match serde_json::from_value(body)? {
        FetchEnvelope::Wrapped { value } => Ok(value),
        FetchEnvelope::Bare(payload) => Ok(payload),
    }
}

/// `GET /api/form/answer/{id}`: `{value: {form: {id, title, components}}}`
pub fn parse_answer_form(body: Value) -> SchemaResult<FormPayload> {
    let envelope: AnswerEnvelope = serde_json::from_value(body)?;
    Ok(envelope.value.form)
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateFormRequest {
    pub title: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    pub components: Vec<BackendComponent>,
}

/// `POST /api/form/create` → `{value: {id}}`
pub fn parse_created_id(body: Value) -> SchemaResult<i64> {
    body.get("value")
        .and_then(|v| v.get("id"))
        .and_then(|id| match id {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.parse().ok(),
            _ => None,
        })
        .ok_or(SchemaError::MissingField("value.id"))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    #[serde(rename = "componentId")]
    pub component_id: i64,
    pub value: Value,
}

/// `POST /api/form/answer/{id}` body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnswerSubmission {
    pub answers: Vec<Answer>,
}

/// Entry of the published-forms listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormSummary {
    pub id: i64,
    #[serde(default)]
    pub title: String,
}

/// Unwraps `{value: x}` when present
fn unwrap_value(body: Value) -> Value {
    match body {
        Value::Object(mut map) if map.contains_key("value") => {
            map.remove("value").unwrap_or(Value::Null)
        }
        other => other,
    }
}

/// `GET /api/form/list/published/{userId}`: array, bare or wrapped
pub fn parse_form_list(body: Value) -> SchemaResult<Vec<FormSummary>> {
    Ok(serde_json::from_value(unwrap_value(body))?)
}

/// `GET /api/form/answered/{userId}`: a count or a list of answered forms
pub fn parse_answered_count(body: Value) -> SchemaResult<usize> {
    match unwrap_value(body) {
        Value::Number(n) => n
            .as_u64()
            .map(|n| n as usize)
            .ok_or(SchemaError::MissingField("count")),
        Value::Array(items) => Ok(items.len()),
        Value::Object(map) => map
            .get("count")
            .and_then(Value::as_u64)
            .map(|n| n as usize)
            .ok_or(SchemaError::MissingField("count")),
        _ => Err(SchemaError::MissingField("count")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fetch_bare_and_wrapped() {
        let bare = json!({"title": "T", "components": [{"type": "text", "name": "a", "order": 1}]});
        let wrapped = json!({"value": bare.clone()});
        assert_eq!(parse_fetch_form(bare).unwrap(), parse_fetch_form(wrapped).unwrap());
    }

    #[test]
    fn test_fetch_rejects_garbage() {
        assert!(parse_fetch_form(json!({"oops": true})).is_err());
    }

    #[test]
    fn test_malformed_component_does_not_block_the_form() {
        let body = json!({"value": {"title": "T", "components": [
            {"type": "text", "name": "email", "order": 1, "properties": {"label": "Email"}},
            {"type": "text", "name": null, "order": "2", "properties": {"label": "Phone"}},
            42
        ]}});
        let payload = parse_fetch_form(body).unwrap();
        assert_eq!(payload.components.len(), 2);
        assert_eq!(payload.components[1].order, 2);

        let doc = payload.into_document();
        let labels: Vec<&str> = doc.nodes.iter().filter_map(|n| n.props().label()).collect();
        assert_eq!(labels, vec!["Email", "Phone"]);
    }

    #[test]
    fn test_answer_form_envelope() {
        let body = json!({"value": {"form": {"id": 4, "title": "Survey", "components": []}}});
        let payload = parse_answer_form(body).unwrap();
        assert_eq!(payload.id, Some(4));
        assert_eq!(payload.title, "Survey");
    }

    #[test]
    fn test_created_id() {
        assert_eq!(parse_created_id(json!({"value": {"id": 17}})).unwrap(), 17);
        assert_eq!(parse_created_id(json!({"value": {"id": "18"}})).unwrap(), 18);
        assert_eq!(
            parse_created_id(json!({"value": {}})),
            Err(SchemaError::MissingField("value.id"))
        );
    }

    #[test]
    fn test_submission_shape() {
        let submission = AnswerSubmission {
            answers: vec![Answer {
                component_id: 3,
                value: json!("hi"),
            }],
        };
        assert_eq!(
            serde_json::to_value(&submission).unwrap(),
            json!({"answers": [{"componentId": 3, "value": "hi"}]})
        );
    }

    #[test]
    fn test_create_request_shape() {
        let request = CreateFormRequest {
            title: "T".into(),
            user_id: "u1".into(),
            components: vec![],
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"title": "T", "userId": "u1", "components": []})
        );
    }

    #[test]
    fn test_listing_shapes() {
        let list = parse_form_list(json!({"value": [{"id": 1, "title": "A"}, {"id": 2}]})).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[1].title, "");

        assert_eq!(parse_answered_count(json!({"value": 5})).unwrap(), 5);
        assert_eq!(parse_answered_count(json!([{"id": 1}, {"id": 2}])).unwrap(), 2);
        assert!(parse_answered_count(json!("x")).is_err());
    }
}
