//! Form API Client
//!
//! Async wrappers over the form backend's HTTP endpoints, organized by domain.
//! Response bodies are handed to `form_schema::backend::wire` for decoding.

mod form;
mod listing;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use form_schema::SchemaError;

use crate::config::AppConfig;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Request(String),
    #[error("Server returned {status} for {url}")]
    Status { status: u16, url: String },
    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Request(e.to_string())
    }
}

impl From<SchemaError> for ApiError {
    fn from(e: SchemaError) -> Self {
        ApiError::Decode(e.to_string())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// HTTP client bound to one configuration
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: AppConfig,
}

impl ApiClient {
    pub fn new(config: AppConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    async fn get_json(&self, path: &str) -> ApiResult<Value> {
        let url = self.config.endpoint(path);
        log::debug!("[API] GET {}", url);
        let response = self.http.get(&url).send().await?;
        read_body(response, url).await
    }

    async fn post_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ApiResult<Value> {
        let url = self.config.endpoint(path);
        log::debug!("[API] POST {}", url);
        let response = self.http.post(&url).json(body).send().await?;
        read_body(response, url).await
    }
}

/// Check the status, then decode the body as JSON. An empty body is `null`.
async fn read_body(response: reqwest::Response, url: String) -> ApiResult<Value> {
    let status = response.status();
    if !status.is_success() {
        log::warn!("[API] {} returned {}", url, status);
        return Err(ApiError::Status {
            status: status.as_u16(),
            url,
        });
    }
    let text = response.text().await?;
    parse_body(&text)
}

fn parse_body(text: &str) -> ApiResult<Value> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_body_empty_is_null() {
        assert_eq!(parse_body("").unwrap(), Value::Null);
        assert_eq!(parse_body("  \n").unwrap(), Value::Null);
    }

    #[test]
    fn test_parse_body_json() {
        assert_eq!(parse_body(r#"{"value":{"id":3}}"#).unwrap(), json!({"value": {"id": 3}}));
    }

    #[test]
    fn test_parse_body_garbage() {
        assert!(matches!(parse_body("<html>"), Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_schema_error_maps_to_decode() {
        let err: ApiError = SchemaError::MissingField("value.id").into();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
