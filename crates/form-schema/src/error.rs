//! Schema Errors
//!
//! Raised only when decoding backend payloads; document mutations never fail.

use thiserror::Error;

/// Common result type for schema decoding
pub type SchemaResult<T> = Result<T, SchemaError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchemaError {
    #[error("Failed to parse backend JSON: {0}")]
    Json(String),

    #[error("Backend response is missing '{0}'")]
    MissingField(&'static str),
}

impl From<serde_json::Error> for SchemaError {
    fn from(e: serde_json::Error) -> Self {
        SchemaError::Json(e.to_string())
    }
}
