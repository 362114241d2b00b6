use axum::extract::rejection::{BytesRejection, JsonRejection, QueryRejection};
use serde_json::{Value, json};
use thiserror::Error as ThisError;

/// Client input that cannot be served. Always reported before any storage call.
#[derive(Debug, ThisError)]
pub enum ValidationError {
    #[error("Malformed request body: {0}")]
    Body(#[from] JsonRejection),

    #[error("Unreadable request body: {0}")]
    UnreadableBody(#[from] BytesRejection),

    #[error("Malformed query string: {0}")]
    Query(#[from] QueryRejection),

    #[error("limit must not exceed {max}, got {requested}")]
    LimitTooLarge { requested: u32, max: u32 },

    #[error("offset {0} is out of range")]
    OffsetOutOfRange(u64),
}

impl ValidationError {
    /// Human readable reason sent back to the caller.
    pub fn message(&self) -> String {
        match self {
            ValidationError::Body(rejection) => rejection.body_text(),
            ValidationError::UnreadableBody(rejection) => rejection.body_text(),
            ValidationError::Query(rejection) => rejection.body_text(),
            other => other.to_string(),
        }
    }

    /// Structured hint naming the offending input.
    pub fn details(&self) -> Option<Value> {
        match self {
            ValidationError::Body(_) | ValidationError::UnreadableBody(_) => {
                Some(json!({ "location": "body" }))
            }
            ValidationError::Query(_) => Some(json!({ "location": "query" })),
            ValidationError::LimitTooLarge { requested, max } => Some(json!({
                "location": "query",
                "field": "limit",
                "requested": requested,
                "max": max,
            })),
            ValidationError::OffsetOutOfRange(offset) => Some(json!({
                "location": "query",
                "field": "offset",
                "requested": offset,
            })),
        }
    }
}
