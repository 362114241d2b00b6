use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error as ThisError;
use tracing::error;

use super::validation::ValidationError;

#[derive(Debug, ThisError)]
pub enum QuoteError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Storage error: {0}")]
    Storage(#[from] sqlx::Error),
}

impl QuoteError {
    pub fn status(&self) -> StatusCode {
        match self {
            QuoteError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            QuoteError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for QuoteError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let error_body = match self {
            QuoteError::Validation(err) => ApiErrorObject {
                code: "VALIDATION_ERROR".to_string(),
                message: err.message(),
                details: err.details(),
            },
            QuoteError::Storage(err) => {
                error!(error = %err, "storage operation failed");
                ApiErrorObject {
                    code: "INTERNAL_ERROR".to_string(),
                    message: "An internal server error occurred.".to_string(),
                    details: None,
                }
            }
        };
        (status, Json(ApiErrorBody { inner: error_body })).into_response()
    }
}

/// Standardized API error response payload.
#[derive(Serialize)]
pub struct ApiErrorObject {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

#[derive(Serialize)]
pub struct ApiErrorBody {
    #[serde(rename = "error")]
    pub inner: ApiErrorObject,
}
