use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum ItemstoreError {
    /// Request body or path did not match the expected shape.
    #[error("Invalid payload: {message}")]
    InvalidPayload {
        message: String,
        /// Underlying extractor error, logged but never sent to the client.
        debug_message: Option<String>,
    },

    #[error("Item not found: id={0}")]
    NotFound(i64),

    /// The body could not be read (too large, aborted stream, ...). Carries the
    /// status axum assigned to the failure, e.g. 413 for the body size limit.
    #[error("Failed to read request body: {message}")]
    Body { status: StatusCode, message: String },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] figment::Error),
}

impl ItemstoreError {
    pub fn status(&self) -> StatusCode {
        match self {
            ItemstoreError::InvalidPayload { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ItemstoreError::NotFound(_) => StatusCode::NOT_FOUND,
            ItemstoreError::Body { status, .. } => *status,
            ItemstoreError::Database(_) | ItemstoreError::Config(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<JsonRejection> for ItemstoreError {
    fn from(rejection: JsonRejection) -> Self {
        let debug_message = Some(rejection.to_string());
        match rejection {
            JsonRejection::BytesRejection(e) => ItemstoreError::Body {
                status: e.status(),
                message: e.body_text(),
            },
            JsonRejection::JsonSyntaxError(_) => ItemstoreError::InvalidPayload {
                message: "invalid JSON".to_string(),
                debug_message,
            },
            JsonRejection::MissingJsonContentType(_) => ItemstoreError::InvalidPayload {
                message: "expected request with `Content-Type: application/json`".to_string(),
                debug_message,
            },
            _ => ItemstoreError::InvalidPayload {
                message: "body must be an object with string fields `name` and `description`"
                    .to_string(),
                debug_message,
            },
        }
    }
}

impl From<PathRejection> for ItemstoreError {
    fn from(rejection: PathRejection) -> Self {
        ItemstoreError::InvalidPayload {
            message: "item id must be an integer".to_string(),
            debug_message: Some(rejection.to_string()),
        }
    }
}

impl IntoResponse for ItemstoreError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            ItemstoreError::InvalidPayload {
                message,
                debug_message,
            } => {
                tracing::warn!(
                    status = %status,
                    message = %message,
                    debug_message = debug_message.as_deref().unwrap_or("-"),
                    "Request rejected"
                );
                ApiErrorObject {
                    code: "INVALID_PAYLOAD".to_string(),
                    message,
                }
            }

            ItemstoreError::Body { message, .. } if status.is_client_error() => {
                tracing::warn!(status = %status, message = %message, "Request body rejected");
                ApiErrorObject {
                    code: "BODY_REJECTED".to_string(),
                    message,
                }
            }

            ItemstoreError::NotFound(_) => ApiErrorObject {
                code: "NOT_FOUND".to_string(),
                message: "Item not found".to_string(),
            },

            other => {
                tracing::error!(error = %other, "Internal error while serving request");
                ApiErrorObject {
                    code: "INTERNAL_ERROR".to_string(),
                    message: "An internal server error occurred.".to_string(),
                }
            }
        };
        (status, Json(ApiErrorBody { inner: body })).into_response()
    }
}

/// Standardized API error response payload.
#[derive(Debug, Serialize)]
pub struct ApiErrorObject {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    #[serde(rename = "error")]
    pub inner: ApiErrorObject,
}
