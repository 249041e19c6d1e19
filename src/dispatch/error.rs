//! Dispatch error taxonomy.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::http::response::ErrorBody;

/// Errors terminating a dispatch request.
///
/// Every variant is terminal for the request and maps to a fixed status
/// code plus the JSON error envelope. No partial handler output is ever
/// attached.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// Request body is missing one or both required fields.
    #[error("Missing required fields: 'action' and 'payload' are required")]
    MissingFields,

    /// Action identifier is not in the recognized set. Carries the
    /// offending value, echoed back to the caller.
    #[error("Invalid action: {0}")]
    UnknownAction(String),

    /// Unexpected failure while running a handler. Carries the diagnostic
    /// detail surfaced in the `message` field; never a stack trace.
    #[error("Internal server error")]
    Internal(String),
}

/// Result type for dispatch operations.
pub type DispatchResult<T> = Result<T, DispatchError>;

impl DispatchError {
    /// Status code this error surfaces as.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingFields | Self::UnknownAction(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for DispatchError {
    fn into_response(self) -> Response {
        let body = match &self {
            Self::Internal(detail) => ErrorBody::with_message(self.to_string(), detail.clone()),
            _ => ErrorBody::new(self.to_string()),
        };
        (self.status(), Json(body)).into_response()
    }
}
