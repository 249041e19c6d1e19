//! Shared JSON response bodies.

use serde::Serialize;

/// Message returned by the liveness route.
pub const LIVENESS_MESSAGE: &str = "Implementation Server is working!";

/// Body of a successful `GET /test` response.
#[derive(Debug, Clone, Serialize)]
pub struct LivenessBody {
    pub message: &'static str,
}

impl LivenessBody {
    pub fn new() -> Self {
        Self {
            message: LIVENESS_MESSAGE,
        }
    }
}

impl Default for LivenessBody {
    fn default() -> Self {
        Self::new()
    }
}

/// Error envelope returned on every rejection path.
///
/// `message` carries optional diagnostic detail and is omitted from the
/// serialized body when absent.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: None,
        }
    }

    pub fn with_message(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: Some(message.into()),
        }
    }
}
