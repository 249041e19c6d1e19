//! API key authentication middleware.
//!
//! Every route requires the `x-api-key` header to match the configured
//! secret exactly. Rejections happen before any dispatch logic runs.

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::http::response::ErrorBody;
use crate::http::server::AppState;

/// Header carrying the shared-secret credential. Header-name matching is
/// case-insensitive per HTTP, so X-API-KEY variants are accepted.
pub const API_KEY_HEADER: &str = "x-api-key";

pub async fn api_key_auth(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let authorized = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|key| key == state.config.auth.api_key);

    if authorized {
        return next.run(request).await;
    }

    // Log the outcome only, never the presented value.
    tracing::warn!(
        path = %request.uri().path(),
        "Rejected request with missing or invalid API key"
    );

    (
        StatusCode::UNAUTHORIZED,
        Json(ErrorBody::new("Invalid API key")),
    )
        .into_response()
}
