//! Request ID generation.
//!
//! Every request gets a UUID v4 `x-request-id` as early as possible; the
//! propagation layer echoes it on the response so log lines and responses
//! correlate.

use axum::http::{HeaderValue, Request};
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

/// Header used to correlate request logs.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Generates a UUID v4 request ID for every incoming request.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidRequestId;

impl MakeRequestId for UuidRequestId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}
