//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack, routes)
//!     → security/auth (x-api-key check)
//!     → dispatch (action lookup, handler transform)
//!     → response.rs (JSON envelopes for liveness and errors)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::{UuidRequestId, X_REQUEST_ID};
pub use response::{ErrorBody, LivenessBody};
pub use server::HttpServer;
