//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request:
//!     → auth.rs (x-api-key check against the configured secret)
//!     → Pass to routing / dispatch
//! ```
//!
//! # Design Decisions
//! - Fail closed: missing or mismatched credential rejects the request
//! - The presented credential is never logged or echoed
//! - Body size limits are enforced at the middleware stack, before dispatch

pub mod auth;

pub use auth::api_key_auth;
