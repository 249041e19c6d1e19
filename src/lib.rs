//! Implementation Server library.
//!
//! An authenticated action-dispatch HTTP service: every request carries a
//! shared-secret `x-api-key` header, and the dispatch endpoint routes a
//! single `action` field to one of a closed set of handlers that reshape
//! the accompanying `payload` into a fixed JSON envelope.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ───────────────▶ http/server (Axum router + middleware stack)
//!                          │
//!                          ▼
//!                      security/auth (x-api-key check, 401 on mismatch)
//!                          │
//!                          ▼
//!                      dispatch (body-shape check → action lookup
//!                          │     → handler transform)
//!                          ▼
//!     Client Response ◀── JSON envelope / error body
//!
//!     Cross-cutting: config, observability (tracing),
//!     lifecycle (shutdown + signals)
//! ```

// Core subsystems
pub mod config;
pub mod dispatch;
pub mod http;
pub mod security;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::ServerConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
