//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via `tracing`; tower-http's TraceLayer covers the
//!   per-request spans and an x-request-id header correlates log lines
//! - Log level comes from `RUST_LOG` when set, config otherwise
//! - Auth failures are logged without the presented credential

pub mod logging;

pub use logging::init_logging;
