//! Action dispatch subsystem.
//!
//! # Data Flow
//! ```text
//! POST /gptImplement body
//!     → payload.rs (deserialize { action, payload }, track absent fields)
//!     → handlers.rs (presence check → action lookup → pure transform)
//!     → JSON envelope (per-action shape)
//!
//! Rejections:
//!     missing action/payload → error.rs (400, fixed message)
//!     unrecognized action    → error.rs (400, echoes the value)
//!     handler failure        → error.rs (500, diagnostic message)
//! ```
//!
//! # Design Decisions
//! - Recognized actions are a closed enum, not a string-matched branch list
//! - Handlers are pure functions; the dispatcher never post-processes output
//! - Fixed suggestion lists and fallbacks live in defaults.rs, never derived
//!   from caller input

pub mod action;
pub mod defaults;
pub mod error;
pub mod handlers;
pub mod payload;

pub use action::Action;
pub use error::{DispatchError, DispatchResult};
pub use handlers::dispatch;
pub use payload::DispatchRequest;
