//! Structured logging initialization.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::ObservabilityConfig;

/// Initialize the tracing subscriber. Call once at startup.
///
/// `RUST_LOG` takes precedence; the configured level is the fallback.
pub fn init_logging(config: &ObservabilityConfig) {
    let fallback = format!(
        "implementation_server={},tower_http=info",
        config.log_level
    );

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
