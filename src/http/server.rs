//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the liveness and dispatch routes
//! - Wire up middleware (request ID, tracing, timeout, body limit, auth)
//! - Serve the router with graceful shutdown
//!
//! Request handling holds no mutable state; the only shared data is the
//! immutable configuration behind an `Arc`.

use axum::{
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServerConfig;
use crate::dispatch::{self, DispatchRequest};
use crate::http::request::UuidRequestId;
use crate::http::response::LivenessBody;
use crate::security::auth::api_key_auth;

/// Application state injected into handlers and middleware.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
}

/// HTTP server for the implementation API.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServerConfig) -> Self {
        let state = AppState {
            config: Arc::new(config),
        };
        let router = Self::build_router(state);
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// The auth middleware covers every route, the liveness route
    /// included.
    fn build_router(state: AppState) -> Router {
        let request_timeout = Duration::from_secs(state.config.timeouts.request_secs);
        let max_body_size = state.config.security.max_body_size;

        Router::new()
            .route("/test", get(liveness))
            .route("/gptImplement", post(gpt_implement))
            .layer(middleware::from_fn_with_state(state.clone(), api_key_auth))
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::x_request_id(UuidRequestId))
                    .layer(TraceLayer::new_for_http())
                    .layer(RequestBodyLimitLayer::new(max_body_size))
                    .layer(TimeoutLayer::new(request_timeout))
                    .layer(PropagateRequestIdLayer::x_request_id()),
            )
            .with_state(state)
    }

    /// Run the server until the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Liveness handler for `GET /test`.
async fn liveness() -> Json<LivenessBody> {
    Json(LivenessBody::new())
}

/// Dispatch handler for `POST /gptImplement`.
async fn gpt_implement(Json(request): Json<DispatchRequest>) -> Response {
    match dispatch::dispatch(request) {
        Ok(envelope) => Json(envelope).into_response(),
        Err(err) => err.into_response(),
    }
}
