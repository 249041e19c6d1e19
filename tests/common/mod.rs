//! Shared utilities for integration tests.

use std::net::SocketAddr;
use tokio::net::TcpListener;

use implementation_server::config::ServerConfig;
use implementation_server::{HttpServer, Shutdown};

/// Credential configured into every test server.
pub const TEST_API_KEY: &str = "test-secret-key";

/// Boot the real server on an ephemeral port.
///
/// Returns the bound address and the shutdown handle; triggering the
/// handle stops the server.
pub async fn spawn_server() -> (SocketAddr, Shutdown) {
    let mut config = ServerConfig::default();
    config.auth.api_key = TEST_API_KEY.to_string();
    spawn_server_with(config).await
}

#[allow(dead_code)]
pub async fn spawn_server_with(config: ServerConfig) -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(config);

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    (addr, shutdown)
}

/// Client without connection pooling, so each test request is independent.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
