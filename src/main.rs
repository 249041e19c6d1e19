//! Implementation Server binary.

use clap::Parser;
use std::path::PathBuf;
use tokio::net::TcpListener;

use implementation_server::config::load_config;
use implementation_server::lifecycle::{signals, Shutdown};
use implementation_server::observability::init_logging;
use implementation_server::HttpServer;

#[derive(Parser)]
#[command(name = "implementation-server")]
#[command(about = "Authenticated action-dispatch HTTP server", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    init_logging(&config.observability);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    let shutdown = Shutdown::new();
    tokio::spawn(signals::listen_for_signals(shutdown.clone()));

    let server = HttpServer::new(config);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
