//! REST API server for in-memory user records.
//!
//! Wires the record store, router and hyper server together with
//! command-line configuration and Ctrl+C shutdown.

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::signal;
use tracing_subscriber::EnvFilter;

use user_store_api::{Router, Server};
use user_store_core::{config::ServerConfig, UserStore};

/// Command-line arguments for the user server.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value_t = 8080)]
    port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Request body read timeout in milliseconds
    #[arg(long, default_value_t = 5000)]
    request_timeout_ms: u64,

    /// Start with an empty store instead of the seed records
    #[arg(long)]
    no_seed: bool,
}

impl From<Args> for ServerConfig {
    fn from(args: Args) -> Self {
        Self {
            host: args.host,
            port: args.port,
            request_timeout_ms: args.request_timeout_ms,
            seed: !args.no_seed,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Arc::new(ServerConfig::from(args));
    let addr = config
        .socket_addr()
        .with_context(|| format!("Invalid listen address {}:{}", config.host, config.port))?;

    let store = if config.seed {
        UserStore::seeded()
    } else {
        UserStore::new()
    };
    let store = Arc::new(store);

    let router = Router::new(store, Arc::clone(&config)).context("Failed to build router")?;
    let server = Server::new(addr, router)
        .bind()
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!(
        host = %config.host,
        port = config.port,
        request_timeout_ms = config.request_timeout_ms,
        seed = config.seed,
        "Starting user server"
    );

    let server_handle = tokio::spawn(async move {
        if let Err(e) = server.serve().await {
            tracing::error!("Server error: {}", e);
        }
    });

    signal::ctrl_c()
        .await
        .context("Failed to listen for ctrl_c")?;
    tracing::info!("Shutting down server...");
    server_handle.abort();

    Ok(())
}
