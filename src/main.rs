//! employee-relay
//!
//! A record feed and relay demo built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌────────────────────────────────────────────────┐
//!                    │                 EMPLOYEE RELAY                 │
//!                    │                                                │
//!     GET /server    │  ┌─────────┐    ┌─────────┐    ┌───────────┐  │
//!     ───────────────┼─▶│  http   │───▶│  feed   │───▶│ employee  │  │
//!                    │  │ server  │    │interval │    │ generator │  │
//!                    │  └────┬────┘    └─────────┘    └───────────┘  │
//!                    │       │                                        │
//!     GET /client    │       ▼                                        │
//!     ───────────────┼─▶┌─────────┐    ┌──────────┐                  │
//!                    │  │  relay  │───▶│ upstream │─── HTTP ──▶ /server
//!                    │  │handlers │    │  client  │                  │
//!                    │  └─────────┘    └──────────┘                  │
//!                    │                                                │
//!                    │  ┌──────────────────────────────────────────┐ │
//!                    │  │          Cross-Cutting Concerns          │ │
//!                    │  │   ┌────────┐  ┌─────────┐  ┌─────────┐   │ │
//!                    │  │   │ config │  │ tracing │  │lifecycle│   │ │
//!                    │  │   └────────┘  └─────────┘  └─────────┘   │ │
//!                    │  └──────────────────────────────────────────┘ │
//!                    └────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use employee_relay::config::{load_config, ServiceConfig};
use employee_relay::http::HttpServer;
use employee_relay::lifecycle::{signals, Shutdown};

/// Streams generated employee records and relays them over HTTP.
#[derive(Parser)]
#[command(name = "employee-relay", version)]
struct Args {
    /// Path to a TOML configuration file; defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "employee_relay=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("employee-relay v{} starting", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };

    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.base_url,
        age_limit = config.upstream.age_limit,
        interval_ms = config.feed.interval_ms,
        "Configuration loaded"
    );

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    // Wire OS signals to the shutdown broadcast
    let shutdown = Shutdown::new();
    let trigger = shutdown.clone();
    tokio::spawn(async move {
        signals::wait_for_signal().await;
        trigger.trigger();
    });

    // Create and run HTTP server
    let server = HttpServer::new(config, shutdown.clone())?;
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
