//! Natal Planets HTTP Server Binary
//!
//! Entry point for the planetary-longitudes REST API. It builds the Horizons
//! client, sets up the HTTP router, and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin natal-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 3000)
//! - `ALLOWED_ORIGIN`: If set, CORS is restricted to this origin
//! - `HORIZONS_PACING_MS`: Pause between upstream calls (default: 200)
//! - `HORIZONS_TIMEOUT_SECS`: Upstream request timeout (default: 10)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::http::HeaderValue;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use natal_planets::config::ServerConfig;
use natal_planets::horizons::HorizonsClient;
use natal_planets::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting Natal Planets HTTP Server");

    let config = ServerConfig::from_env().map_err(|e| anyhow::anyhow!(e))?;

    let client = HorizonsClient::new(config.request_timeout)?;
    let state = AppState::new(Arc::new(client), config.pacing);

    let allowed_origin = config
        .allowed_origin
        .as_deref()
        .map(HeaderValue::from_str)
        .transpose()
        .context("ALLOWED_ORIGIN is not a valid header value")?;

    let app = create_router(state, allowed_origin);

    let addr: SocketAddr = config.bind_addr().parse()?;
    info!("Server running at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
