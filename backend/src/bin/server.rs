//! Automobile sales dashboard HTTP server.
//!
//! Loads the sales CSV once, sets up the HTTP router, and starts serving
//! requests.
//!
//! # Usage
//!
//! ```bash
//! SALES_DATA_PATH=historical_automobile_sales.csv cargo run --bin autosales-server
//! ```
//!
//! # Environment Variables
//!
//! - `DASHBOARD_CONFIG`: Path to a TOML config file (default: search for `dashboard.toml`)
//! - `SALES_DATA_PATH`: Dataset path (default: historical_automobile_sales.csv)
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8050)
//! - `DASHBOARD_DEBUG`: Verbose logging (default: false)
//! - `RUST_LOG`: Log level (default: info, or debug in debug mode)

use std::env;
use std::sync::Arc;

use anyhow::Context;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use autosales_dashboard::config::DashboardConfig;
use autosales_dashboard::data;
use autosales_dashboard::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = DashboardConfig::load().context("Failed to load configuration")?;

    let default_level = if config.server.debug {
        Level::DEBUG
    } else {
        Level::INFO
    };
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(default_level),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting automobile sales dashboard");

    let path = config.data.path.clone();
    let table = tokio::task::spawn_blocking(move || data::load(&path))
        .await?
        .with_context(|| format!("Failed to load sales data from {}", config.data.path.display()))?;
    info!(
        records = table.len(),
        checksum = %table.checksum(),
        "Sales data loaded"
    );

    let state = AppState::from_table(Arc::new(table));
    let app = create_router(state);

    let addr = config.bind_address()?;
    info!("Dashboard listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
