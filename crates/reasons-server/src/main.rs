//! Binary entrypoint for the reasons HTTP server.
//!
//! Reads configuration from environment variables (a `.env` file in the
//! working directory is loaded first if present):
//! - `REASONS_STORE_URI`: document store connection string (required)
//! - `REASONS_ADDR`: listen address (default: "0.0.0.0:3000")
//! - `RUST_LOG`: tracing filter

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use reasons_server::config::{ServerConfig, DEFAULT_LOG_FILTER};
use reasons_server::router::build_router;
use reasons_server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;
    let state = AppState::new(&config)?;
    let app = build_router(state);

    tracing::info!("reasons server starting on {}", config.addr);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
