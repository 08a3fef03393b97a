//! OctoFit dashboard server.
//!
//! Serves the compiled Yew frontend. The tracker API itself is a separate
//! service; the frontend talks to it directly.

mod config;
mod routes;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use config::ServerConfig;
use routes::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("octofit_server=info,tower_http=info")),
        )
        .init();

    let config = ServerConfig::parse();
    config.validate()?;

    let app = build_router(&config.dist);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, dist = %config.dist.display(), "serving dashboard");

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
