mod api;
mod app;
mod config;
mod error;
mod logging;
mod middleware;
mod model;
mod service;
mod util;

use anyhow::Context;
use std::net::SocketAddr;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = config::AppConfig::from_env().context("failed to load configuration")?;
    // flushes the log file on drop, so it lives until the server stops
    let _log_guard = logging::init(&config.logging)?;

    let addr: SocketAddr = config
        .server
        .bind
        .parse()
        .context("invalid SERVER_BIND address")?;

    let app = app::build_router(&config).context("failed to set up ranking provider")?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!(%addr, ranker = config.ranker.kind.as_str(), "recipe service listening");
    axum::serve(listener, app).await.context("server failed")?;

    Ok(())
}
