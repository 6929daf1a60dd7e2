use anyhow::{Context, Result};
use tracing::{info, warn};

use tidewatch::{router, AppState};
use tidewatch_core::AppConfig;

pub async fn run(config: &AppConfig, port: Option<u16>) -> Result<()> {
    let state = AppState::from_config(config)?;

    if !config.ai.has_credential() {
        warn!("No completion API key configured; summaries and answers will return configuration errors");
    }

    let addr = format!("{}:{}", config.server.host, port.unwrap_or(config.server.port));
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Tidewatch API listening on http://{}", listener.local_addr()?);
    info!("Reading {} feed sources", state.aggregator.sources().len());

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c().await.ok();
    info!("Received shutdown signal");
}
