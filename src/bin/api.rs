use anyhow::{Context, Result};
use summary::{api, app_state::AppState, config::Config, telemetry};
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    telemetry::init_tracing();

    // A missing API key stops the process before anything is bound.
    let config = Config::from_env().inspect_err(|e| error!("configuration error: {}", e))?;
    info!(?config, "configuration loaded");

    let state = AppState::from_config(&config)?;
    let app = api::router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("failed to bind to {}", config.bind_addr()))?;
    info!("server running on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    info!("Received shutdown signal, initiating graceful shutdown...");
}
