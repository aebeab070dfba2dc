use anyhow::Context;
use tracing::{error, info};

use crate::config::AppConfig;
use crate::database::Database;
use crate::state::AppState;

/// Connect, bootstrap the schema, serve until ctrl-c, then close the pool.
pub async fn run(config: AppConfig) -> anyhow::Result<()> {
    let db = Database::connect(&config.database)
        .await
        .context("failed to connect to database")?;
    db.init().await.context("failed to create database schema")?;

    let app = crate::app::app(AppState::new(db.clone()), &config);

    let bind_addr = format!("0.0.0.0:{}", config.api.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    info!("Star Wars API listening on http://{}", bind_addr);

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error");

    db.close().await;
    served
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("failed to listen for shutdown signal: {}", e);
        return;
    }
    info!("Shutdown signal received");
}
