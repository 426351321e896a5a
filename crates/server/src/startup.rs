use std::{net::SocketAddr, time::Duration};

use configs::{AppConfig, ServerConfig};
use migration::MigratorTrait;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes;
use crate::state::AppState;

fn bind_addr(server: &ServerConfig) -> Result<SocketAddr, StartupError> {
    format!("{}:{}", server.host, server.port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("server address: {e}")))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received, draining connections");
}

/// Connect to the store, apply migrations if enabled, and serve HTTP until Ctrl+C.
pub async fn run(cfg: AppConfig) -> Result<(), StartupError> {
    let db = models::db::connect_with_config(&cfg.database).await?;
    if cfg.database.run_migrations {
        migration::Migrator::up(&db, None).await?;
        info!("database migrations applied");
    }

    let state = AppState::from_db(db, &cfg.auth.token);
    let app = routes::build_router(state, Duration::from_secs(cfg.server.request_timeout_secs));

    let addr = bind_addr(&cfg.server)?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "sellers api listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
