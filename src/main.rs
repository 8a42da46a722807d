//! Diagnostic Log - Binary Entry Point
//!
//! Serves the diagnostic log's rendering surface over HTTP.

use std::env;
use std::sync::Arc;

use diagnostic_log::api::{create_router, AppState};
use diagnostic_log::{DiagnosticLog, Error, LogConfig, Result};
use tracing_subscriber::EnvFilter;

const DEFAULT_ADDR: &str = "127.0.0.1:3030";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("diagnostic_log=info")),
        )
        .init();

    let config = LogConfig::from_env()?;
    let log = Arc::new(DiagnosticLog::with_config(config));
    let sweeper = log.start_sweeper();

    let addr = env::var("DIAGLOG_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    let listener = tokio::net::TcpListener::bind(addr.as_str()).await?;
    tracing::info!(%addr, "diagnostic log listening");

    log.info(format!("Diagnostic log v{} started", diagnostic_log::VERSION));

    let app = create_router(Arc::new(AppState::new(log.clone())));
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| Error::Server(e.to_string()))?;

    sweeper.cancel().await;
    tracing::info!("diagnostic log stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
}
