//! Web host: upload form, results page, and health probe.

pub mod error;
pub mod handlers;
pub mod templates;

use anyhow::Result;
use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::config::ServerSettings;

/// Builds the application router.
pub fn router(settings: &ServerSettings) -> Router {
    Router::new()
        .route("/", get(handlers::index).post(handlers::upload))
        .route("/health", get(handlers::health))
        .layer(DefaultBodyLimit::max(settings.max_upload_bytes))
}

/// Serves the router on `listener` until Ctrl+C.
pub async fn serve(listener: TcpListener, settings: &ServerSettings) -> Result<()> {
    let addr = listener.local_addr()?;
    info!(%addr, "Server listening");
    info!("Upload form: http://{}/", addr);

    axum::serve(listener, router(settings))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            warn!(error = %e, "Could not listen for Ctrl+C; running until killed");
            std::future::pending::<()>().await;
        }
    }
}
