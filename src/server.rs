//! Static content host
//!
//! Two routes only:
//! - `GET /` serves the portfolio document
//! - anything else is looked up in the static asset tree (404 if absent)

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use tower_http::services::ServeDir;

use crate::settings::ServerSettings;

/// Build the router for the given settings
pub fn router(settings: &ServerSettings) -> Router {
    let index = Arc::new(settings.index_file.clone());

    Router::new()
        .route("/", get(serve_index))
        .fallback_service(ServeDir::new(&settings.public_dir))
        .with_state(index)
}

/// Serve the portfolio document
async fn serve_index(State(index): State<Arc<PathBuf>>) -> Response {
    match tokio::fs::read_to_string(index.as_path()).await {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            log::warn!("Index document {} unreadable: {}", index.display(), e);
            StatusCode::NOT_FOUND.into_response()
        }
    }
}

/// Bind and serve until Ctrl-C
pub async fn serve(settings: ServerSettings) -> anyhow::Result<()> {
    if !settings.public_dir.is_dir() {
        log::warn!(
            "Static directory {} does not exist, only / will resolve",
            settings.public_dir.display()
        );
    }
    if !settings.index_file.is_file() {
        log::warn!("Index document {} not found", settings.index_file.display());
    }

    let app = router(&settings);
    let addr = settings.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    log::info!("Server is running at http://localhost:{}", settings.port);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    log::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for Ctrl-C: {}", e);
    }
    log::info!("Shutdown requested");
}
