//! HTTP API for the formatter and image services.
//!
//! ```text
//! POST /api/term    { query }  -> { term, pronunciation_ar, meaning_ar, definition_ar }
//! GET  /api/image?term=...     -> { imageUrl }
//! GET  /api/health
//! ```

mod api;

use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use axum::routing::{get, post};
use medgloss_formatter::Formatter;
use medgloss_image::ImageLookup;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

/// Router state injected into every handler. Cheap to clone.
#[derive(Clone)]
pub struct ApiState {
    pub formatter: Arc<dyn Formatter>,
    pub images: Arc<dyn ImageLookup>,
}

pub fn build_router(state: ApiState) -> Router {
    Router::new()
        .route("/api/term", post(api::term))
        .route("/api/image", get(api::image))
        .route("/api/health", get(api::health))
        .with_state(state)
}

/// Serve the API until `shutdown` is cancelled
pub async fn serve(
    bind_addr: &str,
    state: ApiState,
    shutdown: CancellationToken,
) -> anyhow::Result<()> {
    let listener = TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("bind failed on {bind_addr}"))?;

    tracing::info!(%bind_addr, "api server listening");

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await
        .context("api server error")?;

    tracing::info!("api server shut down");
    Ok(())
}
