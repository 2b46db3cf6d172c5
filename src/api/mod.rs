//! HTTP API for Linkprobe
//!
//! Routes:
//! - `POST /api/fetch-urls` runs a batch in one of the fetch modes
//! - `GET /api/check-description` runs a single seed in seo mode
//! - `GET /health` liveness probe

mod handlers;
mod types;

pub use handlers::{check_description, fetch_urls, health, ApiError, AppState};
pub use types::{
    CheckDescriptionQuery, CheckDescriptionResponse, ErrorResponse, FetchUrlsRequest,
    FetchUrlsResponse, UrlsInput,
};

use crate::config::Config;
use crate::probe::Prober;
use crate::ProbeError;
use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Builds the application router
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/fetch-urls", post(fetch_urls))
        .route("/api/check-description", get(check_description))
        .route("/health", get(health))
        .with_state(state)
}

/// Builds the shared handler state from the configuration
pub fn app_state(config: &Config) -> Result<Arc<AppState>, ProbeError> {
    Ok(Arc::new(AppState {
        prober: Prober::new(config)?,
        max_urls: config.batch.max_urls,
    }))
}

/// Serves the API until the process is stopped
pub async fn serve(config: &Config, port: u16) -> Result<(), ProbeError> {
    let app = router(app_state(config)?);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Server running on port {}", port);
    axum::serve(listener, app).await?;

    Ok(())
}
