use crate::api::types::{
    CheckDescriptionQuery, CheckDescriptionResponse, ErrorResponse, FetchUrlsRequest,
    FetchUrlsResponse,
};
use crate::probe::{FetchMode, Prober, SeedPayload};
use crate::url::prepare_batch;
use crate::UrlError;
use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

/// Shared state of the API handlers
#[derive(Debug)]
pub struct AppState {
    pub prober: Prober,
    pub max_urls: usize,
}

/// A request the API refuses with `400 {success: false, error}`
#[derive(Debug)]
pub struct ApiError(String);

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            success: false,
            error: self.0,
        });
        (StatusCode::BAD_REQUEST, body).into_response()
    }
}

impl From<UrlError> for ApiError {
    fn from(err: UrlError) -> Self {
        Self(err.to_string())
    }
}

/// `POST /api/fetch-urls`
///
/// Validation failures reject the whole batch; once validation passes the
/// response is always 200, with per-seed failures inside the results.
pub async fn fetch_urls(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<FetchUrlsRequest>, JsonRejection>,
) -> Result<Json<FetchUrlsResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!("Rejected fetch-urls body: {}", rejection.body_text());
        ApiError::bad_request("Invalid URLs format")
    })?;

    let mode = request.fetch_type.unwrap_or_default();
    let urls = request.urls.into_urls();

    if let Err(e) = prepare_batch(&urls, state.max_urls) {
        tracing::warn!("Rejected batch of {} URLs: {}", urls.len(), e);
        return Err(e.into());
    }

    let results = state.prober.probe_batch(&urls, mode).await;
    Ok(Json(FetchUrlsResponse::new(results)))
}

/// `GET /api/check-description?url=...`
pub async fn check_description(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CheckDescriptionQuery>,
) -> Result<Json<CheckDescriptionResponse>, ApiError> {
    let url = query
        .url
        .filter(|url| !url.trim().is_empty())
        .ok_or_else(|| ApiError::bad_request("URL parameter is required"))?;

    let result = state.prober.probe_seed(&url, FetchMode::Seo).await;
    if let Some(error) = result.error {
        return Err(ApiError::bad_request(error));
    }

    match result.payload {
        SeedPayload::Seo {
            duplicate_descriptions,
        } => Ok(Json(CheckDescriptionResponse::new(duplicate_descriptions))),
        other => Err(ApiError::bad_request(format!(
            "unexpected {} payload",
            other.mode()
        ))),
    }
}

/// `GET /health`
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
