//! Handlers for `/api/*` routes.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use medgloss_core::preprocess::normalize_query;
use medgloss_formatter::{ErrorKind, FormatError};
use medgloss_types::ImageResult;
use serde::Deserialize;
use serde_json::json;
use tracing::warn;

use crate::ApiState;

#[derive(Deserialize)]
pub(crate) struct TermRequest {
    #[serde(default)]
    query: Option<String>,
}

#[derive(Deserialize)]
pub(crate) struct ImageParams {
    #[serde(default)]
    term: Option<String>,
}

fn json_error(status: StatusCode, msg: impl std::fmt::Display) -> Response {
    (status, Json(json!({ "error": msg.to_string() }))).into_response()
}

fn status_for(err: &FormatError) -> StatusCode {
    match err.kind() {
        ErrorKind::Validation => StatusCode::BAD_REQUEST,
        ErrorKind::Configuration => StatusCode::INTERNAL_SERVER_ERROR,
        ErrorKind::Upstream | ErrorKind::Parse => StatusCode::BAD_GATEWAY,
    }
}

/// POST /api/term
pub(crate) async fn term(
    State(state): State<ApiState>,
    payload: Result<Json<TermRequest>, JsonRejection>,
) -> Response {
    let query = payload
        .ok()
        .and_then(|Json(req)| req.query)
        .and_then(|q| normalize_query(&q));

    let Some(query) = query else {
        return json_error(StatusCode::BAD_REQUEST, FormatError::EmptyQuery);
    };

    match state.formatter.format(&query).await {
        Ok(record) => Json(record).into_response(),
        Err(e) => {
            warn!(%query, "term lookup failed: {e}");
            json_error(status_for(&e), e)
        }
    }
}

/// GET /api/image. Always 200, failures become an empty URL
pub(crate) async fn image(
    State(state): State<ApiState>,
    params: Result<Query<ImageParams>, QueryRejection>,
) -> Json<ImageResult> {
    let term = params
        .ok()
        .and_then(|Query(p)| p.term)
        .unwrap_or_default();

    Json(state.images.lookup(&term).await)
}

/// GET /api/health
pub(crate) async fn health(State(state): State<ApiState>) -> Response {
    let meta = state.formatter.metadata();
    Json(json!({
        "status": "ok",
        "formatter": meta.name,
        "model": meta.model,
        "requires_api_key": meta.requires_api_key,
        "images": state.images.name(),
    }))
    .into_response()
}
