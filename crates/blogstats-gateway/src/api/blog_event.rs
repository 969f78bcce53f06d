use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use bytes::Bytes;

use blogstats_core::error::BlogStatsError;
use blogstats_core::BlogEvent;

use super::ApiError;
use crate::app_state::AppState;

/// `POST /api/blog-event`
///
/// 200 `ok` once merged, 400 before any store access when the body is
/// oversized or invalid, 500 when the store fails.
pub async fn blog_event(State(app): State<AppState>, body: Bytes) -> Response {
    let metrics = app.metrics();

    if body.len() > app.cfg().server.max_body_bytes {
        metrics.events_rejected.inc(&[("reason", "too_large")]);
        tracing::debug!(len = body.len(), "beacon body too large");
        return ApiError(BlogStatsError::BadRequest("body too large".into())).into_response();
    }

    let ev = match BlogEvent::from_slice(&body) {
        Ok(ev) => ev,
        Err(e) => {
            metrics.events_rejected.inc(&[("reason", "invalid")]);
            tracing::debug!(error = %e, "beacon rejected");
            return ApiError(e).into_response();
        }
    };

    match app.ingestor().ingest(&ev).await {
        Ok(_) => {
            metrics.events_ingested.inc(&[("kind", ev.kind.as_str())]);
            (StatusCode::OK, "ok").into_response()
        }
        Err(e) => {
            tracing::error!(slug = %ev.slug, error = %e, "beacon ingest failed");
            ApiError(e).into_response()
        }
    }
}
