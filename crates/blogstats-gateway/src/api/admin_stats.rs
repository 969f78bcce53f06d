use axum::{
    extract::{Query, State},
    http::HeaderMap,
    response::{IntoResponse, Response},
    Json,
};

use super::ApiError;
use crate::app_state::AppState;
use crate::auth::supplied_token;

/// Query string as ordered pairs; repeated keys are kept.
pub type AdminQuery = Vec<(String, String)>;

/// First `token` value, like `URLSearchParams.get`.
pub fn first_token(query: &AdminQuery) -> Option<&str> {
    query
        .iter()
        .find(|(k, _)| k == "token")
        .map(|(_, v)| v.as_str())
}

/// `GET /api/blog-admin-stats?token=<secret>`
///
/// The credential is checked before the store is touched.
pub async fn admin_stats(
    State(app): State<AppState>,
    Query(q): Query<AdminQuery>,
    headers: HeaderMap,
) -> Response {
    let metrics = app.metrics();

    if let Err(e) = app
        .admin()
        .authorize(supplied_token(first_token(&q), &headers))
    {
        metrics.admin_requests.inc(&[("outcome", "unauthorized")]);
        tracing::warn!("admin stats request rejected");
        return ApiError(e).into_response();
    }

    match app.aggregator().collect().await {
        Ok(agg) => {
            metrics.admin_requests.inc(&[("outcome", "ok")]);
            if agg.skipped > 0 {
                metrics.records_skipped.add(&[], agg.skipped as u64);
            }
            tracing::info!(slugs = agg.report.stats.len(), skipped = agg.skipped, "admin stats served");
            Json(agg.report).into_response()
        }
        Err(e) => {
            metrics.admin_requests.inc(&[("outcome", "error")]);
            tracing::error!(error = %e, "admin stats aggregation failed");
            ApiError(e).into_response()
        }
    }
}
