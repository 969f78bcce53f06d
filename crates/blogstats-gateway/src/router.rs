//! Axum router wiring.

use axum::{
    routing::{get, post},
    Router,
};

use crate::{api, app_state::AppState, ops};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/blog-event", post(api::blog_event::blog_event))
        // path used by the first deployment of the page script
        .route("/blog-event", post(api::blog_event::blog_event))
        .route("/api/blog-admin-stats", get(api::admin_stats::admin_stats))
        .route("/healthz", get(ops::healthz))
        .route("/readyz", get(ops::readyz))
        .route("/metrics", get(ops::metrics))
        .with_state(state)
}
