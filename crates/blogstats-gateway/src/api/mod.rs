//! Public HTTP endpoints.
//!
//! - `POST /api/blog-event`      : beacon ingestion (also `/blog-event`)
//! - `GET  /api/blog-admin-stats`: token-gated per-slug summary

pub mod admin_stats;
pub mod blog_event;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use blogstats_core::error::BlogStatsError;

/// HTTP face of `BlogStatsError`. Bodies are short plain text; details go to the log.
#[derive(Debug)]
pub struct ApiError(pub BlogStatsError);

impl From<BlogStatsError> for ApiError {
    fn from(e: BlogStatsError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self.0 {
            BlogStatsError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad request"),
            BlogStatsError::Unauthorized => (StatusCode::UNAUTHORIZED, "unauthorized"),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, "internal error"),
        };
        (status, body).into_response()
    }
}
