//! Admin credential check.
//!
//! The admin endpoint takes a single shared secret, either as `?token=` or as
//! `Authorization: Bearer <token>`. With no secret configured every request
//! is rejected.

use axum::http::{header, HeaderMap};
use subtle::ConstantTimeEq;

use blogstats_core::error::{BlogStatsError, Result};

#[derive(Clone, Default)]
pub struct AdminToken {
    secret: Option<String>,
}

impl std::fmt::Debug for AdminToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminToken")
            .field("configured", &self.secret.is_some())
            .finish()
    }
}

impl AdminToken {
    pub fn new(secret: Option<String>) -> Self {
        Self {
            secret: secret.filter(|s| !s.is_empty()),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.secret.is_some()
    }

    pub fn authorize(&self, supplied: Option<&str>) -> Result<()> {
        match (self.secret.as_deref(), supplied) {
            (Some(secret), Some(given))
                if bool::from(secret.as_bytes().ct_eq(given.as_bytes())) =>
            {
                Ok(())
            }
            _ => Err(BlogStatsError::Unauthorized),
        }
    }
}

/// Pick the caller's token: query parameter first, then bearer header.
pub fn supplied_token<'a>(query: Option<&'a str>, headers: &'a HeaderMap) -> Option<&'a str> {
    query.or_else(|| {
        headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
    })
}
