//! Shared error type across blogstats crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed beacon.
    BadRequest,
    /// Admin credential missing or wrong.
    Unauthorized,
    /// Metrics store read/write/list failed.
    StoreFailure,
    /// Invalid configuration.
    Config,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in logs and metrics labels.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::Unauthorized => "UNAUTHORIZED",
            ClientCode::StoreFailure => "STORE_FAILURE",
            ClientCode::Config => "CONFIG",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, BlogStatsError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum BlogStatsError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unauthorized")]
    Unauthorized,
    #[error("store: {0}")]
    Store(String),
    #[error("config: {0}")]
    Config(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl BlogStatsError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            BlogStatsError::BadRequest(_) => ClientCode::BadRequest,
            BlogStatsError::Unauthorized => ClientCode::Unauthorized,
            BlogStatsError::Store(_) => ClientCode::StoreFailure,
            BlogStatsError::Config(_) => ClientCode::Config,
            BlogStatsError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            BlogStatsError::Internal(_) => ClientCode::Internal,
        }
    }

    /// True for failures caused by the caller rather than the server.
    pub fn is_client_error(&self) -> bool {
        matches!(self, BlogStatsError::BadRequest(_) | BlogStatsError::Unauthorized)
    }
}
