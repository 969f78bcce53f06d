//! blogstats core: transport-agnostic engagement types, error surface, and
//! aggregation arithmetic.
//!
//! This crate defines the payload contract accepted from the browser beacon,
//! the per-slug record persisted in the metrics store, and the summary served
//! to the admin endpoint. It carries no HTTP or runtime dependencies so the
//! merge and projection rules can be exercised in isolation.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here.
//! All fallible paths must surface as `BlogStatsError`/`Result` so a malformed
//! beacon or a corrupt stored record never takes the process down.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod event;
pub mod record;
pub mod summary;

/// Shared result type.
pub use error::{BlogStatsError, Result};
pub use event::{BlogEvent, EventKind};
pub use record::{slug_from_key, stats_key, EngagementRecord, STATS_KEY_PREFIX};
pub use summary::{SlugSummary, StatsReport};
