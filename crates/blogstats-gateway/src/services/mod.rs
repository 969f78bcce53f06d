//! Engagement services: ingestion (write path) and aggregation (admin read path).
//!
//! Both are transport-agnostic and hold only an `Arc<dyn MetricsStore>`, so
//! tests can drive them against an in-memory fake.

pub mod ingest;
pub mod slug_lock;
pub mod stats;

pub use ingest::EventIngestor;
pub use slug_lock::SlugLocks;
pub use stats::{Aggregation, StatsAggregator};
