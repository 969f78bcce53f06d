//! Lightweight in-process metrics.
//!
//! Operational counters for the service itself (not the engagement data it
//! stores), rendered in Prometheus text format by the `/metrics` handler.

pub mod metrics;

pub use metrics::ServiceMetrics;
