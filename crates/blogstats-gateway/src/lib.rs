//! blogstats gateway library entry.
//!
//! Wires config, the metrics store, the ingest/aggregate services, and the
//! HTTP surface into one service. Consumed by the binary (`main.rs`) and by
//! integration tests.

pub mod api;
pub mod app_state;
pub mod auth;
pub mod config;
pub mod obs;
pub mod ops;
pub mod router;
pub mod services;
pub mod store;
