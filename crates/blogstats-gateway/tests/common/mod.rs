//! Shared fixtures for gateway tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::response::Response;

use blogstats_core::error::{BlogStatsError, Result};
use blogstats_gateway::app_state::AppState;
use blogstats_gateway::auth::AdminToken;
use blogstats_gateway::config::ServiceConfig;
use blogstats_gateway::store::{MemoryStore, MetricsStore};

pub const TOKEN: &str = "s3cret";

/// In-memory store that counts every call and can be told to fail.
#[derive(Default)]
pub struct CountingStore {
    inner: MemoryStore,
    pub gets: AtomicUsize,
    pub puts: AtomicUsize,
    pub lists: AtomicUsize,
    pub fail: AtomicBool,
    /// Yield inside `get` so concurrent read-modify-writes interleave.
    pub yield_on_get: AtomicBool,
}

impl CountingStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn calls(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
            + self.puts.load(Ordering::SeqCst)
            + self.lists.load(Ordering::SeqCst)
    }

    pub async fn raw(&self, key: &str) -> Option<String> {
        self.inner.get(key).await.unwrap()
    }

    pub async fn seed(&self, key: &str, value: &str) {
        self.inner.put(key, value.to_string()).await.unwrap();
    }

    fn check(&self) -> Result<()> {
        if self.fail.load(Ordering::SeqCst) {
            Err(BlogStatsError::Store("injected failure".into()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl MetricsStore for CountingStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        if self.yield_on_get.load(Ordering::SeqCst) {
            tokio::task::yield_now().await;
        }
        self.inner.get(key).await
    }

    async fn put(&self, key: &str, value: String) -> Result<()> {
        self.puts.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        self.inner.put(key, value).await
    }

    async fn list(&self) -> Result<Vec<String>> {
        self.lists.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        self.inner.list().await
    }
}

pub fn app_with(store: Arc<CountingStore>, token: Option<&str>) -> AppState {
    AppState::new(
        ServiceConfig::default(),
        store,
        AdminToken::new(token.map(str::to_string)),
    )
}

pub async fn body_string(resp: Response) -> String {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
