//! Store decorator that records latency and failures per operation.

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;

use blogstats_core::error::Result;

use super::MetricsStore;
use crate::obs::ServiceMetrics;

pub struct InstrumentedStore {
    inner: Arc<dyn MetricsStore>,
    metrics: Arc<ServiceMetrics>,
}

impl InstrumentedStore {
    pub fn new(inner: Arc<dyn MetricsStore>, metrics: Arc<ServiceMetrics>) -> Self {
        Self { inner, metrics }
    }

    fn record<T>(&self, op: &'static str, started: Instant, res: &Result<T>) {
        self.metrics
            .store_duration
            .observe(&[("op", op)], started.elapsed());
        if let Err(e) = res {
            self.metrics.store_errors.inc(&[("op", op)]);
            tracing::error!(op, error = %e, "metrics store call failed");
        }
    }
}

#[async_trait]
impl MetricsStore for InstrumentedStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let started = Instant::now();
        let res = self.inner.get(key).await;
        self.record("get", started, &res);
        res
    }

    async fn put(&self, key: &str, value: String) -> Result<()> {
        let started = Instant::now();
        let res = self.inner.put(key, value).await;
        self.record("put", started, &res);
        res
    }

    async fn list(&self) -> Result<Vec<String>> {
        let started = Instant::now();
        let res = self.inner.list().await;
        self.record("list", started, &res);
        res
    }
}
