//! Shared application state.
//!
//! Everything a handler touches is reachable from here and injected per
//! request through axum's `State`; there are no process-wide singletons.

use std::sync::Arc;

use blogstats_core::error::Result;

use crate::auth::AdminToken;
use crate::config::ServiceConfig;
use crate::obs::ServiceMetrics;
use crate::services::{EventIngestor, StatsAggregator};
use crate::store::{self, InstrumentedStore, MetricsStore};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ServiceConfig,
    admin: AdminToken,
    ingestor: EventIngestor,
    aggregator: StatsAggregator,
    metrics: Arc<ServiceMetrics>,
}

impl AppState {
    /// Assemble state around an already-open store.
    pub fn new(cfg: ServiceConfig, store: Arc<dyn MetricsStore>, admin: AdminToken) -> Self {
        let metrics = Arc::new(ServiceMetrics::default());
        let store: Arc<dyn MetricsStore> =
            Arc::new(InstrumentedStore::new(store, Arc::clone(&metrics)));

        if !admin.is_configured() {
            tracing::warn!("no admin token configured; admin stats endpoint will reject all requests");
        }

        let ingestor = EventIngestor::new(Arc::clone(&store), cfg.ingest.serialize_per_slug);
        let aggregator = StatsAggregator::new(store);

        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                admin,
                ingestor,
                aggregator,
                metrics,
            }),
        }
    }

    /// Open the configured store and resolve the admin secret from the environment.
    pub async fn from_config(cfg: ServiceConfig) -> Result<Self> {
        let store = store::open(&cfg.store).await?;
        let admin = AdminToken::new(cfg.admin.resolve_token(|k| std::env::var(k).ok()));
        Ok(Self::new(cfg, store, admin))
    }

    pub fn cfg(&self) -> &ServiceConfig {
        &self.inner.cfg
    }

    pub fn admin(&self) -> &AdminToken {
        &self.inner.admin
    }

    pub fn ingestor(&self) -> &EventIngestor {
        &self.inner.ingestor
    }

    pub fn aggregator(&self) -> &StatsAggregator {
        &self.inner.aggregator
    }

    pub fn metrics(&self) -> Arc<ServiceMetrics> {
        Arc::clone(&self.inner.metrics)
    }

    pub fn set_draining(&self) {
        self.inner.metrics.set_draining();
    }

    pub fn is_draining(&self) -> bool {
        self.inner.metrics.is_draining()
    }
}
