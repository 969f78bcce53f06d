//! EventIngestor: merge one beacon into the slug's stored aggregate.
//!
//! One `get` and one `put` per event. The store offers no compare-and-swap,
//! so two writers racing on the same slug can lose an update. With
//! `serialize_per_slug` enabled, writers inside this process queue on a
//! per-slug lock instead; writers in other processes can still interleave.

use std::sync::Arc;

use blogstats_core::error::{BlogStatsError, Result};
use blogstats_core::{stats_key, BlogEvent, EngagementRecord};

use super::slug_lock::SlugLocks;
use crate::store::MetricsStore;

pub struct EventIngestor {
    store: Arc<dyn MetricsStore>,
    locks: Option<SlugLocks>,
}

impl EventIngestor {
    pub fn new(store: Arc<dyn MetricsStore>, serialize_per_slug: bool) -> Self {
        Self {
            store,
            locks: serialize_per_slug.then(SlugLocks::new),
        }
    }

    /// Apply `ev` and persist. Returns the record as written.
    pub async fn ingest(&self, ev: &BlogEvent) -> Result<EngagementRecord> {
        let key = stats_key(&ev.slug);

        let _guard = match &self.locks {
            Some(locks) => Some(locks.lock(&key).await),
            None => None,
        };

        let mut record = match self.store.get(&key).await? {
            Some(raw) => EngagementRecord::from_json(&raw)
                .map_err(|e| BlogStatsError::Store(format!("{key}: {e}")))?,
            None => EngagementRecord::default(),
        };

        record.apply(ev);

        self.store.put(&key, record.to_json()?).await?;

        tracing::debug!(
            slug = %ev.slug,
            kind = ev.kind.as_str(),
            views = record.views,
            total_time_ms = record.total_time_ms,
            "engagement event merged"
        );
        Ok(record)
    }
}
