//! StatsAggregator: project every stored record into the admin summary.
//!
//! Read-only. Not a point-in-time snapshot: a record may change between the
//! listing and its fetch, and slugs are read one after another.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;

use blogstats_core::error::Result;
use blogstats_core::{slug_from_key, EngagementRecord, SlugSummary, StatsReport};

use crate::store::MetricsStore;

/// Result of one aggregation pass.
#[derive(Debug)]
pub struct Aggregation {
    pub report: StatsReport,
    /// Keys in the `stats:` namespace whose value was unparsable.
    pub skipped: usize,
}

pub struct StatsAggregator {
    store: Arc<dyn MetricsStore>,
}

impl StatsAggregator {
    pub fn new(store: Arc<dyn MetricsStore>) -> Self {
        Self { store }
    }

    /// List, filter to `stats:` keys, fetch and project each one.
    /// A bad record is skipped; only store failures abort the pass.
    pub async fn collect(&self) -> Result<Aggregation> {
        let keys = self.store.list().await?;

        let mut stats = BTreeMap::new();
        let mut skipped = 0;

        for key in &keys {
            let Some(slug) = slug_from_key(key) else {
                continue;
            };
            let Some(raw) = self.store.get(key).await? else {
                // deleted between list and get
                continue;
            };
            match EngagementRecord::from_json(&raw) {
                Ok(rec) => {
                    stats.insert(slug.to_string(), SlugSummary::from_record(&rec));
                }
                Err(e) => {
                    skipped += 1;
                    tracing::warn!(%key, error = %e, "skipping unparsable engagement record");
                }
            }
        }

        Ok(Aggregation {
            report: StatsReport::new(Utc::now(), stats),
            skipped,
        })
    }
}
