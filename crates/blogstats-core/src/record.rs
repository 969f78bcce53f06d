//! Per-slug aggregate persisted under `stats:<slug>`.

use serde::{Deserialize, Serialize};

use crate::error::{BlogStatsError, Result};
use crate::event::{BlogEvent, EventKind};

/// Key namespace for engagement records.
pub const STATS_KEY_PREFIX: &str = "stats:";

/// Store key for a slug. The slug is used verbatim.
pub fn stats_key(slug: &str) -> String {
    format!("{STATS_KEY_PREFIX}{slug}")
}

/// Inverse of [`stats_key`]. `None` for keys outside the namespace.
pub fn slug_from_key(key: &str) -> Option<&str> {
    key.strip_prefix(STATS_KEY_PREFIX)
}

/// Running aggregate for one content slug.
///
/// Stored as a JSON object. Records written by the first deployment used
/// `totalTime` and `totalScroll`; both are still accepted on read and rewritten
/// under the current names on the next update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngagementRecord {
    pub views: u64,
    #[serde(alias = "totalTime")]
    pub total_time_ms: u64,
    #[serde(alias = "totalScroll")]
    pub max_scroll_fraction: f64,
}

impl EngagementRecord {
    /// Merge one event into the aggregate.
    ///
    /// `view` bumps the counter; every event adds its time; scroll keeps the
    /// running maximum so it never decreases.
    pub fn apply(&mut self, ev: &BlogEvent) {
        if ev.kind == EventKind::View {
            self.views = self.views.saturating_add(1);
        }
        self.total_time_ms = self.total_time_ms.saturating_add(ev.t_ms);
        self.max_scroll_fraction = self.max_scroll_fraction.max(ev.scroll_pct);
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw)
            .map_err(|e| BlogStatsError::BadRequest(format!("invalid stored record: {e}")))
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| BlogStatsError::Internal(format!("record encode failed: {e}")))
    }
}
