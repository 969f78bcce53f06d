//! Admin projection of stored records.

use std::collections::BTreeMap;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::record::EngagementRecord;

/// Human-facing numbers for one slug.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlugSummary {
    pub views: u64,
    pub avg_time_seconds: f64,
    pub max_scroll_pct: f64,
}

impl SlugSummary {
    /// `avgTimeSeconds` = total ms / views / 1000 at one decimal, `0` without views.
    /// `maxScrollPct` is the stored maximum at two decimals, unit unchanged.
    pub fn from_record(rec: &EngagementRecord) -> Self {
        let avg_time_seconds = if rec.views == 0 {
            0.0
        } else {
            round_to(rec.total_time_ms as f64 / rec.views as f64 / 1000.0, 1)
        };
        Self {
            views: rec.views,
            avg_time_seconds,
            max_scroll_pct: round_to(rec.max_scroll_fraction, 2),
        }
    }
}

/// Body of `GET /api/blog-admin-stats`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsReport {
    /// ISO-8601 UTC, millisecond precision.
    pub updated: String,
    pub stats: BTreeMap<String, SlugSummary>,
}

impl StatsReport {
    pub fn new(at: DateTime<Utc>, stats: BTreeMap<String, SlugSummary>) -> Self {
        Self {
            updated: at.to_rfc3339_opts(SecondsFormat::Millis, true),
            stats,
        }
    }
}

fn round_to(v: f64, decimals: i32) -> f64 {
    let f = 10f64.powi(decimals);
    (v * f).round() / f
}
