//! Engagement beacon payload (`POST /api/blog-event`).
//!
//! Wire shape (JSON object):
//! `{ "type": "view" | "unload", "slug": string, "t": number, "scrollPct": number }`
//!
//! - `t` is milliseconds spent on the page when the beacon fired.
//! - `scrollPct` is whatever scroll depth the client reports. The beacon sends
//!   a fraction rounded to two decimals; the server never re-normalizes it.
//!
//! Decoding happens exactly once, before any store access. Every failure is a
//! `BadRequest`.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{BlogStatsError, Result};

/// Event type carried in the `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// Page load. Counts as one view.
    View,
    /// Page being left. Contributes time and scroll only.
    Unload,
}

impl EventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::View => "view",
            EventKind::Unload => "unload",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "view" => Some(EventKind::View),
            "unload" => Some(EventKind::Unload),
            _ => None,
        }
    }
}

/// Validated engagement event.
#[derive(Debug, Clone, PartialEq)]
pub struct BlogEvent {
    pub kind: EventKind,
    pub slug: String,
    /// Elapsed time on page, whole milliseconds.
    pub t_ms: u64,
    pub scroll_pct: f64,
}

/// Lenient wire form; presence and ranges are checked in `BlogEvent::from_slice`.
#[derive(Debug, Deserialize)]
struct RawEvent {
    #[serde(rename = "type")]
    kind: Option<String>,
    slug: Option<String>,
    t: Option<f64>,
    #[serde(rename = "scrollPct")]
    scroll_pct: Option<f64>,
}

impl BlogEvent {
    pub fn new(kind: EventKind, slug: impl Into<String>, t_ms: u64, scroll_pct: f64) -> Self {
        Self {
            kind,
            slug: slug.into(),
            t_ms,
            scroll_pct,
        }
    }

    /// Decode and validate a request body.
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(body)
            .map_err(|e| BlogStatsError::BadRequest(format!("invalid json: {e}")))?;
        // derived struct decoding would also accept a positional array
        if !value.is_object() {
            return Err(BlogStatsError::BadRequest("body must be a json object".into()));
        }
        let raw: RawEvent = serde_json::from_value(value)
            .map_err(|e| BlogStatsError::BadRequest(format!("invalid event: {e}")))?;

        let slug = match raw.slug {
            Some(s) if !s.is_empty() => s,
            _ => return Err(BlogStatsError::BadRequest("missing slug".into())),
        };

        let kind = raw
            .kind
            .as_deref()
            .ok_or_else(|| BlogStatsError::BadRequest("missing type".into()))
            .and_then(|k| {
                EventKind::parse(k)
                    .ok_or_else(|| BlogStatsError::BadRequest(format!("unknown type: {k}")))
            })?;

        let t = raw.t.unwrap_or(0.0);
        if !t.is_finite() || t < 0.0 {
            return Err(BlogStatsError::BadRequest("t must be a non-negative number".into()));
        }

        let scroll_pct = raw.scroll_pct.unwrap_or(0.0);
        if !scroll_pct.is_finite() {
            return Err(BlogStatsError::BadRequest("scrollPct must be finite".into()));
        }

        Ok(Self {
            kind,
            slug,
            // `as` saturates for values beyond u64::MAX.
            t_ms: t.round() as u64,
            scroll_pct,
        })
    }
}
