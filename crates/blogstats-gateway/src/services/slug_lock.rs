//! Per-key async locks for read-modify-write sequences.
//!
//! Entries are created on demand and dropped again once nobody holds or waits
//! for them, so the map only grows with the number of slugs in flight.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};

#[derive(Default)]
pub struct SlugLocks {
    locks: DashMap<String, Arc<Mutex<()>>>,
}

impl SlugLocks {
    pub fn new() -> Self {
        Self {
            locks: DashMap::new(),
        }
    }

    /// Wait for exclusive access to `key`.
    pub async fn lock(&self, key: &str) -> SlugGuard<'_> {
        let m = self
            .locks
            .entry(key.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .value()
            .clone();
        let guard = m.lock_owned().await;
        SlugGuard {
            locks: self,
            key: key.to_string(),
            guard: Some(guard),
        }
    }

    /// Number of keys with a live lock entry.
    pub fn active(&self) -> usize {
        self.locks.len()
    }
}

pub struct SlugGuard<'a> {
    locks: &'a SlugLocks,
    key: String,
    guard: Option<OwnedMutexGuard<()>>,
}

impl Drop for SlugGuard<'_> {
    fn drop(&mut self) {
        drop(self.guard.take());
        // Only the map's own reference left: nobody holds or waits for it.
        self.locks
            .locks
            .remove_if(&self.key, |_, m| Arc::strong_count(m) == 1);
    }
}
