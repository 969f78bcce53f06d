use async_trait::async_trait;
use dashmap::DashMap;

use blogstats_core::error::Result;

use super::MetricsStore;

/// Process-local store. Contents are lost on restart.
#[derive(Default)]
pub struct MemoryStore {
    entries: DashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl MetricsStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).map(|v| v.value().clone()))
    }

    async fn put(&self, key: &str, value: String) -> Result<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<String>> {
        Ok(self.entries.iter().map(|e| e.key().clone()).collect())
    }
}
