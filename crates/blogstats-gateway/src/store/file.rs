//! Single-file JSON snapshot store.
//!
//! The whole keyspace lives in one JSON object. Every `put` rewrites the file
//! through a temp file + rename so a crash mid-write leaves the previous
//! snapshot intact. Suited to a personal site's traffic, not to high write rates.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;

use blogstats_core::error::{BlogStatsError, Result};

use super::MetricsStore;

pub struct FileStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl FileStore {
    /// Open `path`, loading the existing snapshot if there is one.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = match tokio::fs::read(&path).await {
            Ok(bytes) if bytes.is_empty() => BTreeMap::new(),
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                BlogStatsError::Store(format!("corrupt snapshot {}: {e}", path.display()))
            })?,
            Err(e) if e.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                return Err(BlogStatsError::Store(format!(
                    "read snapshot {} failed: {e}",
                    path.display()
                )))
            }
        };
        tracing::info!(path = %path.display(), keys = entries.len(), "file store opened");
        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        let bytes = serde_json::to_vec(entries)
            .map_err(|e| BlogStatsError::Store(format!("snapshot encode failed: {e}")))?;

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        tokio::fs::write(&tmp, &bytes)
            .await
            .map_err(|e| BlogStatsError::Store(format!("write {} failed: {e}", tmp.display())))?;
        tokio::fs::rename(&tmp, &self.path).await.map_err(|e| {
            BlogStatsError::Store(format!("rename to {} failed: {e}", self.path.display()))
        })
    }
}

#[async_trait]
impl MetricsStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn put(&self, key: &str, value: String) -> Result<()> {
        let mut entries = self.entries.lock().await;
        let prev = entries.insert(key.to_string(), value);
        if let Err(e) = self.persist(&entries).await {
            // keep memory and disk in agreement
            match prev {
                Some(v) => entries.insert(key.to_string(), v),
                None => entries.remove(key),
            };
            return Err(e);
        }
        Ok(())
    }

    async fn list(&self) -> Result<Vec<String>> {
        Ok(self.entries.lock().await.keys().cloned().collect())
    }
}
