//! Metrics key-value store.
//!
//! The handlers only need `get`, `put`, and `list`; there is no transaction
//! or compare-and-swap in this contract. Values are opaque strings (JSON text
//! for engagement records).

pub mod file;
pub mod instrumented;
pub mod memory;

use std::sync::Arc;

use async_trait::async_trait;

use blogstats_core::error::Result;

use crate::config::{StoreKind, StoreSection};

pub use file::FileStore;
pub use instrumented::InstrumentedStore;
pub use memory::MemoryStore;

#[async_trait]
pub trait MetricsStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>>;
    /// Overwrite the value under `key` in full.
    async fn put(&self, key: &str, value: String) -> Result<()>;
    /// Every key currently present, in no particular order.
    async fn list(&self) -> Result<Vec<String>>;
}

/// Build the backend selected by config.
pub async fn open(cfg: &StoreSection) -> Result<Arc<dyn MetricsStore>> {
    match cfg.kind {
        StoreKind::Memory => Ok(Arc::new(MemoryStore::new())),
        StoreKind::File => {
            // validate() guarantees the path for file stores.
            let path = cfg.path.as_deref().unwrap_or_default();
            Ok(Arc::new(FileStore::open(path).await?))
        }
    }
}
