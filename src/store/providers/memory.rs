//! In-memory key-value provider
//!
//! Process-local backend for tests and single-instance deployments.
//! Checkpoints written here do not survive a restart and are not visible
//! to other processes.

use crate::store::errors::StoreResult;
use crate::store::traits::KeyValueStore;
use dashmap::DashMap;
use std::sync::Arc;
use tracing::debug;

/// In-memory key-value store backed by a `DashMap`
///
/// Clones share the same underlying map, so two checkpoint stores built from
/// clones of one `MemoryKeyValueStore` behave like two processes sharing a
/// durable backend.
#[derive(Debug, Clone, Default)]
pub struct MemoryKeyValueStore {
    entries: Arc<DashMap<String, String>>,
}

impl MemoryKeyValueStore {
    /// Create an empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently held
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no keys
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Snapshot of every key currently held
    pub fn keys(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.key().clone()).collect()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let result = self.entries.get(key).map(|v| v.value().clone());

        if result.is_some() {
            debug!(key = key, "Store HIT (memory)");
        } else {
            debug!(key = key, "Store MISS (memory)");
        }

        Ok(result)
    }

    async fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        debug!(key = key, "Store SET (memory)");
        Ok(())
    }

    async fn health_check(&self) -> StoreResult<bool> {
        Ok(true)
    }

    fn provider_name(&self) -> &'static str {
        "memory"
    }
}
