//! Test doubles for outage scenarios
//!
//! Wrap the in-memory backends with a switch that makes every call fail,
//! so callers can exercise the degraded paths of the checkpoint store and
//! batch emitter without a real Redis or object store.

use crate::emitter::blob::{BlobError, BlobResult, BlobStore, Visibility};
use crate::emitter::providers::MemoryBlobStore;
use crate::store::{KeyValueStore, MemoryKeyValueStore, StoreError, StoreResult};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Key-value store that can be switched offline
///
/// Clones share both the entries and the availability switch.
#[derive(Debug, Clone)]
pub struct FlakyKeyValueStore {
    inner: MemoryKeyValueStore,
    available: Arc<AtomicBool>,
}

impl Default for FlakyKeyValueStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FlakyKeyValueStore {
    pub fn new() -> Self {
        Self {
            inner: MemoryKeyValueStore::new(),
            available: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    /// The entries that reached the backend
    pub fn inner(&self) -> &MemoryKeyValueStore {
        &self.inner
    }

    fn check(&self, op: &str) -> StoreResult<()> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(StoreError::ConnectionError(format!(
                "{op} failed: backend offline"
            )))
        }
    }
}

impl KeyValueStore for FlakyKeyValueStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        self.check("GET")?;
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.check("SET")?;
        self.inner.set(key, value).await
    }

    async fn health_check(&self) -> StoreResult<bool> {
        Ok(self.available.load(Ordering::SeqCst))
    }

    fn provider_name(&self) -> &'static str {
        "flaky"
    }

    fn is_distributed(&self) -> bool {
        true
    }
}

/// Blob store that can be switched offline
#[derive(Debug, Clone)]
pub struct FailingBlobStore {
    inner: MemoryBlobStore,
    available: Arc<AtomicBool>,
}

impl Default for FailingBlobStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FailingBlobStore {
    pub fn new() -> Self {
        Self {
            inner: MemoryBlobStore::new(),
            available: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    /// The objects that reached the backend
    pub fn inner(&self) -> &MemoryBlobStore {
        &self.inner
    }
}

impl BlobStore for FailingBlobStore {
    async fn put(
        &self,
        path: &str,
        body: Vec<u8>,
        content_type: &str,
        visibility: Visibility,
    ) -> BlobResult<()> {
        if !self.available.load(Ordering::SeqCst) {
            return Err(BlobError::Backend(format!("PUT {path} failed: backend offline")));
        }
        self.inner.put(path, body, content_type, visibility).await
    }

    fn provider_name(&self) -> &'static str {
        "failing"
    }
}
