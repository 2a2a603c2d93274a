//! In-memory blob provider

use crate::emitter::blob::{BlobResult, BlobStore, Visibility};
use dashmap::DashMap;
use std::sync::Arc;
use tracing::debug;

/// An object as it was handed to the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub body: Vec<u8>,
    pub content_type: String,
    pub visibility: Visibility,
}

/// Blob store keeping objects in a `DashMap`
///
/// A second `put` to the same path replaces the object, matching S3.
/// Clones share the same objects.
#[derive(Debug, Clone, Default)]
pub struct MemoryBlobStore {
    objects: Arc<DashMap<String, StoredObject>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, path: &str) -> Option<StoredObject> {
        self.objects.get(path).map(|o| o.value().clone())
    }

    /// Every stored path, sorted
    pub fn paths(&self) -> Vec<String> {
        let mut paths: Vec<String> = self.objects.iter().map(|o| o.key().clone()).collect();
        paths.sort();
        paths
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl BlobStore for MemoryBlobStore {
    async fn put(
        &self,
        path: &str,
        body: Vec<u8>,
        content_type: &str,
        visibility: Visibility,
    ) -> BlobResult<()> {
        let bytes = body.len();
        self.objects.insert(
            path.to_string(),
            StoredObject {
                body,
                content_type: content_type.to_string(),
                visibility,
            },
        );
        debug!(path = path, bytes = bytes, "Blob PUT (memory)");
        Ok(())
    }

    fn provider_name(&self) -> &'static str {
        "memory"
    }

    fn uri_scheme(&self) -> &'static str {
        "memory"
    }
}
