//! Blob provider selected from configuration

use super::blob::{BlobResult, BlobStore, Visibility};
use super::providers::{FileSystemBlobStore, MemoryBlobStore};
use crate::config::{BlobBackend, EmitterConfig};
use tracing::info;

/// Object store chosen at startup
#[derive(Debug, Clone)]
pub enum BlobProvider {
    Filesystem(FileSystemBlobStore),
    Memory(MemoryBlobStore),
}

impl BlobProvider {
    pub fn from_config(config: &EmitterConfig) -> Self {
        match config.backend {
            BlobBackend::Filesystem => {
                let store = FileSystemBlobStore::new(&config.root_dir, &config.bucket);
                info!(
                    bucket_dir = %store.bucket_dir().display(),
                    "Batch emitter using filesystem backend"
                );
                Self::Filesystem(store)
            }
            BlobBackend::Memory => {
                info!(bucket = %config.bucket, "Batch emitter using in-memory backend");
                Self::Memory(MemoryBlobStore::new())
            }
        }
    }
}

impl BlobStore for BlobProvider {
    async fn put(
        &self,
        path: &str,
        body: Vec<u8>,
        content_type: &str,
        visibility: Visibility,
    ) -> BlobResult<()> {
        match self {
            Self::Filesystem(s) => s.put(path, body, content_type, visibility).await,
            Self::Memory(s) => s.put(path, body, content_type, visibility).await,
        }
    }

    fn provider_name(&self) -> &'static str {
        match self {
            Self::Filesystem(s) => s.provider_name(),
            Self::Memory(s) => s.provider_name(),
        }
    }

    fn uri_scheme(&self) -> &'static str {
        match self {
            Self::Filesystem(s) => s.uri_scheme(),
            Self::Memory(s) => s.uri_scheme(),
        }
    }
}
