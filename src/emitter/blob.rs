//! Blob store trait definition

use std::fmt;
use thiserror::Error;

/// Content type of every emitted batch object
pub const TEXT_PLAIN: &str = "text/plain";

/// Access level of a written object
///
/// Batches are only ever written private; the type exists so backends
/// that enforce access control receive it explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    /// Readable only with bucket credentials
    #[default]
    Private,
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Private => f.write_str("private"),
        }
    }
}

/// Errors from a blob store backend
#[derive(Debug, Error)]
pub enum BlobError {
    #[error("Blob I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The object path cannot be mapped onto the backend
    #[error("Invalid object path: {0}")]
    InvalidPath(String),

    #[error("Blob backend error: {0}")]
    Backend(String),
}

pub type BlobResult<T> = Result<T, BlobError>;

/// Capability contract for the object store receiving batches
///
/// A single `put` must be atomic: after it returns, either the whole object
/// exists under `path` or nothing new does.
pub trait BlobStore: Send + Sync {
    /// Write one object within the store's bucket
    fn put(
        &self,
        path: &str,
        body: Vec<u8>,
        content_type: &str,
        visibility: Visibility,
    ) -> impl std::future::Future<Output = BlobResult<()>> + Send;

    /// Get the name of the backend
    fn provider_name(&self) -> &'static str;

    /// URI scheme used when reporting where an object was written
    fn uri_scheme(&self) -> &'static str {
        "s3"
    }
}
