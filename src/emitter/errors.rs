//! Emitter error types

use super::blob::BlobError;
use thiserror::Error;

/// Errors that fail a batch emit
///
/// Nothing is retried or rolled back; the caller decides whether to resend
/// the batch and must not checkpoint past it until an emit succeeds.
#[derive(Debug, Error)]
pub enum EmitError {
    /// The blob store rejected or failed the object write
    #[error("Failed to write batch object {path}: {source}")]
    BlobWrite {
        path: String,
        #[source]
        source: BlobError,
    },

    /// A record could not be serialized
    #[error("Record serialization error: {0}")]
    Serialization(String),
}

pub type EmitResult<T> = Result<T, EmitError>;
