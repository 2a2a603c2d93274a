//! Checkpoint error types

use crate::store::StoreError;
use thiserror::Error;

/// Errors surfaced by the strict checkpoint accessors
///
/// The lenient accessors (`exists`, `write`) log these and carry on.
#[derive(Debug, Error)]
pub enum CheckpointError {
    /// The durable store could not be reached or rejected the request
    #[error("Checkpoint store unavailable for key {key}: {source}")]
    StoreUnavailable {
        key: String,
        #[source]
        source: StoreError,
    },
}

pub type CheckpointResult<T> = Result<T, CheckpointError>;
