//! Crate-level error type
//!
//! Module errors ([`StoreError`], [`CheckpointError`], [`EmitError`]) convert
//! into [`ConnectorError`] so callers wiring both components together can use
//! a single `Result`.

use crate::checkpoint::CheckpointError;
use crate::emitter::EmitError;
use crate::store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConnectorError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Checkpoint(#[from] CheckpointError),

    #[error(transparent)]
    Emit(#[from] EmitError),
}

pub type Result<T> = std::result::Result<T, ConnectorError>;
