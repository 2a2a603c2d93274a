//! Durable store error types

use thiserror::Error;

/// Errors that can occur while talking to a durable key-value backend
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failed to connect to the backend
    #[error("Store connection error: {0}")]
    ConnectionError(String),

    /// The configured backend was not compiled into this build
    #[error("Store backend unavailable in this build: {0}")]
    BackendDisabled(String),

    /// Generic backend error
    #[error("Store backend error: {0}")]
    BackendError(String),
}

/// Result type for durable store operations
pub type StoreResult<T> = Result<T, StoreError>;
