//! Durable key-value store trait definition

use super::errors::StoreResult;

/// Capability contract for the durable side of the checkpoint store
///
/// Any networked key-value service that can `GET` a string and `SET` a string
/// without expiry satisfies this. Implementations must be safe to call from
/// many shard processors at once; the checkpoint store adds no locking around
/// these calls.
pub trait KeyValueStore: Send + Sync {
    /// Get a value by key
    ///
    /// Returns `Ok(Some(value))` when the key exists, `Ok(None)` when it does not.
    fn get(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = StoreResult<Option<String>>> + Send;

    /// Set a value with no expiry
    fn set(
        &self,
        key: &str,
        value: &str,
    ) -> impl std::future::Future<Output = StoreResult<()>> + Send;

    /// Check if the backend is reachable
    fn health_check(&self) -> impl std::future::Future<Output = StoreResult<bool>> + Send;

    /// Get the name of the backend
    fn provider_name(&self) -> &'static str;

    /// Whether state is shared with other processes
    ///
    /// Checkpoints written to a distributed backend survive failover to
    /// another instance; checkpoints in a local backend do not.
    fn is_distributed(&self) -> bool {
        false
    }
}
