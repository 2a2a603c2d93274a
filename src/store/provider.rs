//! Key-value provider selected from configuration
//!
//! Uses enum dispatch so the checkpoint store can be built from runtime
//! configuration without boxing a trait object.

use super::errors::StoreResult;
#[cfg(not(feature = "redis"))]
use super::errors::StoreError;
use super::providers::MemoryKeyValueStore;
use super::traits::KeyValueStore;
use crate::config::{CheckpointBackend, CheckpointConfig};
use tracing::{error, info};

#[cfg(feature = "redis")]
use super::providers::RedisKeyValueStore;

/// Durable backend chosen at startup
#[derive(Debug, Clone)]
pub enum KeyValueProvider {
    /// Redis backend (boxed to reduce enum size)
    #[cfg(feature = "redis")]
    Redis(Box<RedisKeyValueStore>),

    /// Process-local backend
    Memory(MemoryKeyValueStore),
}

impl KeyValueProvider {
    /// Build a provider from configuration
    ///
    /// A configured Redis backend must be reachable at startup; once
    /// connected, the connection manager reconnects on its own. Requesting
    /// Redis from a build without the `redis` feature is an error rather
    /// than a silent switch to process-local checkpoints.
    pub async fn from_config(config: &CheckpointConfig) -> StoreResult<Self> {
        match config.backend {
            CheckpointBackend::Memory => {
                info!("Checkpoint store using in-memory backend");
                Ok(Self::Memory(MemoryKeyValueStore::new()))
            }
            CheckpointBackend::Redis => Self::connect_redis(config).await,
        }
    }

    #[cfg(feature = "redis")]
    async fn connect_redis(config: &CheckpointConfig) -> StoreResult<Self> {
        let store = RedisKeyValueStore::from_config(&config.redis)
            .await
            .inspect_err(|e| error!(error = %e, "Redis checkpoint backend unreachable"))?;
        info!(endpoint = store.endpoint(), "Checkpoint store using redis backend");
        Ok(Self::Redis(Box::new(store)))
    }

    #[cfg(not(feature = "redis"))]
    async fn connect_redis(_config: &CheckpointConfig) -> StoreResult<Self> {
        error!("Redis checkpoint backend requested but the `redis` feature is disabled");
        Err(StoreError::BackendDisabled(
            "redis (rebuild with the `redis` feature)".to_string(),
        ))
    }

    /// Whether the selected backend shares state across processes
    pub fn is_durable(&self) -> bool {
        self.is_distributed()
    }
}

impl KeyValueStore for KeyValueProvider {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        match self {
            #[cfg(feature = "redis")]
            Self::Redis(s) => s.get(key).await,
            Self::Memory(s) => s.get(key).await,
        }
    }

    async fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        match self {
            #[cfg(feature = "redis")]
            Self::Redis(s) => s.set(key, value).await,
            Self::Memory(s) => s.set(key, value).await,
        }
    }

    async fn health_check(&self) -> StoreResult<bool> {
        match self {
            #[cfg(feature = "redis")]
            Self::Redis(s) => s.health_check().await,
            Self::Memory(s) => s.health_check().await,
        }
    }

    fn provider_name(&self) -> &'static str {
        match self {
            #[cfg(feature = "redis")]
            Self::Redis(s) => s.provider_name(),
            Self::Memory(s) => s.provider_name(),
        }
    }

    fn is_distributed(&self) -> bool {
        match self {
            #[cfg(feature = "redis")]
            Self::Redis(s) => s.is_distributed(),
            Self::Memory(s) => s.is_distributed(),
        }
    }
}
