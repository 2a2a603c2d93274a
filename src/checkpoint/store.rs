//! Cached checkpoint store
//!
//! Reads are served from a process-local map; writes go to the durable
//! backend and then to the map. The map is the only shared mutable state and
//! is guarded by one reader/writer lock. The durable call always happens
//! outside that lock, so a slow backend never blocks readers.

use super::errors::{CheckpointError, CheckpointResult};
use super::key::CheckpointKey;
use super::position::Position;
use super::traits::Checkpoint;
use crate::config::ConnectorConfig;
use crate::store::{KeyValueProvider, KeyValueStore, StoreResult};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Per-shard progress for one application consuming one stream
///
/// Shared by every shard processor of that application and stream, usually
/// behind an `Arc`.
///
/// Two processors writing the same shard (split brain) are not fenced: the
/// last cache update wins in memory and the last `SET` wins durably.
pub struct CheckpointStore<S = KeyValueProvider> {
    application_name: String,
    stream_name: String,
    store: Arc<S>,
    positions: RwLock<HashMap<String, Position>>,
}

impl<S> std::fmt::Debug for CheckpointStore<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckpointStore")
            .field("application_name", &self.application_name)
            .field("stream_name", &self.stream_name)
            .field("cached_shards", &self.positions.read().len())
            .finish()
    }
}

impl CheckpointStore<KeyValueProvider> {
    /// Build a store from configuration, connecting to the configured backend
    ///
    /// Fails with [`StoreError`](crate::store::StoreError) when the durable
    /// backend cannot be reached or was not compiled in.
    pub async fn from_config(config: &ConnectorConfig) -> StoreResult<Self> {
        let provider = KeyValueProvider::from_config(&config.checkpoint).await?;
        Ok(Self::new(
            config.application_name.clone(),
            config.stream_name.clone(),
            Arc::new(provider),
        ))
    }
}

impl<S: KeyValueStore> CheckpointStore<S> {
    pub fn new(
        application_name: impl Into<String>,
        stream_name: impl Into<String>,
        store: Arc<S>,
    ) -> Self {
        Self {
            application_name: application_name.into(),
            stream_name: stream_name.into(),
            store,
            positions: RwLock::new(HashMap::new()),
        }
    }

    pub fn application_name(&self) -> &str {
        &self.application_name
    }

    pub fn stream_name(&self) -> &str {
        &self.stream_name
    }

    /// Durable key for a shard of this store's application and stream
    pub fn key(&self, shard_id: &str) -> CheckpointKey {
        CheckpointKey::new(&self.application_name, &self.stream_name, shard_id)
    }

    /// Whether a durable checkpoint exists for the shard
    ///
    /// A found checkpoint is adopted into the cache. Backend failures are
    /// logged and reported as `false`, the same as "never checkpointed"; use
    /// [`CheckpointStore::try_exists`] to tell the two apart.
    pub async fn exists(&self, shard_id: &str) -> bool {
        match self.lookup(shard_id).await {
            Ok(found) => found.is_some(),
            Err(e) => {
                warn!(
                    shard_id = shard_id,
                    error = %e,
                    "Checkpoint lookup failed, treating shard as never checkpointed"
                );
                false
            }
        }
    }

    /// Like [`CheckpointStore::exists`], but surfaces backend failures
    pub async fn try_exists(&self, shard_id: &str) -> CheckpointResult<bool> {
        Ok(self.lookup(shard_id).await?.is_some())
    }

    /// Fetch the durable checkpoint for a shard
    ///
    /// An empty stored value counts as absent. A found value replaces
    /// whatever was cached for the shard.
    pub async fn lookup(&self, shard_id: &str) -> CheckpointResult<Option<Position>> {
        let key = self.key(shard_id).storage_key();

        let value = self
            .store
            .get(&key)
            .await
            .map_err(|source| CheckpointError::StoreUnavailable {
                key: key.clone(),
                source,
            })?;

        match value.filter(|v| !v.is_empty()) {
            Some(value) => {
                let position = Position::from(value);
                self.positions
                    .write()
                    .insert(shard_id.to_string(), position.clone());
                debug!(key = %key, position = %position, "Checkpoint found");
                Ok(Some(position))
            }
            None => {
                debug!(key = %key, "No checkpoint found");
                Ok(None)
            }
        }
    }

    /// Cached position for the shard, or the empty position
    ///
    /// Never touches the durable store. Prime the cache with
    /// [`CheckpointStore::exists`] or a prior [`CheckpointStore::write`].
    pub fn read(&self, shard_id: &str) -> Position {
        self.positions
            .read()
            .get(shard_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Record progress for a shard
    ///
    /// Durable failures are logged and do not stop the cache update, so the
    /// processing loop keeps moving through a backend outage. Progress made
    /// during the outage is lost if the process dies before the next
    /// successful write.
    pub async fn write(&self, shard_id: &str, position: impl Into<Position>) {
        if let Err(e) = self.try_write(shard_id, position).await {
            error!(shard_id = shard_id, error = %e, "Checkpoint durable write failed");
        }
    }

    /// Like [`CheckpointStore::write`], but returns the durable failure
    ///
    /// The cache is updated either way.
    pub async fn try_write(
        &self,
        shard_id: &str,
        position: impl Into<Position>,
    ) -> CheckpointResult<()> {
        let position = position.into();
        let key = self.key(shard_id).storage_key();

        let durable = self
            .store
            .set(&key, position.as_str())
            .await
            .map_err(|source| CheckpointError::StoreUnavailable {
                key: key.clone(),
                source,
            });

        self.positions
            .write()
            .insert(shard_id.to_string(), position);

        if durable.is_ok() {
            debug!(key = %key, "Checkpoint written");
        }
        durable
    }

    /// Shard ids with a cached position
    pub fn cached_shards(&self) -> Vec<String> {
        let mut shards: Vec<String> = self.positions.read().keys().cloned().collect();
        shards.sort();
        shards
    }

    /// Name of the durable backend
    pub fn provider_name(&self) -> &'static str {
        self.store.provider_name()
    }
}

#[async_trait]
impl<S: KeyValueStore> Checkpoint for CheckpointStore<S> {
    async fn checkpoint_exists(&self, shard_id: &str) -> bool {
        self.exists(shard_id).await
    }

    fn sequence_number(&self, shard_id: &str) -> Position {
        self.read(shard_id)
    }

    async fn set_checkpoint(&self, shard_id: &str, position: Position) {
        self.write(shard_id, position).await;
    }
}
