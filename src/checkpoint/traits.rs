use super::position::Position;
use async_trait::async_trait;

/// Progress tracking as seen by a shard processor
///
/// Processors typically hold an `Arc<dyn Checkpoint>` shared across every
/// shard of one application and stream.
#[async_trait]
pub trait Checkpoint: Send + Sync {
    /// Whether a checkpoint exists for the shard
    ///
    /// Decides between starting at the oldest record and resuming after the
    /// stored position. Primes the value returned by [`Checkpoint::sequence_number`].
    async fn checkpoint_exists(&self, shard_id: &str) -> bool;

    /// Last known position for the shard, empty if none is known
    fn sequence_number(&self, shard_id: &str) -> Position;

    /// Record the shard's progress
    async fn set_checkpoint(&self, shard_id: &str, position: Position);
}
