//! # Checkpoint Store
//!
//! Remembers how far each shard has been processed so a restarted or
//! rebalanced consumer resumes after the last acknowledged record.
//!
//! ```text
//! shard processor ──exists/write──▶ CheckpointStore ──GET/SET──▶ KeyValueStore
//!                 ◀──────read──────  (RwLock<HashMap>)
//! ```
//!
//! Durable keys have the form `<application>:checkpoint:<stream>:<shard>`.
//!
//! ## Usage
//!
//! ```rust
//! use connector_core::checkpoint::{CheckpointStore, Position};
//! use connector_core::store::MemoryKeyValueStore;
//! use std::sync::Arc;
//!
//! # tokio_test::block_on(async {
//! let store = CheckpointStore::new("app", "stream1", Arc::new(MemoryKeyValueStore::new()));
//!
//! if !store.exists("shardId-0").await {
//!     // start from the oldest record
//! }
//! store.write("shardId-0", "205").await;
//! assert_eq!(store.read("shardId-0"), Position::from("205"));
//! # });
//! ```

pub mod errors;
pub mod key;
pub mod position;
pub mod store;
pub mod traits;

pub use errors::{CheckpointError, CheckpointResult};
pub use key::{CheckpointKey, CHECKPOINT_TAG, KEY_SEPARATOR};
pub use position::Position;
pub use store::CheckpointStore;
pub use traits::Checkpoint;
