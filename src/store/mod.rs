//! # Durable Key-Value Store
//!
//! The durable half of the checkpoint store. Anything that can `GET` and
//! `SET` a string without expiry can back checkpoints.
//!
//! ```text
//! KeyValueProvider (enum)          <- chosen from CheckpointConfig
//!   ├── Redis(RedisKeyValueStore)    <- ConnectionManager-based async Redis
//!   └── Memory(MemoryKeyValueStore)  <- process-local DashMap
//! ```
//!
//! Backend failures are returned as [`StoreError`]; the checkpoint store
//! decides which of them to absorb.

pub mod errors;
pub mod provider;
pub mod providers;
pub mod traits;

pub use errors::{StoreError, StoreResult};
pub use provider::KeyValueProvider;
pub use providers::MemoryKeyValueStore;
pub use traits::KeyValueStore;

#[cfg(feature = "redis")]
pub use providers::RedisKeyValueStore;
