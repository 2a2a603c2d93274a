#![allow(clippy::doc_markdown)] // Allow technical terms like Kinesis, DashMap in docs
#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Connector Core
//!
//! Checkpoint tracking and batch emission for consumers of a shard-based,
//! Kinesis-style stream.
//!
//! ## Overview
//!
//! Each shard of a stream is consumed by its own processor, running in
//! parallel with the others. This crate provides the two pieces those
//! processors share:
//!
//! - [`checkpoint::CheckpointStore`] - remembers the last processed position
//!   per shard, reading from an in-process cache and writing through to a
//!   durable key-value store (Redis, or in-memory for tests)
//! - [`emitter::BatchEmitter`] - writes a closed batch of records as one
//!   immutable object named after its UTC date and position range
//!
//! Reading the stream, deciding when a buffer is full, and retrying failed
//! batches stay with the caller.
//!
//! ## Module Organization
//!
//! - [`checkpoint`] - Checkpoint keys, positions and the cached store
//! - [`store`] - Durable key-value backends behind [`store::KeyValueStore`]
//! - [`emitter`] - Batches, object naming and blob backends behind [`emitter::BlobStore`]
//! - [`config`] - Construction-time configuration
//! - [`error`] - Crate-level error type
//! - [`logging`] - Optional `tracing` subscriber setup
//! - [`testing`] - Switchable test doubles for outage scenarios
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use connector_core::checkpoint::CheckpointStore;
//! use connector_core::config::ConnectorConfig;
//! use connector_core::emitter::{Batch, BatchEmitter};
//!
//! # async fn example() -> connector_core::Result<()> {
//! let config = ConnectorConfig::from_env()?;
//! let checkpoints = CheckpointStore::from_config(&config).await?;
//! let emitter = BatchEmitter::from_config(&config.emitter);
//!
//! let shard = "shardId-000000000000";
//! let resume_after = checkpoints
//!     .exists(shard)
//!     .await
//!     .then(|| checkpoints.read(shard));
//! println!("resuming {shard} after {resume_after:?}");
//!
//! let mut batch = Batch::builder();
//! batch.push("record-1\n", "100").push("record-2\n", "101");
//! let batch = batch.build();
//!
//! // Only checkpoint once the batch is durable
//! emitter.emit(&batch).await?;
//! checkpoints
//!     .write(shard, batch.last_sequence_number().clone())
//!     .await;
//! # Ok(())
//! # }
//! ```

pub mod checkpoint;
pub mod config;
pub mod emitter;
pub mod error;
pub mod logging;
pub mod store;
pub mod testing;

pub use checkpoint::{Checkpoint, CheckpointError, CheckpointKey, CheckpointStore, Position};
pub use crate::config::ConnectorConfig;
pub use emitter::{Batch, BatchBuilder, BatchEmitter, EmitError, EmitReceipt, Emitter, Record};
pub use error::{ConnectorError, Result};
pub use store::{KeyValueProvider, KeyValueStore, MemoryKeyValueStore, StoreError};
