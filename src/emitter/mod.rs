//! # Batch Emitter
//!
//! Writes a closed batch of records as one immutable object named
//! `/<UTC YYYY-MM-DD>/<first>-<last>.txt`.
//!
//! ```text
//! BatchEmitter ──put──▶ BlobProvider (enum)
//!                         ├── Filesystem(FileSystemBlobStore)
//!                         └── Memory(MemoryBlobStore)
//! ```
//!
//! A shard processor must not checkpoint past a batch until its emit has
//! succeeded; that ordering is what keeps delivery at-least-once.
//!
//! ## Usage
//!
//! ```rust
//! use connector_core::emitter::{Batch, BatchEmitter, MemoryBlobStore};
//! use std::sync::Arc;
//!
//! # tokio_test::block_on(async {
//! let blobs = MemoryBlobStore::new();
//! let emitter = BatchEmitter::new("archive", Arc::new(blobs.clone()));
//!
//! let mut batch = Batch::builder();
//! batch.push("a\n", "100").push("b\n", "205");
//!
//! let receipt = emitter.emit(&batch.build()).await.unwrap();
//! assert_eq!(receipt.records, 2);
//! assert!(receipt.path.ends_with("/100-205.txt"));
//! # });
//! ```

pub mod batch;
pub mod batch_emitter;
pub mod blob;
pub mod errors;
pub mod naming;
pub mod provider;
pub mod providers;
pub mod record;
pub mod traits;

pub use batch::{Batch, BatchBuilder};
pub use batch_emitter::BatchEmitter;
pub use blob::{BlobError, BlobResult, BlobStore, Visibility, TEXT_PLAIN};
pub use errors::{EmitError, EmitResult};
pub use naming::derive_object_name;
pub use provider::BlobProvider;
pub use providers::{FileSystemBlobStore, MemoryBlobStore, StoredObject};
pub use record::{JsonRecord, Record};
pub use traits::{EmitReceipt, Emitter};
