//! Blob store implementations

pub mod filesystem;
pub mod memory;

pub use filesystem::FileSystemBlobStore;
pub use memory::{MemoryBlobStore, StoredObject};
