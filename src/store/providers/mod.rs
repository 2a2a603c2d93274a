//! Durable key-value provider implementations

pub mod memory;

#[cfg(feature = "redis")]
pub mod redis;

pub use memory::MemoryKeyValueStore;

#[cfg(feature = "redis")]
pub use self::redis::RedisKeyValueStore;
