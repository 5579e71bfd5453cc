//! Policy Cache - A bounded in-memory key/value cache
//!
//! Eviction is delegated to a replaceable [`EvictionPolicy`] (FIFO, LRU or
//! LFU) that can be swapped at runtime without losing entries.

pub mod cache;
pub mod config;
pub mod error;

pub use cache::{Cache, CacheStats, EvictionPolicy, PolicyKind, SharedCache};
pub use config::CacheConfig;
pub use error::{CacheError, Result};
