//! Cache Module
//!
//! Bounded key/value storage with swappable FIFO, LRU and LFU eviction.

mod fifo;
mod lfu;
mod lru;
mod policy;
mod shared;
mod stats;
mod store;


// Re-export public types
pub use fifo::FifoTracker;
pub use lfu::LfuTracker;
pub use lru::LruTracker;
pub use policy::{EvictionPolicy, PolicyKind};
pub use shared::SharedCache;
pub use stats::CacheStats;
pub use store::Cache;
