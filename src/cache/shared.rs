//! Shared Cache Module
//!
//! Thread-safe handle over a [`Cache`].

use std::sync::Arc;

use parking_lot::Mutex;

use crate::cache::{Cache, CacheStats, EvictionPolicy, PolicyKind};
use crate::config::CacheConfig;
use crate::error::Result;

// == Shared Cache ==
/// Cloneable, thread-safe cache handle.
///
/// Every operation holds one exclusive lock over the store and the policy
/// state for its whole duration, so other threads never observe one without
/// the other. Reads take the same lock because they update recency and
/// frequency tracking. Lock hold time is the cost of the wrapped
/// [`Cache`] operation: O(1) under FIFO and LRU, O(log n) under LFU.
#[derive(Debug)]
pub struct SharedCache<V = String> {
    inner: Arc<Mutex<Cache<V>>>,
}

impl<V> Clone for SharedCache<V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<V> SharedCache<V> {
    // == Constructor ==
    /// Creates an empty shared cache. See [`Cache::new`].
    pub fn new(policy: impl Into<EvictionPolicy>, max_capacity: usize) -> Result<Self> {
        Cache::new(policy, max_capacity).map(Self::from)
    }

    // == From Config ==
    /// Creates an empty shared cache from loaded configuration.
    pub fn from_config(config: &CacheConfig) -> Result<Self> {
        Cache::from_config(config).map(Self::from)
    }

    // == Set Policy ==
    /// Replaces the active eviction policy. See [`Cache::set_policy`].
    pub fn set_policy(&self, policy: impl Into<EvictionPolicy>) {
        self.inner.lock().set_policy(policy);
    }

    // == Put ==
    /// Stores a key-value pair, evicting first if the cache is full.
    pub fn put(&self, key: impl Into<String>, value: V) -> Result<()> {
        self.inner.lock().put(key, value)
    }

    // == Delete ==
    /// Removes an entry by key, or returns `NotFound`.
    pub fn delete(&self, key: &str) -> Result<()> {
        self.inner.lock().delete(key)
    }

    // == Clear ==
    /// Drops every entry and resets the policy's tracking state.
    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    // == Contains Key ==
    /// Checks for a key without counting as an access.
    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.lock().contains_key(key)
    }

    // == Policy Kind ==
    /// Returns which strategy is currently active.
    pub fn policy_kind(&self) -> PolicyKind {
        self.inner.lock().policy_kind()
    }

    // == Stats ==
    /// Returns a snapshot of the cache statistics.
    pub fn stats(&self) -> CacheStats {
        self.inner.lock().stats()
    }

    // == Length ==
    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    // == Max Capacity ==
    /// Returns the fixed upper bound on entries.
    pub fn max_capacity(&self) -> usize {
        self.inner.lock().max_capacity()
    }

    // == With Lock ==
    /// Runs `f` with exclusive access to the underlying cache.
    ///
    /// Useful for compound operations that must not interleave with other
    /// threads, such as read-modify-write.
    pub fn with_lock<R>(&self, f: impl FnOnce(&mut Cache<V>) -> R) -> R {
        f(&mut self.inner.lock())
    }
}

impl<V: Clone> SharedCache<V> {
    // == Get ==
    /// Retrieves a copy of the value, counting as an access on a hit.
    pub fn get(&self, key: &str) -> Result<V> {
        self.inner.lock().get(key).cloned()
    }
}

impl<V> From<Cache<V>> for SharedCache<V> {
    fn from(cache: Cache<V>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(cache)),
        }
    }
}
