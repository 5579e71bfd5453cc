//! LRU Tracker Module
//!
//! Implements Least Recently Used tracking for cache eviction.

use lru::LruCache;

// == LRU Tracker ==
/// Tracks access order for the LRU eviction strategy.
///
/// Keys live in an unbounded [`LruCache`] used purely as a recency list:
/// - Most recent end = last key read or written
/// - Least recent end = next victim
///
/// Touch, removal and victim lookup are all O(1).
#[derive(Debug)]
pub struct LruTracker {
    /// Keys ordered by access time
    order: LruCache<String, ()>,
}

impl LruTracker {
    // == Constructor ==
    /// Creates a new empty LRU tracker.
    pub fn new() -> Self {
        Self {
            order: LruCache::unbounded(),
        }
    }

    // == Touch ==
    /// Marks a key as recently used.
    ///
    /// Used for both writes and reads, and for keys seen for the first time.
    pub fn touch(&mut self, key: &str) {
        if self.order.contains(key) {
            self.order.promote(key);
        } else {
            self.order.put(key.to_string(), ());
        }
    }

    // == Remove ==
    /// Removes a key from the tracker.
    pub fn remove(&mut self, key: &str) {
        self.order.pop(key);
    }

    // == Peek Oldest ==
    /// Returns the least recently used key without removing it.
    pub fn peek_oldest(&self) -> Option<&str> {
        self.order.peek_lru().map(|(key, _)| key.as_str())
    }

    // == Clear ==
    /// Forgets every tracked key.
    pub fn clear(&mut self) {
        self.order.clear();
    }

    // == Length ==
    /// Returns the number of tracked keys.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    // == Is Empty ==
    /// Returns true if no key is tracked.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    // == Contains ==
    /// Checks if a key is being tracked.
    pub fn contains(&self, key: &str) -> bool {
        self.order.contains(key)
    }
}

impl Default for LruTracker {
    fn default() -> Self {
        Self::new()
    }
}
