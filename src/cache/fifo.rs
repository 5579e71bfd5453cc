//! FIFO Tracker Module
//!
//! Tracks insertion order for First-In-First-Out eviction.

use lru::LruCache;

// == FIFO Tracker ==
/// Keys in insertion order.
///
/// Backed by an unbounded [`LruCache`] that is never promoted, so its
/// least-recent end is always the oldest insertion. Push, removal from any
/// position and victim lookup are all O(1). Reads never reorder the queue.
#[derive(Debug)]
pub struct FifoTracker {
    queue: LruCache<String, ()>,
}

impl FifoTracker {
    // == Constructor ==
    /// Creates a new empty FIFO tracker.
    pub fn new() -> Self {
        Self {
            queue: LruCache::unbounded(),
        }
    }

    // == Push ==
    /// Appends a newly inserted key behind every key already queued.
    ///
    /// A key already queued keeps its original position.
    pub fn push(&mut self, key: &str) {
        if !self.queue.contains(key) {
            self.queue.put(key.to_string(), ());
        }
    }

    // == Remove ==
    /// Drops a key from the queue, wherever it sits.
    pub fn remove(&mut self, key: &str) {
        self.queue.pop(key);
    }

    // == Peek Oldest ==
    /// Returns the oldest inserted key still queued.
    pub fn peek_oldest(&self) -> Option<&str> {
        self.queue.peek_lru().map(|(key, _)| key.as_str())
    }

    // == Clear ==
    /// Forgets every queued key.
    pub fn clear(&mut self) {
        self.queue.clear();
    }

    // == Length ==
    /// Returns the number of queued keys.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    // == Is Empty ==
    /// Returns true if no key is queued.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    // == Contains ==
    /// Checks if a key is queued.
    pub fn contains(&self, key: &str) -> bool {
        self.queue.contains(key)
    }
}

impl Default for FifoTracker {
    fn default() -> Self {
        Self::new()
    }
}
