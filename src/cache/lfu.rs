//! LFU Tracker Module
//!
//! Tracks access frequency for Least Frequently Used eviction.

use std::collections::{BTreeMap, HashMap};

// == LFU Tracker ==
/// Frequency counts with an ordered index for victim selection.
///
/// Every key carries `(frequency, insertion sequence)`. The index is ordered
/// by that pair, so its first entry is the least frequently used key, with
/// ties going to the key inserted earliest. All operations are O(log n).
#[derive(Debug, Default)]
pub struct LfuTracker {
    /// key -> (frequency, insertion sequence)
    counts: HashMap<String, (u64, u64)>,
    /// (frequency, insertion sequence) -> key
    index: BTreeMap<(u64, u64), String>,
    /// Sequence number handed to the next inserted key
    next_seq: u64,
}

impl LfuTracker {
    // == Constructor ==
    /// Creates a new empty LFU tracker.
    pub fn new() -> Self {
        Self::default()
    }

    // == Insert ==
    /// Starts tracking a key at frequency 1.
    ///
    /// A key that is already tracked is reset and treated as freshly inserted.
    pub fn insert(&mut self, key: &str) {
        self.remove(key);

        let seq = self.next_seq;
        self.next_seq += 1;

        self.counts.insert(key.to_string(), (1, seq));
        self.index.insert((1, seq), key.to_string());
    }

    // == Increment ==
    /// Bumps the frequency of a tracked key. Untracked keys are ignored.
    pub fn increment(&mut self, key: &str) {
        if let Some((freq, seq)) = self.counts.get_mut(key) {
            if let Some(owned) = self.index.remove(&(*freq, *seq)) {
                *freq = freq.saturating_add(1);
                self.index.insert((*freq, *seq), owned);
            }
        }
    }

    // == Remove ==
    /// Stops tracking a key.
    pub fn remove(&mut self, key: &str) {
        if let Some(slot) = self.counts.remove(key) {
            self.index.remove(&slot);
        }
    }

    // == Peek Least ==
    /// Returns the key with the lowest frequency, oldest first on ties.
    pub fn peek_least(&self) -> Option<&str> {
        self.index.values().next().map(String::as_str)
    }

    // == Clear ==
    /// Forgets every tracked key and restarts the insertion sequence.
    pub fn clear(&mut self) {
        self.counts.clear();
        self.index.clear();
        self.next_seq = 0;
    }

    // == Length ==
    /// Returns the number of tracked keys.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    // == Is Empty ==
    /// Returns true if no key is tracked.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    // == Contains ==
    /// Checks if a key is being tracked.
    pub fn contains(&self, key: &str) -> bool {
        self.counts.contains_key(key)
    }
}
