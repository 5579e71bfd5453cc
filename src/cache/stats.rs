//! Cache Statistics Module
//!
//! Tracks cache performance metrics: lookups, evictions, deletes and
//! policy swaps.

use serde::Serialize;

// == Cache Stats ==
/// Tracks cache performance metrics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Number of successful lookups
    pub hits: u64,
    /// Number of lookups for absent keys
    pub misses: u64,
    /// Number of entries removed by the policy to make room for a new key
    pub evictions: u64,
    /// Number of entries removed by an explicit delete
    pub deletes: u64,
    /// Number of times the eviction policy was replaced
    pub policy_swaps: u64,
    /// Current number of entries in the cache
    pub total_entries: usize,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Calculates the lookup hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if nothing was looked up yet.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    // == Removals ==
    /// Total entries that left the cache, by eviction or by delete.
    pub fn removals(&self) -> u64 {
        self.evictions + self.deletes
    }

    // == Record Hit ==
    /// Increments the hit counter.
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    // == Record Miss ==
    /// Increments the miss counter.
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    // == Record Eviction ==
    /// Increments the eviction counter.
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    // == Record Delete ==
    /// Increments the explicit-delete counter.
    pub fn record_delete(&mut self) {
        self.deletes += 1;
    }

    // == Record Policy Swap ==
    /// Increments the policy-swap counter.
    pub fn record_policy_swap(&mut self) {
        self.policy_swaps += 1;
    }

    // == Update Entry Count ==
    /// Updates the total entries count.
    pub fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}
