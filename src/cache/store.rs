//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with a swappable eviction policy.

use std::collections::HashMap;

use tracing::{debug, info, warn};

use crate::cache::{CacheStats, EvictionPolicy, PolicyKind};
use crate::config::CacheConfig;
use crate::error::{CacheError, Result};

// == Cache ==
/// Bounded key/value storage that delegates the choice of victim to an
/// [`EvictionPolicy`].
///
/// Not synchronized; every call that touches policy state (including `get`)
/// takes `&mut self`. See [`SharedCache`](crate::cache::SharedCache) for a
/// thread-safe handle.
///
/// `put`, `get` and `delete` cost one hash lookup plus the policy hook:
/// O(1) under FIFO and LRU, O(log n) under LFU. `set_policy` is O(n) since
/// it seeds the new policy with every stored key.
#[derive(Debug)]
pub struct Cache<V = String> {
    /// Key-value storage
    entries: HashMap<String, V>,
    /// Active eviction policy and its tracking state
    policy: EvictionPolicy,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries allowed
    max_capacity: usize,
}

impl<V> Cache<V> {
    // == Constructor ==
    /// Creates an empty cache.
    ///
    /// # Arguments
    /// * `policy` - Initial eviction policy (an [`EvictionPolicy`] or a [`PolicyKind`])
    /// * `max_capacity` - Maximum number of entries, must be positive
    ///
    /// # Errors
    /// `InvalidConfiguration` if `max_capacity` is zero.
    pub fn new(policy: impl Into<EvictionPolicy>, max_capacity: usize) -> Result<Self> {
        if max_capacity == 0 {
            return Err(CacheError::InvalidConfiguration(
                "max_capacity must be a positive integer".to_string(),
            ));
        }

        let mut policy = policy.into();
        // A fresh cache has no history for the policy to remember.
        policy.clear();

        info!(policy = %policy.kind(), max_capacity, "cache created");

        Ok(Self {
            entries: HashMap::new(),
            policy,
            stats: CacheStats::new(),
            max_capacity,
        })
    }

    // == From Config ==
    /// Creates an empty cache from loaded configuration.
    pub fn from_config(config: &CacheConfig) -> Result<Self> {
        Self::new(config.policy, config.max_entries)
    }

    // == Set Policy ==
    /// Replaces the active eviction policy.
    ///
    /// The new policy is seeded with the current keys in the store's
    /// iteration order, each at its baseline (see [`EvictionPolicy::seed`]).
    /// Nothing is evicted by the switch itself.
    pub fn set_policy(&mut self, policy: impl Into<EvictionPolicy>) {
        let mut policy = policy.into();
        policy.seed(self.entries.keys().map(String::as_str));

        info!(
            from = %self.policy.kind(),
            to = %policy.kind(),
            seeded = policy.len(),
            "eviction policy replaced"
        );

        self.policy = policy;
        self.stats.record_policy_swap();
    }

    // == Put ==
    /// Stores a key-value pair.
    ///
    /// Overwriting an existing key counts as an access and never evicts.
    /// Inserting a new key into a full cache first evicts the policy's victim.
    pub fn put(&mut self, key: impl Into<String>, value: V) -> Result<()> {
        let key = key.into();

        if let Some(slot) = self.entries.get_mut(&key) {
            *slot = value;
            self.policy.on_access(&key);
            debug!(key = %key, "overwrote existing entry");
            return Ok(());
        }

        if self.entries.len() >= self.max_capacity {
            self.evict_one()?;
        }

        self.entries.insert(key.clone(), value);
        self.policy.on_insert(&key);
        self.stats.set_total_entries(self.entries.len());

        debug_assert!(self.entries.len() <= self.max_capacity);
        Ok(())
    }

    /// Removes the policy's victim from the store.
    ///
    /// Verifies the victim is stored before touching anything, so a failure
    /// leaves both store and policy as they were.
    fn evict_one(&mut self) -> Result<()> {
        let victim = self.policy.select_victim()?;

        if !self.entries.contains_key(&victim) {
            warn!(key = %victim, policy = %self.policy.kind(), "policy chose a key the store does not hold");
            return Err(CacheError::PolicyContractViolation(format!(
                "victim '{}' is not stored",
                victim
            )));
        }

        self.entries.remove(&victim);
        self.policy.on_evict(&victim);
        self.stats.record_eviction();

        debug!(
            key = %victim,
            policy = %self.policy.kind(),
            removals = self.stats.removals(),
            "evicted entry"
        );
        Ok(())
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// A hit is reported to the policy as an access. A miss leaves policy
    /// state untouched.
    pub fn get(&mut self, key: &str) -> Result<&V> {
        match self.entries.get(key) {
            Some(value) => {
                self.policy.on_access(key);
                self.stats.record_hit();
                Ok(value)
            }
            None => {
                self.stats.record_miss();
                Err(CacheError::NotFound(key.to_string()))
            }
        }
    }

    // == Delete ==
    /// Removes an entry by key.
    ///
    /// Absent keys return `NotFound`, matching `get`. Deletes are counted
    /// separately from evictions.
    pub fn delete(&mut self, key: &str) -> Result<()> {
        if self.entries.remove(key).is_some() {
            self.policy.on_evict(key);
            self.stats.record_delete();
            self.stats.set_total_entries(self.entries.len());
            debug!(key = %key, removals = self.stats.removals(), "deleted entry");
            Ok(())
        } else {
            Err(CacheError::NotFound(key.to_string()))
        }
    }

    // == Clear ==
    /// Drops every entry and resets the policy's tracking state.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.policy.clear();
        self.stats.set_total_entries(0);
    }

    // == Contains Key ==
    /// Checks for a key without counting as an access.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    // == Keys ==
    /// Iterates over the stored keys in arbitrary order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    // == Next Victim ==
    /// The key the active policy would evict next.
    pub fn next_victim(&self) -> Option<&str> {
        self.policy.peek_victim()
    }

    // == Policy Kind ==
    /// Returns which strategy is currently active.
    pub fn policy_kind(&self) -> PolicyKind {
        self.policy.kind()
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == Max Capacity ==
    /// Returns the fixed upper bound on entries.
    pub fn max_capacity(&self) -> usize {
        self.max_capacity
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn cache(kind: PolicyKind, max: usize) -> Cache {
        Cache::new(kind, max).unwrap()
    }

    fn sorted_keys(cache: &Cache) -> Vec<String> {
        let mut keys: Vec<String> = cache.keys().map(str::to_string).collect();
        keys.sort();
        keys
    }

    #[test]
    fn test_cache_new() {
        let cache = cache(PolicyKind::Lru, 10);
        assert_eq!(cache.len(), 0);
        assert!(cache.is_empty());
        assert_eq!(cache.max_capacity(), 10);
        assert_eq!(cache.policy_kind(), PolicyKind::Lru);
    }

    #[test]
    fn test_cache_new_zero_capacity() {
        let result = Cache::<String>::new(PolicyKind::Fifo, 0);
        assert!(matches!(result, Err(CacheError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_cache_new_discards_policy_history() {
        let mut policy = EvictionPolicy::fifo();
        policy.on_insert("stale");

        let cache: Cache = Cache::new(policy, 2).unwrap();
        assert_eq!(cache.next_victim(), None);
    }

    #[test]
    fn test_cache_put_and_get() {
        let mut cache = cache(PolicyKind::Lru, 10);

        cache.put("key1", "value1".to_string()).unwrap();
        assert_eq!(cache.get("key1").unwrap(), "value1");
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_cache_get_nonexistent() {
        let mut cache = cache(PolicyKind::Lru, 10);
        assert!(matches!(cache.get("missing"), Err(CacheError::NotFound(_))));
    }

    #[test]
    fn test_cache_delete() {
        let mut cache = cache(PolicyKind::Fifo, 10);

        cache.put("key1", "value1".to_string()).unwrap();
        cache.delete("key1").unwrap();

        assert!(cache.is_empty());
        assert_eq!(cache.next_victim(), None);
        assert!(matches!(cache.get("key1"), Err(CacheError::NotFound(_))));
    }

    #[test]
    fn test_cache_delete_nonexistent() {
        let mut cache = cache(PolicyKind::Fifo, 10);
        cache.put("a", "1".to_string()).unwrap();

        assert!(matches!(cache.delete("b"), Err(CacheError::NotFound(_))));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_cache_overwrite_does_not_evict() {
        let mut cache = cache(PolicyKind::Fifo, 1);

        cache.put("a", "1".to_string()).unwrap();
        cache.put("a", "2".to_string()).unwrap();

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("a").unwrap(), "2");
        assert_eq!(cache.stats().evictions, 0);
    }

    #[test]
    fn test_fifo_eviction_ignores_reads() {
        let mut cache = cache(PolicyKind::Fifo, 2);

        cache.put("A", "1".to_string()).unwrap();
        cache.put("B", "2".to_string()).unwrap();
        cache.put("C", "3".to_string()).unwrap();
        assert!(!cache.contains_key("A"));

        cache.get("B").unwrap();
        cache.put("D", "4".to_string()).unwrap();

        // B is older than C, so B goes despite the read
        assert_eq!(sorted_keys(&cache), vec!["C", "D"]);
    }

    #[test]
    fn test_lru_eviction_respects_reads() {
        let mut cache = cache(PolicyKind::Lru, 2);

        cache.put("A", "1".to_string()).unwrap();
        cache.put("B", "2".to_string()).unwrap();
        cache.get("A").unwrap();
        cache.put("C", "3".to_string()).unwrap();

        assert_eq!(sorted_keys(&cache), vec!["A", "C"]);
    }

    #[test]
    fn test_lru_overwrite_counts_as_access() {
        let mut cache = cache(PolicyKind::Lru, 2);

        cache.put("A", "1".to_string()).unwrap();
        cache.put("B", "2".to_string()).unwrap();
        cache.put("A", "10".to_string()).unwrap();
        cache.put("C", "3".to_string()).unwrap();

        assert_eq!(sorted_keys(&cache), vec!["A", "C"]);
    }

    #[test]
    fn test_lfu_eviction_tie_breaks_oldest() {
        let mut cache = cache(PolicyKind::Lfu, 3);

        cache.put("A", "1".to_string()).unwrap();
        cache.put("B", "2".to_string()).unwrap();
        cache.put("C", "3".to_string()).unwrap();
        cache.get("A").unwrap();

        // B and C tie at frequency 1; B is older
        cache.put("D", "4".to_string()).unwrap();
        assert_eq!(sorted_keys(&cache), vec!["A", "C", "D"]);
    }

    #[test]
    fn test_miss_does_not_touch_policy() {
        let mut cache = cache(PolicyKind::Lru, 2);

        cache.put("A", "1".to_string()).unwrap();
        cache.put("B", "2".to_string()).unwrap();
        let _ = cache.get("Z");

        assert_eq!(cache.next_victim(), Some("A"));
    }

    #[test]
    fn test_set_policy_keeps_entries() {
        let mut cache = cache(PolicyKind::Fifo, 2);

        cache.put("A", "1".to_string()).unwrap();
        cache.put("B", "2".to_string()).unwrap();
        cache.set_policy(PolicyKind::Lfu);

        assert_eq!(cache.policy_kind(), PolicyKind::Lfu);
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.stats().evictions, 0);

        cache.put("C", "3".to_string()).unwrap();
        assert_eq!(cache.len(), 2);
        assert!(cache.contains_key("C"));
        assert!(cache.contains_key("A") ^ cache.contains_key("B"));
    }

    #[test]
    fn test_set_policy_seeds_in_iteration_order() {
        let mut cache = cache(PolicyKind::Lru, 3);
        cache.put("A", "1".to_string()).unwrap();
        cache.put("B", "2".to_string()).unwrap();
        cache.put("C", "3".to_string()).unwrap();

        let first = cache.keys().next().map(str::to_string);
        cache.set_policy(EvictionPolicy::fifo());

        assert_eq!(cache.next_victim().map(str::to_string), first);
    }

    #[test]
    fn test_clear() {
        let mut cache = cache(PolicyKind::Lfu, 4);
        cache.put("A", "1".to_string()).unwrap();
        cache.put("B", "2".to_string()).unwrap();

        cache.clear();

        assert!(cache.is_empty());
        assert_eq!(cache.next_victim(), None);
        assert_eq!(cache.stats().total_entries, 0);
    }

    #[test]
    fn test_cache_stats() {
        let mut cache = cache(PolicyKind::Lru, 1);

        cache.put("a", "1".to_string()).unwrap();
        cache.get("a").unwrap();
        let _ = cache.get("missing");
        cache.put("b", "2".to_string()).unwrap();
        cache.delete("b").unwrap();
        cache.set_policy(PolicyKind::Fifo);

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.evictions, 1);
        assert_eq!(stats.deletes, 1);
        assert_eq!(stats.policy_swaps, 1);
        assert_eq!(stats.total_entries, 0);
    }

    #[test]
    fn test_put_rejects_victim_missing_from_store() {
        let mut cache = cache(PolicyKind::Fifo, 2);
        cache.put("A", "1".to_string()).unwrap();
        cache.put("B", "2".to_string()).unwrap();

        // Policy now believes an unstored key is the oldest insertion
        cache.policy.seed(["ghost", "A", "B"]);
        let before = cache.stats();

        let result = cache.put("C", "3".to_string());

        assert!(matches!(
            result,
            Err(CacheError::PolicyContractViolation(_))
        ));
        assert_eq!(sorted_keys(&cache), vec!["A", "B"]);
        assert_eq!(cache.stats(), before);
        assert_eq!(cache.next_victim(), Some("ghost"));
        assert!(!cache.policy.contains("C"));
    }

    #[test]
    fn test_put_rejects_empty_policy_on_full_store() {
        let mut cache = cache(PolicyKind::Lru, 1);
        cache.put("A", "1".to_string()).unwrap();
        cache.policy.clear();

        let result = cache.put("B", "2".to_string());

        assert!(matches!(
            result,
            Err(CacheError::PolicyContractViolation(_))
        ));
        assert_eq!(sorted_keys(&cache), vec!["A"]);
        assert_eq!(cache.stats().evictions, 0);
    }

    #[test]
    fn test_large_fill_keeps_newest_half() {
        const N: usize = 50_000;

        for kind in [PolicyKind::Fifo, PolicyKind::Lru, PolicyKind::Lfu] {
            let mut cache: Cache<usize> = Cache::new(kind, N).unwrap();
            for i in 0..2 * N {
                cache.put(i.to_string(), i).unwrap();
            }

            assert_eq!(cache.len(), N);
            assert_eq!(cache.stats().evictions, N as u64);
            assert!(!cache.contains_key(&(N - 1).to_string()));
            assert!(cache.contains_key(&N.to_string()));
            assert_eq!(cache.next_victim(), Some(N.to_string().as_str()));
        }
    }

    #[test]
    fn test_cache_generic_values() {
        let mut cache: Cache<Vec<u8>> = Cache::new(PolicyKind::Fifo, 2).unwrap();
        cache.put("bytes", vec![1, 2, 3]).unwrap();
        assert_eq!(cache.get("bytes").unwrap(), &vec![1, 2, 3]);
    }

    #[test]
    fn test_cache_from_config() {
        let config = CacheConfig {
            max_entries: 5,
            policy: PolicyKind::Lfu,
        };
        let cache: Cache = Cache::from_config(&config).unwrap();
        assert_eq!(cache.max_capacity(), 5);
        assert_eq!(cache.policy_kind(), PolicyKind::Lfu);

        let zero = CacheConfig {
            max_entries: 0,
            ..config
        };
        assert!(Cache::<String>::from_config(&zero).is_err());
    }
}
