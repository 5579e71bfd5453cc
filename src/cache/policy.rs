//! Eviction Policy Module
//!
//! A tagged enum over the supported strategies. Each variant owns its
//! tracking state and the cache dispatches every hook through one `match`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::error;

use crate::cache::{FifoTracker, LfuTracker, LruTracker};
use crate::error::{CacheError, Result};

// == Policy Kind ==
/// Name of an eviction strategy, without any tracking state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyKind {
    /// First In, First Out
    Fifo,
    /// Least Recently Used
    Lru,
    /// Least Frequently Used
    Lfu,
}

impl PolicyKind {
    // == As Str ==
    /// Lowercase name, as accepted by `FromStr` and used by serde.
    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyKind::Fifo => "fifo",
            PolicyKind::Lru => "lru",
            PolicyKind::Lfu => "lfu",
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PolicyKind {
    type Err = CacheError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fifo" => Ok(PolicyKind::Fifo),
            "lru" => Ok(PolicyKind::Lru),
            "lfu" => Ok(PolicyKind::Lfu),
            other => Err(CacheError::InvalidConfiguration(format!(
                "unknown eviction policy '{}'",
                other
            ))),
        }
    }
}

// == Eviction Policy ==
/// Decides which key a full cache gives up.
///
/// The cache reports every insert, access and removal through the `on_*`
/// hooks; `select_victim` then answers from the policy's own bookkeeping.
///
/// Per-operation cost:
/// - FIFO: insert, remove and victim lookup O(1)
/// - LRU: insert, promote, remove and victim lookup O(1)
/// - LFU: insert, increment and remove O(log n), victim lookup O(log n)
#[derive(Debug)]
pub enum EvictionPolicy {
    /// Evicts the oldest inserted key; reads do not matter.
    Fifo(FifoTracker),
    /// Evicts the key read or written least recently.
    Lru(LruTracker),
    /// Evicts the key with the fewest accesses, oldest first on ties.
    Lfu(LfuTracker),
}

impl EvictionPolicy {
    // == Constructors ==
    /// Creates an empty First-In-First-Out policy.
    pub fn fifo() -> Self {
        EvictionPolicy::Fifo(FifoTracker::new())
    }

    /// Creates an empty Least-Recently-Used policy.
    pub fn lru() -> Self {
        EvictionPolicy::Lru(LruTracker::new())
    }

    /// Creates an empty Least-Frequently-Used policy.
    pub fn lfu() -> Self {
        EvictionPolicy::Lfu(LfuTracker::new())
    }

    // == Kind ==
    /// Returns which strategy this policy implements.
    pub fn kind(&self) -> PolicyKind {
        match self {
            EvictionPolicy::Fifo(_) => PolicyKind::Fifo,
            EvictionPolicy::Lru(_) => PolicyKind::Lru,
            EvictionPolicy::Lfu(_) => PolicyKind::Lfu,
        }
    }

    // == On Insert ==
    /// A new key was added to the cache.
    pub fn on_insert(&mut self, key: &str) {
        match self {
            EvictionPolicy::Fifo(fifo) => fifo.push(key),
            EvictionPolicy::Lru(lru) => lru.touch(key),
            EvictionPolicy::Lfu(lfu) => lfu.insert(key),
        }
    }

    // == On Access ==
    /// An existing key was read or overwritten.
    pub fn on_access(&mut self, key: &str) {
        match self {
            EvictionPolicy::Fifo(_) => {}
            EvictionPolicy::Lru(lru) => lru.touch(key),
            EvictionPolicy::Lfu(lfu) => lfu.increment(key),
        }
    }

    // == On Evict ==
    /// A key left the cache, by eviction or by direct delete.
    pub fn on_evict(&mut self, key: &str) {
        match self {
            EvictionPolicy::Fifo(fifo) => fifo.remove(key),
            EvictionPolicy::Lru(lru) => lru.remove(key),
            EvictionPolicy::Lfu(lfu) => lfu.remove(key),
        }
    }

    // == Peek Victim ==
    /// The key this policy would evict next, if it tracks any.
    pub fn peek_victim(&self) -> Option<&str> {
        match self {
            EvictionPolicy::Fifo(fifo) => fifo.peek_oldest(),
            EvictionPolicy::Lru(lru) => lru.peek_oldest(),
            EvictionPolicy::Lfu(lfu) => lfu.peek_least(),
        }
    }

    // == Select Victim ==
    /// Returns exactly one tracked key to evict.
    ///
    /// Does not change tracking state; the caller reports the removal through
    /// `on_evict`. Asking an empty policy is a contract violation.
    pub fn select_victim(&self) -> Result<String> {
        match self.peek_victim() {
            Some(key) => Ok(key.to_string()),
            None => {
                error!(policy = %self.kind(), "victim requested from empty policy");
                Err(CacheError::PolicyContractViolation(format!(
                    "{} policy has no keys to evict",
                    self.kind()
                )))
            }
        }
    }

    // == Seed ==
    /// Drops all tracking state, then records `keys` as if each had just
    /// been inserted, in the order given.
    ///
    /// Used when a policy is installed on a cache that already holds entries.
    /// Original insertion order and access history are not recoverable, so
    /// every key starts from the baseline (LFU frequency 1).
    pub fn seed<'a, I>(&mut self, keys: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.clear();
        for key in keys {
            self.on_insert(key);
        }
    }

    // == Clear ==
    /// Drops all tracking state.
    pub fn clear(&mut self) {
        match self {
            EvictionPolicy::Fifo(fifo) => fifo.clear(),
            EvictionPolicy::Lru(lru) => lru.clear(),
            EvictionPolicy::Lfu(lfu) => lfu.clear(),
        }
    }

    // == Length ==
    /// Returns the number of tracked keys.
    pub fn len(&self) -> usize {
        match self {
            EvictionPolicy::Fifo(fifo) => fifo.len(),
            EvictionPolicy::Lru(lru) => lru.len(),
            EvictionPolicy::Lfu(lfu) => lfu.len(),
        }
    }

    // == Is Empty ==
    /// Returns true if no key is tracked.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // == Contains ==
    /// Checks if a key is being tracked.
    pub fn contains(&self, key: &str) -> bool {
        match self {
            EvictionPolicy::Fifo(fifo) => fifo.contains(key),
            EvictionPolicy::Lru(lru) => lru.contains(key),
            EvictionPolicy::Lfu(lfu) => lfu.contains(key),
        }
    }
}

impl From<PolicyKind> for EvictionPolicy {
    fn from(kind: PolicyKind) -> Self {
        match kind {
            PolicyKind::Fifo => EvictionPolicy::fifo(),
            PolicyKind::Lru => EvictionPolicy::lru(),
            PolicyKind::Lfu => EvictionPolicy::lfu(),
        }
    }
}
