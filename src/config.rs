//! Configuration Module
//!
//! Handles loading cache settings from environment variables.

use std::env;

use serde::{Deserialize, Serialize};

use crate::cache::PolicyKind;

/// Cache configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Maximum number of entries the cache can hold
    pub max_entries: usize,
    /// Eviction policy installed at construction
    pub policy: PolicyKind,
}

impl CacheConfig {
    /// Creates a new CacheConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `MAX_ENTRIES` - Maximum cache entries (default: 1000)
    /// - `EVICTION_POLICY` - `fifo`, `lru` or `lfu` (default: lru)
    ///
    /// Values that fail to parse fall back to the default. A `MAX_ENTRIES`
    /// of 0 is kept and rejected when the cache is built.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            max_entries: env::var("MAX_ENTRIES")
                .ok()
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.max_entries),
            policy: env::var("EVICTION_POLICY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.policy),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: 1000,
            policy: PolicyKind::Lru,
        }
    }
}
