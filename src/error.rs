//! Error types for the cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Cache could not be built from the supplied settings
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Key not found in cache
    #[error("Key not found: {0}")]
    NotFound(String),

    /// Eviction was requested from a policy that tracks no keys.
    ///
    /// Only reachable if the store and the policy fall out of sync.
    #[error("Eviction policy contract violated: {0}")]
    PolicyContractViolation(String),
}

// == Result Type Alias ==
/// Convenience Result type for the cache.
pub type Result<T> = std::result::Result<T, CacheError>;
