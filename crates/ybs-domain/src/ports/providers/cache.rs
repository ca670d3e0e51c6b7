//! Cache Provider Port
//!
//! Port for key/value cache backends. Supports distributed (Redis),
//! in-process (Moka) and null providers.

use crate::constants::SEARCH_CACHE_TTL_SECS;
use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Cache Entry Configuration
///
/// # Example
///
/// ```rust
/// use ybs_domain::ports::CacheEntryConfig;
/// use std::time::Duration;
///
/// let config = CacheEntryConfig::default().with_ttl_secs(60);
/// assert_eq!(config.ttl, Duration::from_secs(60));
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CacheEntryConfig {
    /// Time to live for the cache entry
    pub ttl: Duration,
}

impl CacheEntryConfig {
    /// Create a new cache entry config with the search TTL
    pub fn new() -> Self {
        Self {
            ttl: Duration::from_secs(SEARCH_CACHE_TTL_SECS),
        }
    }

    /// Set the TTL for the cache entry
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Set TTL in seconds
    pub fn with_ttl_secs(mut self, secs: u64) -> Self {
        self.ttl = Duration::from_secs(secs);
        self
    }
}

impl Default for CacheEntryConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Cache Provider Port
///
/// Stores string values (JSON documents) under string keys with a TTL.
/// Providers report backend failures as [`crate::Error::Cache`]; deciding
/// whether a failure matters is the caller's job.
///
/// # Implementations
///
/// - **Redis**: Distributed cache, lazily connected
/// - **Moka**: In-process cache with per-entry TTL
/// - **Null**: Stores nothing
#[async_trait]
pub trait CacheProvider: Send + Sync + std::fmt::Debug {
    /// Get a value, `None` if absent or expired
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store a value with the configured TTL
    async fn set(&self, key: &str, value: &str, config: CacheEntryConfig) -> Result<()>;

    /// Delete a single key
    ///
    /// # Returns
    /// True if the key existed
    async fn delete(&self, key: &str) -> Result<bool>;

    /// Delete every key starting with `prefix`
    ///
    /// # Returns
    /// Number of keys removed
    async fn delete_by_prefix(&self, prefix: &str) -> Result<u64>;

    /// Name/identifier of this provider (e.g. "redis", "moka", "null")
    fn provider_name(&self) -> &str;
}
