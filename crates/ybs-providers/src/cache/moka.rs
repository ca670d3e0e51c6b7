//! Moka in-memory cache provider
//!
//! Concurrent in-process cache. Each entry expires according to the TTL
//! it was written with.
//!
//! ## Example
//!
//! ```ignore
//! use ybs_providers::cache::MokaCacheProvider;
//!
//! let provider = MokaCacheProvider::with_capacity(1000);
//! ```

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use moka::Expiry;
use moka::future::Cache;
use ybs_domain::error::Result;
use ybs_domain::ports::providers::cache::{CacheEntryConfig, CacheProvider};

use crate::constants::MOKA_DEFAULT_MAX_ENTRIES;

#[derive(Clone)]
struct StoredValue {
    json: Arc<str>,
    ttl: Duration,
}

/// Expires an entry `ttl` after it was last written
struct PerEntryTtl;

impl Expiry<String, StoredValue> for PerEntryTtl {
    fn expire_after_create(
        &self,
        _key: &String,
        value: &StoredValue,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(value.ttl)
    }

    fn expire_after_update(
        &self,
        _key: &String,
        value: &StoredValue,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(value.ttl)
    }
}

/// Moka-based in-memory cache provider
#[derive(Clone)]
pub struct MokaCacheProvider {
    cache: Cache<String, StoredValue>,
    max_entries: u64,
}

impl Default for MokaCacheProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MokaCacheProvider {
    /// Create a new Moka cache provider with default settings
    pub fn new() -> Self {
        Self::with_capacity(MOKA_DEFAULT_MAX_ENTRIES)
    }

    /// Create a new Moka cache provider holding at most `max_entries` entries
    pub fn with_capacity(max_entries: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_entries)
            .expire_after(PerEntryTtl)
            .build();

        Self { cache, max_entries }
    }

    /// Get the maximum capacity of the cache
    pub fn max_entries(&self) -> u64 {
        self.max_entries
    }

    /// Approximate number of live entries
    pub async fn entry_count(&self) -> u64 {
        self.cache.run_pending_tasks().await;
        self.cache.entry_count()
    }
}

#[async_trait]
impl CacheProvider for MokaCacheProvider {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.cache.get(key).await.map(|v| v.json.to_string()))
    }

    async fn set(&self, key: &str, value: &str, config: CacheEntryConfig) -> Result<()> {
        let stored = StoredValue {
            json: Arc::from(value),
            ttl: config.ttl,
        };
        self.cache.insert(key.to_string(), stored).await;
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        Ok(self.cache.remove(key).await.is_some())
    }

    async fn delete_by_prefix(&self, prefix: &str) -> Result<u64> {
        let keys: Vec<Arc<String>> = self
            .cache
            .iter()
            .filter(|(key, _)| key.starts_with(prefix))
            .map(|(key, _)| key)
            .collect();

        let mut removed = 0;
        for key in keys {
            if self.cache.remove(key.as_str()).await.is_some() {
                removed += 1;
            }
        }
        Ok(removed)
    }

    fn provider_name(&self) -> &str {
        "moka"
    }
}

impl std::fmt::Debug for MokaCacheProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MokaCacheProvider")
            .field("max_entries", &self.max_entries)
            .field("entries", &self.cache.entry_count())
            .finish()
    }
}
