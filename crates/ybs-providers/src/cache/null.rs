//! Null cache provider
//!
//! Accepts every write and forgets it immediately.

use async_trait::async_trait;
use ybs_domain::error::Result;
use ybs_domain::ports::providers::cache::{CacheEntryConfig, CacheProvider};

/// Cache provider that never stores anything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullCacheProvider;

impl NullCacheProvider {
    /// Create a new null cache provider
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CacheProvider for NullCacheProvider {
    async fn get(&self, _key: &str) -> Result<Option<String>> {
        Ok(None)
    }

    async fn set(&self, _key: &str, _value: &str, _config: CacheEntryConfig) -> Result<()> {
        Ok(())
    }

    async fn delete(&self, _key: &str) -> Result<bool> {
        Ok(false)
    }

    async fn delete_by_prefix(&self, _prefix: &str) -> Result<u64> {
        Ok(0)
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}
