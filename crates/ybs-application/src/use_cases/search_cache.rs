//! Search cache gateway
//!
//! Wraps an optional [`CacheProvider`] so that cache trouble degrades to
//! "no caching" instead of failing a search. Every backend call is bounded
//! by a timeout; a timeout is handled like any other backend failure.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};
use ybs_domain::constants::SEARCH_CACHE_PREFIX;
use ybs_domain::error::{Error, Result};
use ybs_domain::ports::providers::{CacheEntryConfig, CacheProvider};
use ybs_domain::value_objects::{CachedResults, cache_key_for};

/// Default bound on a single cache call
pub const DEFAULT_CACHE_TIMEOUT: Duration = Duration::from_secs(2);

/// Outcome of a cache read
#[derive(Debug, Clone, PartialEq)]
pub enum CacheLookup {
    /// A decodable entry was found
    Hit(CachedResults),
    /// No entry, or caching is disabled
    Miss,
    /// The backend failed or timed out
    Unavailable,
}

/// Outcome of a cache invalidation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidationOutcome {
    /// No cache backend is configured
    Disabled,
    /// The backend could not be reached
    Unavailable,
    /// A single query's entry was targeted
    KeyCleared {
        /// Trimmed query text
        query: String,
        /// Whether an entry actually existed
        removed: bool,
    },
    /// Every search entry was targeted
    AllCleared {
        /// Number of entries removed
        removed: u64,
    },
}

impl InvalidationOutcome {
    /// Human-readable status line for the caller
    pub fn message(&self) -> String {
        match self {
            Self::Disabled => "Cache is not configured; cache is disabled.".to_string(),
            Self::Unavailable => "Cache backend is unavailable; nothing was cleared.".to_string(),
            Self::KeyCleared { query, .. } => format!("Cache cleared for query: {query}"),
            Self::AllCleared { removed } => format!("All cache cleared ({removed} entries)"),
        }
    }
}

/// Failure-isolating access to the search cache
#[derive(Clone, Debug)]
pub struct SearchCache {
    provider: Option<Arc<dyn CacheProvider>>,
    entry_config: CacheEntryConfig,
    timeout: Duration,
}

impl SearchCache {
    /// Cache backed by `provider` with default TTL and timeout
    pub fn new(provider: Arc<dyn CacheProvider>) -> Self {
        Self {
            provider: Some(provider),
            entry_config: CacheEntryConfig::default(),
            timeout: DEFAULT_CACHE_TIMEOUT,
        }
    }

    /// Cache with no backend: lookups miss and writes are dropped
    pub fn disabled() -> Self {
        Self {
            provider: None,
            entry_config: CacheEntryConfig::default(),
            timeout: DEFAULT_CACHE_TIMEOUT,
        }
    }

    /// Build from an optional provider
    pub fn from_option(provider: Option<Arc<dyn CacheProvider>>) -> Self {
        provider.map_or_else(Self::disabled, Self::new)
    }

    /// Set the TTL applied to written entries
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.entry_config = self.entry_config.with_ttl(ttl);
        self
    }

    /// Set the bound on each backend call
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Whether a backend is configured
    pub fn is_enabled(&self) -> bool {
        self.provider.is_some()
    }

    /// Name of the configured backend
    pub fn provider_name(&self) -> Option<&str> {
        self.provider.as_deref().map(|p| p.provider_name())
    }

    /// Read the entry stored under `key`
    pub async fn lookup(&self, key: &str) -> CacheLookup {
        let Some(provider) = &self.provider else {
            return CacheLookup::Miss;
        };

        match self.bounded("get", provider.get(key)).await {
            Ok(Some(json)) => match serde_json::from_str::<CachedResults>(&json) {
                Ok(cached) => CacheLookup::Hit(cached),
                Err(e) => {
                    warn!(key = %key, error = %e, "Discarding undecodable cache entry");
                    CacheLookup::Miss
                }
            },
            Ok(None) => CacheLookup::Miss,
            Err(e) => {
                warn!(key = %key, error = %e, "Cache lookup failed; continuing without cache");
                CacheLookup::Unavailable
            }
        }
    }

    /// Write `value` under `key`; failures are logged and dropped
    pub async fn store(&self, key: &str, value: &CachedResults) {
        let Some(provider) = &self.provider else {
            return;
        };

        let json = match serde_json::to_string(value) {
            Ok(json) => json,
            Err(e) => {
                warn!(key = %key, error = %e, "Failed to serialize search results for cache");
                return;
            }
        };

        match self
            .bounded("set", provider.set(key, &json, self.entry_config))
            .await
        {
            Ok(()) => debug!(key = %key, results = value.results.len(), "Cached search results"),
            Err(e) => warn!(key = %key, error = %e, "Cache write failed; result not cached"),
        }
    }

    /// Remove one query's entry, or all search entries when `query` is
    /// `None` or blank
    pub async fn invalidate(&self, query: Option<&str>) -> InvalidationOutcome {
        let Some(provider) = &self.provider else {
            return InvalidationOutcome::Disabled;
        };

        match query.map(str::trim).filter(|q| !q.is_empty()) {
            Some(query) => {
                let key = cache_key_for(query);
                match self.bounded("delete", provider.delete(&key)).await {
                    Ok(removed) => {
                        debug!(key = %key, removed, "Invalidated cached query");
                        InvalidationOutcome::KeyCleared {
                            query: query.to_string(),
                            removed,
                        }
                    }
                    Err(e) => {
                        warn!(key = %key, error = %e, "Cache invalidation failed");
                        InvalidationOutcome::Unavailable
                    }
                }
            }
            None => match self
                .bounded("delete_by_prefix", provider.delete_by_prefix(SEARCH_CACHE_PREFIX))
                .await
            {
                Ok(removed) => {
                    debug!(removed, "Invalidated all cached searches");
                    InvalidationOutcome::AllCleared { removed }
                }
                Err(e) => {
                    warn!(error = %e, "Cache invalidation failed");
                    InvalidationOutcome::Unavailable
                }
            },
        }
    }

    async fn bounded<T, F>(&self, op: &str, fut: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        tokio::time::timeout(self.timeout, fut)
            .await
            .map_err(|_| Error::cache(format!("cache {op} timed out after {:?}", self.timeout)))?
    }
}
