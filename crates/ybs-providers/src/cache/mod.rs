//! Cache Provider Implementations
//!
//! Key/value backends for the search result cache.
//!
//! ## Available Providers
//!
//! | Provider | Type | Description |
//! |----------|------|-------------|
//! | [`NullCacheProvider`] | Testing | Stores nothing, every read is a miss |
//! | [`MokaCacheProvider`] | Local | In-process cache with per-entry TTL |
//! | [`RedisCacheProvider`] | Distributed | Redis-backed, shared across instances |

#[cfg(feature = "cache-moka")]
pub mod moka;
pub mod null;
#[cfg(feature = "cache-redis")]
pub mod redis;

// Re-export for convenience
#[cfg(feature = "cache-moka")]
pub use moka::MokaCacheProvider;
pub use null::NullCacheProvider;
#[cfg(feature = "cache-redis")]
pub use redis::RedisCacheProvider;

// Re-export domain types used by cache providers
pub use ybs_domain::ports::providers::cache::CacheEntryConfig;
