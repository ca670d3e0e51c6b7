//! Provider configuration: embedding, cache and catalog backends

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use ybs_domain::constants::SEARCH_CACHE_TTL_SECS;
use ybs_providers::constants::{
    CATALOG_DEFAULT_CONNECTION_TIMEOUT_SECS, CATALOG_DEFAULT_MAX_CONNECTIONS,
    CATALOG_DEFAULT_TABLE, GEMINI_DEFAULT_MODEL, MOKA_DEFAULT_MAX_ENTRIES, REDIS_DEFAULT_PORT,
};

use crate::constants::{DEFAULT_CACHE_TIMEOUT_MS, DEFAULT_EMBEDDING_TIMEOUT_SECS};

/// Embedding backend selection
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EmbeddingBackend {
    /// Google Gemini embedding API
    #[default]
    Gemini,
    /// Deterministic offline vectors
    Null,
}

/// Embedding provider configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Backend
    pub provider: EmbeddingBackend,
    /// Model name
    pub model: String,
    /// API key (also read from `GEMINI_API_KEY` / `OPENAI_API_KEY`)
    pub api_key: Option<String>,
    /// Override for the provider's base URL
    pub base_url: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: EmbeddingBackend::default(),
            model: GEMINI_DEFAULT_MODEL.to_string(),
            api_key: None,
            base_url: None,
            timeout_secs: DEFAULT_EMBEDDING_TIMEOUT_SECS,
        }
    }
}

/// Cache backend selection
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CacheBackend {
    /// Redis; disabled when no host is configured
    #[default]
    Redis,
    /// In-process Moka cache
    Moka,
    /// Caching disabled
    None,
}

/// Search cache configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CacheConfig {
    /// Backend
    pub provider: CacheBackend,
    /// Redis host (`REDIS_HOST`)
    pub host: Option<String>,
    /// Redis port (`REDIS_PORT`)
    pub port: u16,
    /// Redis password (`REDIS_PASSWORD`)
    pub password: Option<String>,
    /// Entry lifetime in seconds
    pub ttl_secs: u64,
    /// Bound on each cache call in milliseconds
    pub timeout_ms: u64,
    /// Moka capacity in entries
    pub max_entries: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            provider: CacheBackend::default(),
            host: None,
            port: REDIS_DEFAULT_PORT,
            password: None,
            ttl_secs: SEARCH_CACHE_TTL_SECS,
            timeout_ms: DEFAULT_CACHE_TIMEOUT_MS,
            max_entries: MOKA_DEFAULT_MAX_ENTRIES,
        }
    }
}

impl CacheConfig {
    /// Redis host, if set and non-blank
    pub fn redis_host(&self) -> Option<&str> {
        self.host.as_deref().map(str::trim).filter(|h| !h.is_empty())
    }
}

/// Catalog backend selection
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CatalogBackend {
    /// PostgreSQL entry table
    #[default]
    Postgres,
    /// Entries loaded from a JSON fixture
    Memory,
}

/// Catalog store configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CatalogConfig {
    /// Backend
    pub provider: CatalogBackend,
    /// PostgreSQL URL (`DATABASE_URL`)
    pub database_url: Option<String>,
    /// Table holding the entries
    pub table: String,
    /// Pool size
    pub max_connections: u32,
    /// Seconds to wait for a pooled connection
    pub connection_timeout_secs: u64,
    /// JSON file of entries for the memory backend
    pub fixture_path: Option<PathBuf>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            provider: CatalogBackend::default(),
            database_url: None,
            table: CATALOG_DEFAULT_TABLE.to_string(),
            max_connections: CATALOG_DEFAULT_MAX_CONNECTIONS,
            connection_timeout_secs: CATALOG_DEFAULT_CONNECTION_TIMEOUT_SECS,
            fixture_path: None,
        }
    }
}
