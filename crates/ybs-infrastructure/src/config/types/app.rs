//! Root configuration

use serde::{Deserialize, Serialize};

use super::{
    CacheConfig, CatalogConfig, EmbeddingConfig, LoggingConfig, SearchConfig, ServerConfig,
};

/// Complete application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP server
    pub server: ServerConfig,
    /// Logging
    pub logging: LoggingConfig,
    /// Query embedding provider
    pub embedding: EmbeddingConfig,
    /// Search result cache
    pub cache: CacheConfig,
    /// Directory entry store
    pub catalog: CatalogConfig,
    /// Search limits
    pub search: SearchConfig,
}
