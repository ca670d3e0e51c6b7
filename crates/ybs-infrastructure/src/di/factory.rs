//! Provider factories
//!
//! One function per port, each selecting the backend named in configuration.

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};
use ybs_application::SearchCache;
use ybs_domain::error::{Error, Result};
use ybs_domain::ports::{CacheProvider, CatalogProvider, EmbeddingProvider};
use ybs_providers::cache::{MokaCacheProvider, RedisCacheProvider};
use ybs_providers::catalog::{
    InMemoryCatalogProvider, PostgresCatalogConfig, PostgresCatalogProvider,
};
use ybs_providers::embedding::{GeminiEmbeddingProvider, NullEmbeddingProvider};

use crate::config::{
    CacheBackend, CacheConfig, CatalogBackend, CatalogConfig, EmbeddingBackend, EmbeddingConfig,
};
use crate::error_ext::ErrorContext;

/// Build the query embedding provider
pub fn embedding_provider(config: &EmbeddingConfig) -> Result<Arc<dyn EmbeddingProvider>> {
    match config.provider {
        EmbeddingBackend::Gemini => {
            let api_key = config
                .api_key
                .clone()
                .ok_or_else(|| Error::config("Gemini embedding requires an API key"))?;
            let timeout = Duration::from_secs(config.timeout_secs);
            let http_client = reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .context("Failed to create HTTP client")?;

            Ok(Arc::new(GeminiEmbeddingProvider::new(
                api_key,
                config.base_url.clone(),
                config.model.clone(),
                timeout,
                http_client,
            )))
        }
        EmbeddingBackend::Null => {
            warn!("Using null embedding provider; search results are not semantic");
            Ok(Arc::new(NullEmbeddingProvider::new()))
        }
    }
}

/// Build the search cache gateway
///
/// The Redis backend without a host yields a disabled cache rather than an
/// error.
pub fn search_cache(config: &CacheConfig) -> Result<SearchCache> {
    let provider: Option<Arc<dyn CacheProvider>> = match config.provider {
        CacheBackend::Redis => match config.redis_host() {
            Some(host) => Some(Arc::new(RedisCacheProvider::with_host_port(
                host,
                config.port,
                config.password.as_deref(),
            )?)),
            None => {
                info!("REDIS_HOST not set; search cache disabled");
                None
            }
        },
        CacheBackend::Moka => Some(Arc::new(MokaCacheProvider::with_capacity(
            config.max_entries,
        ))),
        CacheBackend::None => None,
    };

    Ok(SearchCache::from_option(provider)
        .with_ttl(Duration::from_secs(config.ttl_secs))
        .with_timeout(Duration::from_millis(config.timeout_ms)))
}

/// Build the catalog provider
pub fn catalog_provider(config: &CatalogConfig) -> Result<Arc<dyn CatalogProvider>> {
    match config.provider {
        CatalogBackend::Postgres => {
            let url = config
                .database_url
                .clone()
                .ok_or_else(|| Error::config("Postgres catalog requires a database URL"))?;
            let pg_config = PostgresCatalogConfig {
                url,
                table: config.table.clone(),
                max_connections: config.max_connections,
                connection_timeout: Duration::from_secs(config.connection_timeout_secs),
            };
            Ok(Arc::new(PostgresCatalogProvider::new(&pg_config)?))
        }
        CatalogBackend::Memory => match &config.fixture_path {
            Some(path) => {
                let provider = InMemoryCatalogProvider::from_json_file(path)?;
                info!(
                    path = %path.display(),
                    entries = provider.len(),
                    "Loaded catalog fixture"
                );
                Ok(Arc::new(provider))
            }
            None => {
                warn!("In-memory catalog has no fixture; searches return no results");
                Ok(Arc::new(InMemoryCatalogProvider::default()))
            }
        },
    }
}
