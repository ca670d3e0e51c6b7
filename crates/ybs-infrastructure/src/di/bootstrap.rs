//! Application bootstrap
//!
//! ```text
//! AppConfig -> factories -> providers -> SearchServiceImpl -> AppContext
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! let config = ConfigLoader::new().load()?;
//! let context = init_app(config)?;
//! let results = context.search_service.search(&request).await?;
//! ```

use std::sync::Arc;

use tracing::info;
use ybs_application::{SearchServiceImpl, SearchServiceInterface};
use ybs_domain::error::Result;

use crate::config::AppConfig;
use crate::di::factory;

/// Wired application
pub struct AppContext {
    /// Configuration the context was built from
    pub config: Arc<AppConfig>,
    /// Search and invalidation entry point
    pub search_service: Arc<dyn SearchServiceInterface>,
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("status", &self.search_service.status())
            .finish_non_exhaustive()
    }
}

/// Build providers and the search service from `config`
///
/// No provider connects here: Redis and Postgres connect on first use.
pub fn init_app(config: AppConfig) -> Result<AppContext> {
    let embedding = factory::embedding_provider(&config.embedding)?;
    let cache = factory::search_cache(&config.cache)?;
    let catalog = factory::catalog_provider(&config.catalog)?;

    let service = SearchServiceImpl::new(embedding, catalog, cache)
        .with_candidate_limit(config.search.candidate_limit);
    let status = service.status();

    info!(
        embedding = %status.embedding,
        catalog = %status.catalog,
        cache = status.cache.as_deref().unwrap_or("disabled"),
        "Search service initialized"
    );

    Ok(AppContext {
        config: Arc::new(config),
        search_service: Arc::new(service),
    })
}
