//! Search Service Use Case
//!
//! Read-through semantic search. States per call:
//!
//! ```text
//! Validating -> CacheLookup -> Hit ----------------------------------------> Respond
//!                          \-> Miss -> Embedding -> CandidateFetch -> Ranking
//!                                                    -> CacheWrite -> Respond
//! ```
//!
//! Validation, embedding and catalog failures abort the search. Cache
//! failures never do.

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use tracing::{debug, info, warn};
use ybs_domain::constants::SEARCH_DEFAULT_CANDIDATE_LIMIT;
use ybs_domain::error::{Error, Result};
use ybs_domain::ports::providers::{CatalogProvider, EmbeddingProvider};
use ybs_domain::value_objects::{
    CachedResults, CatalogEntry, SearchQuery, SearchRequest, SearchResult,
};

use crate::domain_services::ranking;
use crate::ports::services::{SearchServiceInterface, ServiceStatus};
use crate::use_cases::search_cache::{CacheLookup, InvalidationOutcome, SearchCache};

/// Search orchestrator
///
/// Owns its collaborators explicitly; the cache handle is injected rather
/// than reached through global state, so tests can swap in an in-memory
/// cache or none at all.
pub struct SearchServiceImpl {
    embedding_provider: Arc<dyn EmbeddingProvider>,
    catalog_provider: Arc<dyn CatalogProvider>,
    cache: SearchCache,
    candidate_limit: usize,
}

impl SearchServiceImpl {
    /// Create new search service with injected dependencies
    pub fn new(
        embedding_provider: Arc<dyn EmbeddingProvider>,
        catalog_provider: Arc<dyn CatalogProvider>,
        cache: SearchCache,
    ) -> Self {
        Self {
            embedding_provider,
            catalog_provider,
            cache,
            candidate_limit: SEARCH_DEFAULT_CANDIDATE_LIMIT,
        }
    }

    /// Bound the number of catalog entries scanned per search
    pub fn with_candidate_limit(mut self, candidate_limit: usize) -> Self {
        self.candidate_limit = candidate_limit;
        self
    }

    /// Configured candidate bound
    pub fn candidate_limit(&self) -> usize {
        self.candidate_limit
    }

    /// The cache gateway used by this service
    pub fn cache(&self) -> &SearchCache {
        &self.cache
    }

    /// Embed, fetch, rank
    async fn compute(&self, query: &SearchQuery, limit: usize) -> Result<Vec<SearchResult>> {
        let started = Instant::now();

        let embedding = self.embedding_provider.embed(query.as_str()).await?;
        if embedding.vector.is_empty() {
            return Err(Error::embedding("Provider returned an empty vector"));
        }

        let entries = self
            .catalog_provider
            .fetch_candidates(self.candidate_limit)
            .await?;
        let fetched = entries.len();
        let candidates = comparable_candidates(entries, embedding.vector.len());
        if candidates.len() < fetched {
            warn!(
                skipped = fetched - candidates.len(),
                dimensions = embedding.vector.len(),
                "Skipped catalog entries without a comparable vector"
            );
        }

        let results = ranking::rank(&embedding.vector, &candidates, limit)?;
        info!(
            query = %query,
            candidates = candidates.len(),
            results = results.len(),
            elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
            "Computed search results"
        );
        Ok(results)
    }
}

/// Keep entries whose vector is present, non-empty and of the query's length
fn comparable_candidates(entries: Vec<CatalogEntry>, dimensions: usize) -> Vec<CatalogEntry> {
    entries
        .into_iter()
        .filter(|entry| {
            entry
                .embedding
                .as_ref()
                .is_some_and(|v| !v.is_empty() && v.len() == dimensions)
        })
        .collect()
}

#[async_trait]
impl SearchServiceInterface for SearchServiceImpl {
    async fn search(&self, request: &SearchRequest) -> Result<Vec<SearchResult>> {
        let query = SearchQuery::parse(&request.query)?;
        let key = query.cache_key();
        let use_cache = request.use_cache && self.cache.is_enabled();

        if use_cache {
            match self.cache.lookup(&key).await {
                CacheLookup::Hit(cached) => {
                    if let Some(results) = cached.serve(request.limit) {
                        info!(key = %key, results = results.len(), "Search cache hit");
                        return Ok(results);
                    }
                    debug!(key = %key, limit = request.limit, "Cached entry too short for limit");
                }
                CacheLookup::Miss => debug!(key = %key, "Search cache miss"),
                CacheLookup::Unavailable => {
                    debug!(key = %key, "Cache unavailable; computing fresh results");
                }
            }
        }

        let results = self.compute(&query, request.limit).await?;

        if use_cache {
            let cached = CachedResults {
                limit: request.limit,
                results: results.clone(),
            };
            self.cache.store(&key, &cached).await;
        }

        Ok(results)
    }

    async fn invalidate(&self, query: Option<&str>) -> InvalidationOutcome {
        let outcome = self.cache.invalidate(query).await;
        info!(outcome = ?outcome, "Cache invalidation handled");
        outcome
    }

    fn status(&self) -> ServiceStatus {
        ServiceStatus {
            embedding: self.embedding_provider.provider_name().to_string(),
            catalog: self.catalog_provider.provider_name().to_string(),
            cache: self.cache.provider_name().map(str::to_string),
        }
    }
}
