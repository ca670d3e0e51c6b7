//! Application Service Interfaces

use async_trait::async_trait;
use serde::Serialize;
use ybs_domain::error::Result;
use ybs_domain::value_objects::{SearchRequest, SearchResult};

use crate::use_cases::InvalidationOutcome;

/// Names of the providers a search service is wired to
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ServiceStatus {
    /// Embedding provider name
    pub embedding: String,
    /// Catalog provider name
    pub catalog: String,
    /// Cache provider name, `None` when caching is disabled
    pub cache: Option<String>,
}

/// Semantic search service interface
///
/// The presentation layer depends on this trait rather than on
/// [`crate::SearchServiceImpl`] so that routes can be tested with fakes.
#[async_trait]
pub trait SearchServiceInterface: Send + Sync {
    /// Run a search, consulting the cache when the request allows it
    async fn search(&self, request: &SearchRequest) -> Result<Vec<SearchResult>>;

    /// Drop one cached query, or every cached query when `query` is `None`
    async fn invalidate(&self, query: Option<&str>) -> InvalidationOutcome;

    /// Describe the wired providers
    fn status(&self) -> ServiceStatus;
}
