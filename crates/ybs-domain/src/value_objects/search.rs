//! Search-Related Value Objects

use crate::constants::SEARCH_DEFAULT_LIMIT;
use serde::{Deserialize, Serialize};

/// Value Object: Ranked Search Result
///
/// ## Business Rules
///
/// - `similarity` is the cosine similarity against the query (higher is better)
/// - `rank` is the zero-based position after sorting
///
/// ## Example
///
/// ```rust
/// use ybs_domain::value_objects::SearchResult;
///
/// let result = SearchResult {
///     id: "clx0abc".to_string(),
///     name: "Nomad Plumbing".to_string(),
///     summary: "24/7 emergency plumbing".to_string(),
///     similarity: 0.92,
///     rank: 0,
/// };
/// assert_eq!(result.rank, 0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResult {
    /// Catalog entry identifier
    pub id: String,
    /// Display name of the business
    pub name: String,
    /// Free-text summary
    pub summary: String,
    /// Cosine similarity to the query
    pub similarity: f64,
    /// Zero-based position in the ranked list
    pub rank: usize,
}

/// A search request as accepted by the orchestrator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// Raw, unvalidated query text
    pub query: String,
    /// Maximum number of results
    pub limit: usize,
    /// Whether the read-through cache may be used
    pub use_cache: bool,
}

impl SearchRequest {
    /// Request with default limit and caching enabled
    pub fn new<S: Into<String>>(query: S) -> Self {
        Self {
            query: query.into(),
            limit: SEARCH_DEFAULT_LIMIT,
            use_cache: true,
        }
    }

    /// Set the result limit
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Enable or disable the cache for this request
    pub fn with_cache(mut self, use_cache: bool) -> Self {
        self.use_cache = use_cache;
        self
    }
}

/// Cached payload for one query.
///
/// `limit` records how many results were requested when the entry was
/// written. A later request can be served from this entry only if it asks
/// for at most that many results.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CachedResults {
    /// Limit used when the results were computed
    pub limit: usize,
    /// Ranked results, already truncated to `limit`
    pub results: Vec<SearchResult>,
}

impl CachedResults {
    /// Return the first `limit` results if this entry can answer the request
    pub fn serve(self, limit: usize) -> Option<Vec<SearchResult>> {
        if limit > self.limit {
            return None;
        }
        let mut results = self.results;
        results.truncate(limit);
        Some(results)
    }
}
