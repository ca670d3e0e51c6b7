//! Validated search query

use crate::constants::{QUERY_MAX_CHARS, SEARCH_CACHE_PREFIX};
use crate::error::{Error, Result};

/// Value Object: Validated Search Query
///
/// Holds the trimmed query text. The trimmed form is used both as the
/// embedding input and for cache key derivation, so two queries that differ
/// only in surrounding whitespace share one cache entry.
///
/// ## Business Rules
///
/// - Must contain at least one non-whitespace character
/// - Raw input may not exceed [`QUERY_MAX_CHARS`] characters
///
/// ## Example
///
/// ```rust
/// use ybs_domain::value_objects::SearchQuery;
///
/// let query = SearchQuery::parse("  plumbers in ulaanbaatar ").unwrap();
/// assert_eq!(query.as_str(), "plumbers in ulaanbaatar");
/// assert_eq!(query.cache_key(), "ai-search:plumbers in ulaanbaatar");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    text: String,
}

impl SearchQuery {
    /// Validate raw user input and build a query
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(Error::invalid_query("Query is required"));
        }
        if raw.chars().count() > QUERY_MAX_CHARS {
            return Err(Error::invalid_query(format!(
                "Query too long (max {QUERY_MAX_CHARS} characters)"
            )));
        }
        Ok(Self {
            text: trimmed.to_string(),
        })
    }

    /// Trimmed query text
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Cache key under the search namespace
    pub fn cache_key(&self) -> String {
        cache_key_for(&self.text)
    }
}

impl std::fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// Derive the cache key for an arbitrary query string.
///
/// Applies the same trimming as [`SearchQuery::parse`] but no length checks,
/// so invalidation can target any key a search could have written.
pub fn cache_key_for(query: &str) -> String {
    format!("{SEARCH_CACHE_PREFIX}{}", query.trim())
}
