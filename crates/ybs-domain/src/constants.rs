//! Domain layer constants
//!
//! Limits and defaults that are part of the search contract itself.
//! Infrastructure-specific constants live in `ybs-infrastructure`.

// ============================================================================
// QUERY CONSTANTS
// ============================================================================

/// Maximum query length in characters
pub const QUERY_MAX_CHARS: usize = 500;

/// Number of results returned when the caller does not supply a limit
pub const SEARCH_DEFAULT_LIMIT: usize = 5;

/// Upper bound on catalog entries scanned per search
pub const SEARCH_DEFAULT_CANDIDATE_LIMIT: usize = 1000;

// ============================================================================
// CACHE CONSTANTS
// ============================================================================

/// Namespace prefix for every search cache key
pub const SEARCH_CACHE_PREFIX: &str = "ai-search:";

/// Default TTL for cached search results in seconds (1 hour)
pub const SEARCH_CACHE_TTL_SECS: u64 = 3600;
