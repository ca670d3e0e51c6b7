//! Request and response bodies

use serde::{Deserialize, Serialize};

/// Body of a search request
///
/// Missing fields fall back to server defaults; a missing query is
/// reported by validation as "Query is required".
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchBody {
    /// Natural-language query
    #[serde(default)]
    pub query: String,
    /// Maximum number of results
    pub limit: Option<usize>,
    /// Whether the cache may be consulted and written
    pub use_cache: Option<bool>,
}

/// Error body returned with every non-2xx status
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// Description of what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Create an error body
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Status line returned by cache invalidation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    /// Human-readable outcome
    pub message: String,
}

/// Health check body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    /// Always "ok" when the process answers
    pub status: String,
    /// Embedding provider name
    pub embedding: String,
    /// Catalog provider name
    pub catalog: String,
    /// Cache provider name, or "disabled"
    pub cache: String,
}
