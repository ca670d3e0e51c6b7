//! Provider Constants
//!
//! Constants specific to provider implementations. Domain constants live in
//! `ybs-domain`.

// ============================================================================
// EMBEDDING PROVIDER CONSTANTS
// ============================================================================

/// Gemini embedding model used when none is configured
pub const GEMINI_DEFAULT_MODEL: &str = "text-embedding-004";

/// Gemini API base URL
pub const GEMINI_DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Gemini embedding dimension
pub const EMBEDDING_DIMENSION_GEMINI: usize = 768;

/// Null embedding provider dimension
pub const EMBEDDING_DIMENSION_NULL: usize = 768;

/// Content type for JSON requests
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Error message prefix for request timeouts
pub const ERROR_MSG_REQUEST_TIMEOUT: &str = "Request timed out after";

// ============================================================================
// CACHE PROVIDER CONSTANTS
// ============================================================================

/// Redis default port
pub const REDIS_DEFAULT_PORT: u16 = 6379;

/// Default Moka capacity in entries
pub const MOKA_DEFAULT_MAX_ENTRIES: u64 = 10_000;

// ============================================================================
// CATALOG PROVIDER CONSTANTS
// ============================================================================

/// Table holding directory entries
pub const CATALOG_DEFAULT_TABLE: &str = "YellowBookEntry";

/// Default Postgres pool size
pub const CATALOG_DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Default Postgres connection timeout in seconds
pub const CATALOG_DEFAULT_CONNECTION_TIMEOUT_SECS: u64 = 10;
