//! Infrastructure layer constants

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "ybs.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "ybs";

/// Prefix for environment overrides (`YBS_SERVER__PORT`)
pub const CONFIG_ENV_PREFIX: &str = "YBS";

/// Separator between nested keys in environment overrides
pub const CONFIG_ENV_SEPARATOR: &str = "__";

/// Environment variable holding a tracing filter directive
pub const LOG_FILTER_ENV: &str = "YBS_LOG";

// ============================================================================
// SERVER
// ============================================================================

/// Default bind address
pub const DEFAULT_SERVER_ADDRESS: &str = "0.0.0.0";

/// Default HTTP port
pub const DEFAULT_SERVER_PORT: u16 = 3000;

// ============================================================================
// EMBEDDING
// ============================================================================

/// Default embedding request timeout in seconds
pub const DEFAULT_EMBEDDING_TIMEOUT_SECS: u64 = 30;

// ============================================================================
// CACHE
// ============================================================================

/// Default bound on a single cache call in milliseconds
pub const DEFAULT_CACHE_TIMEOUT_MS: u64 = 2_000;

// ============================================================================
// SEARCH
// ============================================================================

/// Largest `limit` a caller may request
pub const DEFAULT_SEARCH_MAX_LIMIT: usize = 50;
