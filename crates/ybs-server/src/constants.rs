//! Server constants

/// Mount point for the search API
pub const API_BASE: &str = "/api/ai/yellow-books";

/// Health status reported when the service is up
pub const HEALTH_STATUS_OK: &str = "ok";

/// Cache field value in health output when no backend is configured
pub const CACHE_DISABLED: &str = "disabled";
