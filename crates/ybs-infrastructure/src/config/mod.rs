//! Configuration
//!
//! Layered application configuration: defaults, TOML file, legacy
//! environment variables, then `YBS_`-prefixed overrides.

pub mod loader;
pub mod types;

pub use loader::{ConfigLoader, validate_app_config};
pub use types::{
    AppConfig, CacheBackend, CacheConfig, CatalogBackend, CatalogConfig, EmbeddingBackend,
    EmbeddingConfig, LoggingConfig, SearchConfig, ServerConfig,
};
