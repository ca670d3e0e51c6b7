//! Application Port Interfaces
//!
//! Provider ports (embedding, cache, catalog) are defined in `ybs-domain`
//! and re-exported here for convenience.

/// Application service interfaces
pub mod services;

pub use services::{SearchServiceInterface, ServiceStatus};
pub use ybs_domain::ports::providers::{
    CacheEntryConfig, CacheProvider, CatalogProvider, EmbeddingProvider,
};
