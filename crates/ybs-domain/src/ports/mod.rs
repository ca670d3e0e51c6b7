//! Domain Port Interfaces
//!
//! Boundary contracts between the search core and its external
//! collaborators. Implementations live in `ybs-providers`.

/// External service provider ports
pub mod providers;

pub use providers::{CacheEntryConfig, CacheProvider, CatalogProvider, EmbeddingProvider};
