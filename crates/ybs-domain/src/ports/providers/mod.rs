//! External Provider Ports
//!
//! | Port | Description |
//! |------|-------------|
//! | [`EmbeddingProvider`] | Text embedding generation services |
//! | [`CacheProvider`] | Key/value cache backends with TTL |
//! | [`CatalogProvider`] | Read access to directory entries and their vectors |

/// Cache provider port
pub mod cache;
/// Catalog provider port
pub mod catalog;
/// Embedding provider port
pub mod embedding;

pub use cache::{CacheEntryConfig, CacheProvider};
pub use catalog::CatalogProvider;
pub use embedding::EmbeddingProvider;
