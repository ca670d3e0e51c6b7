//! Domain Value Objects
//!
//! Immutable values exchanged between the search orchestrator and its
//! providers.
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`SearchQuery`] | Validated, trimmed user query |
//! | [`Embedding`] | Vector representation of text |
//! | [`CatalogEntry`] | A directory listing with its precomputed vector |
//! | [`SearchResult`] | Ranked result of a semantic search |

/// Catalog entry value objects
pub mod catalog;
/// Semantic embedding value objects
pub mod embedding;
/// Validated query value object
pub mod query;
/// Search result value objects
pub mod search;

pub use catalog::CatalogEntry;
pub use embedding::Embedding;
pub use query::{SearchQuery, cache_key_for};
pub use search::{CachedResults, SearchRequest, SearchResult};
