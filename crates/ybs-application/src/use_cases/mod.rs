//! Use Cases
//!
//! | Use case | Description |
//! |----------|-------------|
//! | [`SearchServiceImpl`] | Read-through semantic search and cache invalidation |
//! | [`SearchCache`] | Cache access that never fails a search |

/// Failure-isolating cache gateway
pub mod search_cache;
/// Search orchestrator
pub mod search_service;

pub use search_cache::{CacheLookup, InvalidationOutcome, SearchCache};
pub use search_service::SearchServiceImpl;
