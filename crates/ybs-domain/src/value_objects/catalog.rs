//! Catalog Entry Value Objects

use serde::{Deserialize, Serialize};

/// One business directory listing as read from the catalog store.
///
/// The core never mutates entries. Entries whose `embedding` is `None` or
/// empty are not eligible for ranking.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogEntry {
    /// Opaque unique identifier
    pub id: String,
    /// Display name of the business
    pub name: String,
    /// Free-text summary
    pub summary: String,
    /// Precomputed embedding vector, if one has been generated
    #[serde(default)]
    pub embedding: Option<Vec<f32>>,
}

impl CatalogEntry {
    /// Whether this entry carries a usable vector
    pub fn is_candidate(&self) -> bool {
        self.embedding.as_ref().is_some_and(|v| !v.is_empty())
    }
}
