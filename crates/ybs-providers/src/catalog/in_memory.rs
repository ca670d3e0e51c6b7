//! In-memory catalog provider
//!
//! Serves a fixed set of entries. Used for tests and for running the service
//! without a database, seeded from a JSON array of entries.

use std::path::Path;
use std::sync::RwLock;

use async_trait::async_trait;
use ybs_domain::error::{Error, Result};
use ybs_domain::ports::CatalogProvider;
use ybs_domain::value_objects::CatalogEntry;

/// Catalog backed by a vector held in memory
#[derive(Debug, Default)]
pub struct InMemoryCatalogProvider {
    entries: RwLock<Vec<CatalogEntry>>,
}

impl InMemoryCatalogProvider {
    /// Create a catalog holding `entries`
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self {
            entries: RwLock::new(entries),
        }
    }

    /// Load entries from a JSON file containing an array of entries
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| Error::Io {
            message: format!("Failed to read catalog fixture {}", path.display()),
            source: Some(Box::new(e)),
        })?;
        let entries: Vec<CatalogEntry> = serde_json::from_str(&contents)?;
        Ok(Self::new(entries))
    }

    /// Replace the catalog contents
    pub fn replace(&self, entries: Vec<CatalogEntry>) -> Result<()> {
        let mut guard = self
            .entries
            .write()
            .map_err(|_| Error::catalog("Catalog lock poisoned"))?;
        *guard = entries;
        Ok(())
    }

    /// Total number of entries, including those without a vector
    pub fn len(&self) -> usize {
        self.entries.read().map_or(0, |e| e.len())
    }

    /// Whether the catalog holds no entries
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl CatalogProvider for InMemoryCatalogProvider {
    async fn fetch_candidates(&self, limit: usize) -> Result<Vec<CatalogEntry>> {
        let guard = self
            .entries
            .read()
            .map_err(|_| Error::catalog("Catalog lock poisoned"))?;

        Ok(guard
            .iter()
            .filter(|entry| entry.is_candidate())
            .take(limit)
            .cloned()
            .collect())
    }

    fn provider_name(&self) -> &str {
        "in-memory"
    }
}
