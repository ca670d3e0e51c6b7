use async_trait::async_trait;

use crate::error::Result;
use crate::value_objects::CatalogEntry;

/// Catalog store accessor
///
/// Read-only view of the business directory. Implementations return only
/// entries that carry a non-empty embedding vector, up to `limit` rows.
/// Failures are reported as [`crate::Error::Catalog`].
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Fetch at most `limit` candidate entries with precomputed vectors
    async fn fetch_candidates(&self, limit: usize) -> Result<Vec<CatalogEntry>>;

    /// Name/identifier of this provider implementation (e.g. "postgres")
    fn provider_name(&self) -> &str;
}
