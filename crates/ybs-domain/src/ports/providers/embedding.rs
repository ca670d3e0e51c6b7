use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::value_objects::Embedding;

/// Text embedding interface
///
/// Transforms text into a fixed-length vector. Implementations perform one
/// outbound call per text and never cache; caching happens one level up,
/// keyed by the whole search.
///
/// # Default Implementations
///
/// `embed()` delegates to `embed_batch()` with a single item. Providers only
/// need to implement `embed_batch()`.
///
/// # Example
///
/// ```ignore
/// let embedding = provider.embed("coffee shops open late").await?;
/// assert_eq!(embedding.dimensions, provider.dimensions());
/// ```
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Get embedding for a single text
    async fn embed(&self, text: &str) -> Result<Embedding> {
        let embeddings = self.embed_batch(&[text.to_string()]).await?;
        embeddings
            .into_iter()
            .next()
            .ok_or_else(|| Error::embedding("No embedding returned"))
    }

    /// Get embeddings for multiple texts
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>>;

    /// Dimensionality of embeddings produced by this provider
    fn dimensions(&self) -> usize;

    /// Name/identifier of this provider implementation (e.g. "gemini")
    fn provider_name(&self) -> &str;
}
