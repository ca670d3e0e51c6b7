//! Null embedding provider for testing and development
//!
//! Provides deterministic, hash-based embeddings. No external dependencies,
//! always works offline.

use async_trait::async_trait;

use ybs_domain::error::Result;
use ybs_domain::ports::EmbeddingProvider;
use ybs_domain::value_objects::Embedding;

use crate::constants::EMBEDDING_DIMENSION_NULL;

/// Null embedding provider
///
/// The same text always produces the same vector, so search results are
/// stable across runs without a real embedding service.
///
/// # Example
///
/// ```rust
/// use ybs_providers::embedding::NullEmbeddingProvider;
/// use ybs_domain::ports::EmbeddingProvider;
///
/// let provider = NullEmbeddingProvider::new();
/// assert_eq!(provider.dimensions(), 768);
/// assert_eq!(provider.provider_name(), "null");
/// ```
#[derive(Debug, Clone)]
pub struct NullEmbeddingProvider {
    dimensions: usize,
}

impl NullEmbeddingProvider {
    /// Create a new null embedding provider
    pub fn new() -> Self {
        Self::with_dimensions(EMBEDDING_DIMENSION_NULL)
    }

    /// Create a provider emitting vectors of the given length
    pub fn with_dimensions(dimensions: usize) -> Self {
        Self { dimensions }
    }

    /// Deterministic vector for `text`
    pub fn vector_for(&self, text: &str) -> Vec<f32> {
        // FNV-1a
        let hash = text.bytes().fold(0xcbf2_9ce4_8422_2325_u64, |h, b| {
            (h ^ u64::from(b)).wrapping_mul(0x0100_0000_01b3)
        });

        #[allow(clippy::cast_precision_loss)]
        let base_value = (hash % 1000) as f32 / 1000.0;

        (0..self.dimensions)
            .map(|j| {
                #[allow(clippy::cast_precision_loss)]
                let phase = (hash >> (j % 48)) as f32 * 0.001 + j as f32 * 0.01;
                (base_value + phase.sin() * 0.1).clamp(0.0, 1.0)
            })
            .collect()
    }
}

impl Default for NullEmbeddingProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmbeddingProvider for NullEmbeddingProvider {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        Ok(texts
            .iter()
            .map(|text| Embedding::new(self.vector_for(text), "null"))
            .collect())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}
