//! Semantic Embedding Value Objects

use serde::{Deserialize, Serialize};

/// Value Object: Semantic Text Embedding
///
/// A fixed-length vector produced by an embedding model. Vectors are only
/// comparable when their `dimensions` match.
///
/// ## Example
///
/// ```rust
/// use ybs_domain::value_objects::Embedding;
///
/// let embedding = Embedding::new(vec![0.1, 0.2, 0.3], "text-embedding-004");
/// assert_eq!(embedding.dimensions, 3);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Embedding {
    /// The embedding vector values
    pub vector: Vec<f32>,
    /// Name of the model that generated this embedding
    pub model: String,
    /// Dimensionality of the embedding vector
    pub dimensions: usize,
}

impl Embedding {
    /// Build an embedding, deriving `dimensions` from the vector
    pub fn new<S: Into<String>>(vector: Vec<f32>, model: S) -> Self {
        let dimensions = vector.len();
        Self {
            vector,
            model: model.into(),
            dimensions,
        }
    }
}
