//! Embedding Provider Implementations
//!
//! Converts query text into dense vectors comparable with the vectors
//! stored on catalog entries.
//!
//! ## Available Providers
//!
//! | Provider | Type | Status |
//! |----------|------|--------|
//! | NullEmbeddingProvider | Testing | Complete |
//! | GeminiEmbeddingProvider | Cloud | Complete |
//!
//! The catalog vectors are produced with Gemini `text-embedding-004`, so
//! production deployments must embed queries with the same model.

pub mod gemini;
pub mod helpers;
pub mod null;

// Re-export for convenience
pub use gemini::GeminiEmbeddingProvider;
pub use helpers::constructor;
pub use null::NullEmbeddingProvider;
