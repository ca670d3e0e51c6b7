//! Domain Services
//!
//! | Service | Description |
//! |---------|-------------|
//! | [`ranking`] | Cosine similarity and top-K ranking of catalog candidates |

/// Similarity ranking domain service
pub mod ranking;
