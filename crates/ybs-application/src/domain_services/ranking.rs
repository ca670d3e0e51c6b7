//! Similarity ranking
//!
//! Scores catalog candidates against a query vector with cosine similarity
//! and returns the best `limit` of them. Pure and synchronous: a scan over a
//! thousand 768-dimensional vectors is cheap enough to run inline.

use std::cmp::Ordering;

use ybs_domain::error::{Error, Result};
use ybs_domain::value_objects::{CatalogEntry, SearchResult};

/// Cosine similarity between two vectors of equal length.
///
/// Returns exactly `0.0` when either vector has zero magnitude or holds a
/// non-finite component.
///
/// # Example
///
/// ```rust
/// use ybs_application::ranking::cosine_similarity;
///
/// let s = cosine_similarity(&[1.0, 0.0], &[1.0, 0.0]).unwrap();
/// assert!((s - 1.0).abs() < 1e-9);
/// assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 0.0]).unwrap(), 0.0);
/// ```
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f64> {
    similarity_with_norm(a, b, norm(a))
}

/// Rank `candidates` against `query` and keep the top `limit`.
///
/// Entries without a vector are skipped. Ties keep their input order. Any
/// candidate whose dimensionality differs from the query fails the whole
/// ranking with [`Error::DimensionMismatch`].
pub fn rank(query: &[f32], candidates: &[CatalogEntry], limit: usize) -> Result<Vec<SearchResult>> {
    // Precompute query norm once
    let query_norm = norm(query);

    let mut scored = Vec::with_capacity(candidates.len());
    for entry in candidates {
        let Some(vector) = entry.embedding.as_deref().filter(|v| !v.is_empty()) else {
            continue;
        };
        scored.push((entry, similarity_with_norm(query, vector, query_norm)?));
    }

    // Vec::sort_by is stable
    scored.sort_by(|a, b| compare_desc(a.1, b.1));
    scored.truncate(limit);

    Ok(scored
        .into_iter()
        .enumerate()
        .map(|(rank, (entry, similarity))| SearchResult {
            id: entry.id.clone(),
            name: entry.name.clone(),
            summary: entry.summary.clone(),
            similarity,
            rank,
        })
        .collect())
}

fn compare_desc(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}

fn norm(v: &[f32]) -> f64 {
    v.iter()
        .map(|x| f64::from(*x) * f64::from(*x))
        .sum::<f64>()
        .sqrt()
}

fn similarity_with_norm(a: &[f32], b: &[f32], norm_a: f64) -> Result<f64> {
    if a.len() != b.len() {
        return Err(Error::dimension_mismatch(a.len(), b.len()));
    }

    let norm_b = norm(b);
    if norm_a == 0.0 || norm_b == 0.0 {
        return Ok(0.0);
    }

    let dot: f64 = a
        .iter()
        .zip(b)
        .map(|(x, y)| f64::from(*x) * f64::from(*y))
        .sum();
    let cosine = dot / (norm_a * norm_b);
    // NaN or infinite components must not outrank real matches
    if !cosine.is_finite() {
        return Ok(0.0);
    }
    Ok(cosine.clamp(-1.0, 1.0))
}
