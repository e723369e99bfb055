//! Inquest Embedding Layer
//!
//! Text-to-vector conversion for the evidence matcher. This crate provides
//! a local, deterministic embedder so extraction is reproducible without
//! network dependencies or model files; a real model can be swapped in
//! behind the same [`Embedder`] trait.
//!
//! # Architecture
//!
//! - **HashEmbedder**: feature-hashed bag-of-tokens embeddings
//! - **EmbeddingCache**: per-extraction cache keyed by sentence index
//!
//! # Examples
//!
//! ```
//! use inquest_embed::{cosine_similarity, HashEmbedder};
//! use inquest_domain::traits::Embedder;
//!
//! let model = HashEmbedder::new(256);
//! let a = model.embed("benchmarks show an efficiency gain").unwrap();
//! let b = model.embed("recent benchmarks show gains in efficiency").unwrap();
//! let c = model.embed("entirely unrelated sentence about weather").unwrap();
//! assert!(cosine_similarity(&a, &b) > cosine_similarity(&a, &c));
//! ```

#![warn(missing_docs)]

pub mod cache;

use inquest_domain::traits::Embedder;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use thiserror::Error;

pub use cache::EmbeddingCache;

/// Errors that can occur during embedding generation
#[derive(Error, Debug)]
pub enum EmbeddingError {
    /// Invalid input text
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Deterministic feature-hashing embedder
///
/// Each lowercase alphanumeric token is hashed into one of `dimension`
/// buckets with a hash-derived sign, then the vector is normalized to unit
/// length. The embeddings are:
///
/// - **Deterministic**: same text always produces the same embedding
/// - **Normalized**: unit length, suitable for cosine similarity
/// - **Overlap-sensitive**: sentences sharing vocabulary score higher than
///   unrelated ones
pub struct HashEmbedder {
    dimension: usize,
}

/// Default embedding dimension
pub const DEFAULT_DIMENSION: usize = 256;

impl HashEmbedder {
    /// Create a new embedder with the given dimension
    pub fn new(dimension: usize) -> Self {
        Self { dimension }
    }

    fn hash_token(token: &str, seed: u64) -> u64 {
        let mut hasher = DefaultHasher::new();
        token.hash(&mut hasher);
        seed.hash(&mut hasher);
        hasher.finish()
    }

    fn tokens(text: &str) -> impl Iterator<Item = String> + '_ {
        text.split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
            .map(|t| t.to_lowercase())
    }
}

impl Default for HashEmbedder {
    fn default() -> Self {
        Self::new(DEFAULT_DIMENSION)
    }
}

impl Embedder for HashEmbedder {
    type Error = EmbeddingError;

    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        if text.trim().is_empty() {
            return Err(EmbeddingError::InvalidInput(
                "Empty text cannot be embedded".to_string(),
            ));
        }

        let mut embedding = vec![0.0f32; self.dimension];
        let mut token_count = 0usize;

        for token in Self::tokens(text) {
            let bucket = (Self::hash_token(&token, 0) as usize) % self.dimension;
            let sign = if Self::hash_token(&token, 1) & 1 == 0 {
                1.0
            } else {
                -1.0
            };
            embedding[bucket] += sign;
            token_count += 1;
        }

        if token_count == 0 {
            return Err(EmbeddingError::InvalidInput(
                "Text contains no embeddable tokens".to_string(),
            ));
        }

        // Normalize to unit length for cosine similarity
        let magnitude: f32 = embedding.iter().map(|x| x * x).sum::<f32>().sqrt();
        if magnitude > 0.0 {
            for value in &mut embedding {
                *value /= magnitude;
            }
        }

        Ok(embedding)
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}

/// Calculate cosine similarity between two embedding vectors
///
/// Returns a value in [-1, 1]; zero-magnitude vectors yield 0.0.
///
/// # Panics
///
/// Panics if vectors have different lengths
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    assert_eq!(a.len(), b.len(), "Vectors must have same length");

    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let magnitude_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let magnitude_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if magnitude_a == 0.0 || magnitude_b == 0.0 {
        return 0.0;
    }

    dot_product / (magnitude_a * magnitude_b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedding_deterministic() {
        let model = HashEmbedder::new(256);
        let text = "Recent benchmarks show a 20% efficiency gain";
        assert_eq!(model.embed(text).unwrap(), model.embed(text).unwrap());
    }

    #[test]
    fn test_embedding_dimension() {
        let model = HashEmbedder::new(128);
        assert_eq!(model.embed("test").unwrap().len(), 128);
        assert_eq!(model.dimension(), 128);
    }

    #[test]
    fn test_embedding_normalized() {
        let model = HashEmbedder::new(256);
        let embedding = model.embed("test text").unwrap();
        let magnitude: f32 = embedding.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((magnitude - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_empty_text_rejected() {
        let model = HashEmbedder::default();
        assert!(model.embed("").is_err());
        assert!(model.embed("   ").is_err());
    }

    #[test]
    fn test_identical_text_has_unit_similarity() {
        let model = HashEmbedder::default();
        let a = model.embed("the same sentence").unwrap();
        let b = model.embed("the same sentence").unwrap();
        assert!((cosine_similarity(&a, &b) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_overlap_beats_unrelated() {
        let model = HashEmbedder::default();
        let claim = model
            .embed("agent based systems improve efficiency in benchmarks")
            .unwrap();
        let related = model
            .embed("benchmarks of agent based systems report efficiency gains")
            .unwrap();
        let unrelated = model
            .embed("the weather in lisbon was sunny yesterday")
            .unwrap();
        assert!(cosine_similarity(&claim, &related) > cosine_similarity(&claim, &unrelated));
    }

    #[test]
    fn test_case_insensitive_tokens() {
        let model = HashEmbedder::default();
        let a = model.embed("Benchmarks Show Gains").unwrap();
        let b = model.embed("benchmarks show gains").unwrap();
        assert_eq!(a, b);
    }
}
