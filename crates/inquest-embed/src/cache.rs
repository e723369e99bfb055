//! Per-extraction embedding cache
//!
//! Embedding computation is potentially expensive and, with a real model,
//! potentially non-deterministic across invocations. Caching per sentence
//! index guarantees repeated similarity comparisons against the same
//! sentence are consistent within one extraction call.

use inquest_domain::traits::Embedder;
use std::cell::RefCell;
use std::collections::HashMap;

/// Cache of sentence embeddings for one extraction call
///
/// Keys are sentence indices, which are unique within one document. The
/// cache is single-threaded by design; each extraction call owns its own.
pub struct EmbeddingCache<'a, E: Embedder> {
    embedder: &'a E,
    entries: RefCell<HashMap<usize, Vec<f32>>>,
}

impl<'a, E: Embedder> EmbeddingCache<'a, E> {
    /// Create an empty cache over the given embedder
    pub fn new(embedder: &'a E) -> Self {
        Self {
            embedder,
            entries: RefCell::new(HashMap::new()),
        }
    }

    /// Embed a sentence, reusing a cached vector when available
    pub fn embed(&self, sentence_index: usize, text: &str) -> Result<Vec<f32>, E::Error> {
        if let Some(cached) = self.entries.borrow().get(&sentence_index) {
            return Ok(cached.clone());
        }
        let embedding = self.embedder.embed(text)?;
        self.entries
            .borrow_mut()
            .insert(sentence_index, embedding.clone());
        Ok(embedding)
    }

    /// Number of cached embeddings
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Whether the cache is empty
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HashEmbedder;

    #[test]
    fn test_cache_returns_same_vector() {
        let model = HashEmbedder::new(64);
        let cache = EmbeddingCache::new(&model);

        let first = cache.embed(0, "a sentence to embed").unwrap();
        let second = cache.embed(0, "a sentence to embed").unwrap();
        assert_eq!(first, second);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_cache_hit_ignores_text_changes() {
        // Sentence indices are unique per document, so a hit on the same
        // index must return the originally cached vector.
        let model = HashEmbedder::new(64);
        let cache = EmbeddingCache::new(&model);

        let first = cache.embed(3, "original text").unwrap();
        let second = cache.embed(3, "different text").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_distinct_indices_cached_separately() {
        let model = HashEmbedder::new(64);
        let cache = EmbeddingCache::new(&model);

        cache.embed(0, "first sentence").unwrap();
        cache.embed(1, "second sentence").unwrap();
        assert_eq!(cache.len(), 2);
    }
}
