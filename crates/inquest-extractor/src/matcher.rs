//! Evidence matching via semantic similarity

use crate::config::ExtractorConfig;
use crate::error::ExtractionError;
use inquest_domain::traits::Embedder;
use inquest_domain::{Claim, Evidence, Score, Sentence};
use inquest_embed::{cosine_similarity, EmbeddingCache};

/// Finds the best supporting sentence for a claim
///
/// Owns only the matching, threshold, and tie-break logic; embedding and
/// cosine similarity are delegated to the embedding collaborator. Negative
/// cosine values clamp to zero so scores stay in [0, 1].
#[derive(Debug, Clone)]
pub struct EvidenceMatcher {
    similarity_floor: f64,
}

impl EvidenceMatcher {
    /// Create a matcher from pipeline configuration
    pub fn new(config: &ExtractorConfig) -> Self {
        Self {
            similarity_floor: config.similarity_floor,
        }
    }

    /// Find the best evidence for a claim within its document
    ///
    /// Scans every sentence except the claim's own, in document order.
    /// Equal maximal similarities resolve to the earliest sentence, which
    /// makes the result reproducible. Returns [`Evidence::Unsupported`]
    /// when nothing clears the similarity floor.
    pub fn best_match<E: Embedder>(
        &self,
        claim: &Claim,
        sentences: &[Sentence],
        cache: &EmbeddingCache<'_, E>,
    ) -> Result<Evidence, ExtractionError>
    where
        E::Error: std::fmt::Display,
    {
        let claim_embedding = cache
            .embed(claim.sentence_index, &claim.text)
            .map_err(|e| ExtractionError::Embedding(e.to_string()))?;

        let mut best: Option<(usize, f64)> = None;
        for sentence in sentences {
            if sentence.index == claim.sentence_index {
                continue;
            }
            let embedding = cache
                .embed(sentence.index, &sentence.text)
                .map_err(|e| ExtractionError::Embedding(e.to_string()))?;
            let similarity = f64::from(cosine_similarity(&claim_embedding, &embedding)).max(0.0);

            // Strict > keeps the earliest sentence on ties
            match best {
                Some((_, current)) if similarity <= current => {}
                _ => best = Some((sentence.index, similarity)),
            }
        }

        match best {
            Some((index, similarity)) if similarity > self.similarity_floor => {
                let text = sentences
                    .iter()
                    .find(|s| s.index == index)
                    .map(|s| s.text.clone())
                    .unwrap_or_default();
                Ok(Evidence::Supported {
                    sentence_index: index,
                    text,
                    similarity: Score::clamped(similarity),
                })
            }
            _ => Ok(Evidence::Unsupported),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segmenter::tag;
    use inquest_embed::HashEmbedder;

    fn sentence(index: usize, text: &str) -> Sentence {
        Sentence {
            index,
            offset: 0,
            text: text.to_string(),
            tags: tag(text),
        }
    }

    fn claim_from(s: &Sentence) -> Claim {
        Claim {
            sentence_index: s.index,
            text: s.text.clone(),
            confidence: Score::new(0.9),
        }
    }

    #[test]
    fn test_excludes_claim_sentence_itself() {
        let sentences = vec![
            sentence(0, "Benchmarks show a clear efficiency gain in systems."),
            sentence(1, "The weather was pleasant for the entire week."),
        ];
        let claim = claim_from(&sentences[0]);
        let embedder = HashEmbedder::default();
        let cache = EmbeddingCache::new(&embedder);
        let matcher = EvidenceMatcher::new(&ExtractorConfig::default());

        // The only other sentence is unrelated; self-match must not win
        let evidence = matcher.best_match(&claim, &sentences, &cache).unwrap();
        assert_eq!(evidence, Evidence::Unsupported);
    }

    #[test]
    fn test_finds_overlapping_evidence() {
        let sentences = vec![
            sentence(0, "Agent benchmarks show large efficiency gains overall."),
            sentence(1, "Independent agent benchmarks report similar efficiency gains overall."),
            sentence(2, "Lisbon enjoyed sunny weather throughout the spring."),
        ];
        let claim = claim_from(&sentences[0]);
        let embedder = HashEmbedder::default();
        let cache = EmbeddingCache::new(&embedder);
        let matcher = EvidenceMatcher::new(&ExtractorConfig::default());

        let evidence = matcher.best_match(&claim, &sentences, &cache).unwrap();
        match evidence {
            Evidence::Supported { sentence_index, similarity, .. } => {
                assert_eq!(sentence_index, 1);
                assert!(similarity.value() > 0.4);
            }
            Evidence::Unsupported => panic!("expected supporting evidence"),
        }
    }

    #[test]
    fn test_tie_breaks_to_earliest_sentence() {
        // Identical candidate sentences embed identically, forcing a tie
        let sentences = vec![
            sentence(0, "Agent benchmarks show large efficiency gains overall."),
            sentence(1, "Benchmarks of agents show large gains in efficiency."),
            sentence(2, "Benchmarks of agents show large gains in efficiency."),
        ];
        let claim = claim_from(&sentences[0]);
        let embedder = HashEmbedder::default();
        let cache = EmbeddingCache::new(&embedder);
        let matcher = EvidenceMatcher::new(&ExtractorConfig::lenient());

        let evidence = matcher.best_match(&claim, &sentences, &cache).unwrap();
        match evidence {
            Evidence::Supported { sentence_index, .. } => assert_eq!(sentence_index, 1),
            Evidence::Unsupported => panic!("expected supporting evidence"),
        }
    }

    #[test]
    fn test_floor_filters_weak_matches() {
        let sentences = vec![
            sentence(0, "Quantum processors achieve record coherence times."),
            sentence(1, "The cafeteria menu changed again this winter."),
        ];
        let claim = claim_from(&sentences[0]);
        let embedder = HashEmbedder::default();
        let cache = EmbeddingCache::new(&embedder);
        let matcher = EvidenceMatcher::new(&ExtractorConfig::default());

        let evidence = matcher.best_match(&claim, &sentences, &cache).unwrap();
        assert_eq!(evidence, Evidence::Unsupported);
    }
}
