//! Extraction pipeline composition

use crate::config::ExtractorConfig;
use crate::detector::ClaimDetector;
use crate::error::ExtractionError;
use crate::matcher::EvidenceMatcher;
use crate::segmenter::SentenceSegmenter;
use inquest_domain::traits::Embedder;
use inquest_domain::{ClaimEvidence, ExtractionResult};
use inquest_embed::EmbeddingCache;
use tracing::{debug, info};

/// The claim-evidence extraction pipeline
///
/// Composes segmentation, claim detection, and evidence matching into one
/// operation: text → ordered (claim, evidence) records plus an aggregate
/// confidence. The pipeline is a pure function over its inputs and
/// configuration; it owns no state between calls, and each call uses its
/// own embedding cache, so identical text always yields identical results.
pub struct ExtractionPipeline<E: Embedder> {
    embedder: E,
    segmenter: SentenceSegmenter,
    detector: ClaimDetector,
    matcher: EvidenceMatcher,
    config: ExtractorConfig,
}

impl<E: Embedder> ExtractionPipeline<E>
where
    E::Error: std::fmt::Display,
{
    /// Create a pipeline, validating the configuration up front
    ///
    /// # Errors
    ///
    /// Returns [`ExtractionError::Config`] for invalid configuration; no
    /// extraction runs with a bad config.
    pub fn new(embedder: E, config: ExtractorConfig) -> Result<Self, ExtractionError> {
        config.validate().map_err(ExtractionError::Config)?;
        Ok(Self {
            segmenter: SentenceSegmenter::new(config.min_sentence_words),
            detector: ClaimDetector::new(&config),
            matcher: EvidenceMatcher::new(&config),
            embedder,
            config,
        })
    }

    /// The active configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract ordered claim/evidence records from text
    ///
    /// # Errors
    ///
    /// - [`ExtractionError::EmptyInput`] for empty/whitespace-only text
    /// - [`ExtractionError::NoSentences`] if segmentation yields nothing
    /// - [`ExtractionError::Embedding`] if the embedding collaborator fails
    pub fn extract(&self, text: &str) -> Result<ExtractionResult, ExtractionError> {
        let sentences = self.segmenter.segment(text)?;
        let claims = self.detector.detect(&sentences);
        debug!(
            "Detected {} claims across {} sentences",
            claims.len(),
            sentences.len()
        );

        let cache = EmbeddingCache::new(&self.embedder);
        let mut pairs = Vec::with_capacity(claims.len());
        for claim in claims {
            let evidence = self.matcher.best_match(&claim, &sentences, &cache)?;
            pairs.push(ClaimEvidence { claim, evidence });
        }

        let result =
            ExtractionResult::from_pairs(pairs, sentences.len(), self.config.unsupported_factor);
        info!(
            "Extraction complete: {} claims, {} supported, aggregate {}",
            result.claim_count(),
            result.supported_count(),
            result.aggregate
        );
        Ok(result)
    }
}
