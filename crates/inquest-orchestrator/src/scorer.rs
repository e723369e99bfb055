//! Quality scoring of stage output
//!
//! Wraps the extraction pipeline and blends its aggregate confidence with
//! stage-appropriate signals: source coverage for Research/Analysis, length
//! adequacy for Writer. Scoring never fails; text the pipeline cannot
//! extract from simply contributes zero confidence.

use crate::config::OrchestratorConfig;
use inquest_domain::traits::Embedder;
use inquest_domain::{ExtractionResult, Score, Stage};
use inquest_extractor::{ExtractionError, ExtractionPipeline, ExtractorConfig};
use std::collections::HashSet;
use tracing::{debug, warn};

/// Stage-aware quality scorer
///
/// Deterministic: the same stage, output, and configuration always produce
/// the same score, so retries are judged on a fixed yardstick.
pub struct QualityScorer<E: Embedder> {
    pipeline: ExtractionPipeline<E>,
    confidence_weight: f64,
    coverage_weight: f64,
    writer_confidence_weight: f64,
    length_weight: f64,
    min_words: usize,
}

impl<E: Embedder> QualityScorer<E>
where
    E::Error: std::fmt::Display,
{
    /// Create a scorer from an embedder and the two configurations
    ///
    /// # Errors
    ///
    /// Returns [`ExtractionError::Config`] if the extractor configuration
    /// is invalid.
    pub fn new(
        embedder: E,
        extractor_config: ExtractorConfig,
        config: &OrchestratorConfig,
    ) -> Result<Self, ExtractionError> {
        Ok(Self {
            pipeline: ExtractionPipeline::new(embedder, extractor_config)?,
            confidence_weight: config.confidence_weight,
            coverage_weight: config.coverage_weight,
            writer_confidence_weight: config.writer_confidence_weight,
            length_weight: config.length_weight,
            min_words: config.min_words,
        })
    }

    /// Score one stage output
    ///
    /// Returns the blended score and, when extraction succeeded, the
    /// extraction result behind it.
    pub fn score(
        &self,
        stage: Stage,
        output: &str,
        max_sources: usize,
    ) -> (Score, Option<ExtractionResult>) {
        let extraction = self.extract(output);
        let confidence = extraction
            .as_ref()
            .map(|e| e.aggregate.value())
            .unwrap_or(0.0);

        let score = match stage {
            Stage::Research | Stage::Analysis => {
                let sources = count_sources(output);
                let coverage = (sources as f64 / max_sources as f64).min(1.0);
                debug!(
                    stage = %stage,
                    confidence,
                    sources,
                    coverage,
                    "scored intermediate stage output"
                );
                self.confidence_weight * confidence + self.coverage_weight * coverage
            }
            Stage::Writer => {
                let words = output.split_whitespace().count();
                let length = (words as f64 / self.min_words as f64).min(1.0);
                debug!(
                    stage = %stage,
                    confidence,
                    words,
                    length,
                    "scored writer output"
                );
                self.writer_confidence_weight * confidence + self.length_weight * length
            }
        };

        (Score::clamped(score), extraction)
    }

    /// Run extraction alone, absorbing pipeline errors
    pub fn extract(&self, text: &str) -> Option<ExtractionResult> {
        match self.pipeline.extract(text) {
            Ok(result) => Some(result),
            Err(e) => {
                warn!("extraction yielded nothing usable: {}", e);
                None
            }
        }
    }
}

/// Count distinct URLs referenced in a piece of text
///
/// A source is any whitespace-delimited token starting with `http://` or
/// `https://`, with trailing punctuation trimmed. Duplicates count once.
pub fn count_sources(text: &str) -> usize {
    let mut seen = HashSet::new();
    for token in text.split_whitespace() {
        if token.starts_with("http://") || token.starts_with("https://") {
            let url = token.trim_end_matches(|c: char| matches!(c, '.' | ',' | ')' | ';' | ':'));
            seen.insert(url);
        }
    }
    seen.len()
}
