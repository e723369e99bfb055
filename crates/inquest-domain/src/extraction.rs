//! Extraction result and aggregate confidence computation

use crate::{Claim, Evidence, Score};
use serde::{Deserialize, Serialize};

/// A claim paired with its best evidence match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimEvidence {
    /// The detected claim
    pub claim: Claim,

    /// Best supporting evidence, or explicit absence
    pub evidence: Evidence,
}

impl ClaimEvidence {
    /// Combined score for this pair
    ///
    /// `detector_confidence * similarity` when evidence was found, or
    /// `detector_confidence * unsupported_factor` when it was not. The
    /// formula is fixed for scenario reproducibility; only the factor is
    /// tunable.
    pub fn pair_score(&self, unsupported_factor: f64) -> f64 {
        let weight = match &self.evidence {
            Evidence::Supported { similarity, .. } => similarity.value(),
            Evidence::Unsupported => unsupported_factor,
        };
        self.claim.confidence.value() * weight
    }
}

/// The result of running the extraction pipeline over one document
///
/// Owns every `Claim` and `Evidence` it contains; pairs are kept in
/// document order of their claims.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Claim/evidence pairs in document order
    pub pairs: Vec<ClaimEvidence>,

    /// Number of usable sentences the document segmented into
    pub sentence_count: usize,

    /// Mean pair score over all claims, or zero with no claims
    pub aggregate: Score,
}

impl ExtractionResult {
    /// Build a result from pairs, computing the aggregate confidence
    ///
    /// # Examples
    ///
    /// ```
    /// use inquest_domain::extraction::ExtractionResult;
    ///
    /// let result = ExtractionResult::from_pairs(vec![], 4, 0.5);
    /// assert_eq!(result.aggregate.value(), 0.0);
    /// ```
    pub fn from_pairs(
        pairs: Vec<ClaimEvidence>,
        sentence_count: usize,
        unsupported_factor: f64,
    ) -> Self {
        let aggregate = if pairs.is_empty() {
            Score::ZERO
        } else {
            let sum: f64 = pairs.iter().map(|p| p.pair_score(unsupported_factor)).sum();
            Score::clamped(sum / pairs.len() as f64)
        };
        Self {
            pairs,
            sentence_count,
            aggregate,
        }
    }

    /// A result with no pairs and a zero aggregate
    ///
    /// Stands in for documents the pipeline yielded nothing usable from.
    pub fn empty(sentence_count: usize) -> Self {
        Self {
            pairs: Vec::new(),
            sentence_count,
            aggregate: Score::ZERO,
        }
    }

    /// Number of claims detected
    pub fn claim_count(&self) -> usize {
        self.pairs.len()
    }

    /// Number of claims with supporting evidence
    pub fn supported_count(&self) -> usize {
        self.pairs.iter().filter(|p| p.evidence.is_supported()).count()
    }
}
