//! Claim and evidence modules - the fundamental units of extraction

use crate::Score;
use serde::{Deserialize, Serialize};

/// A factual assertion detected in a document
///
/// Claims are immutable once created and preserve the document order of
/// the sentence they were detected in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    /// Index of the source sentence in its document
    pub sentence_index: usize,

    /// The asserted text span
    pub text: String,

    /// Detector confidence that this sentence asserts a fact
    pub confidence: Score,
}

/// Best supporting evidence for a claim, or explicit absence
///
/// A claim has at most one best evidence match. "No evidence found" is a
/// distinct variant rather than a zero-score stub, so callers can tell
/// "weakly supported" apart from "unsupported".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Evidence {
    /// A supporting sentence was found above the similarity floor
    Supported {
        /// Index of the supporting sentence in its document
        sentence_index: usize,
        /// The supporting text span
        text: String,
        /// Cosine similarity between claim and evidence embeddings
        similarity: Score,
    },

    /// No sentence cleared the similarity floor
    Unsupported,
}

impl Evidence {
    /// Whether supporting evidence was found
    pub fn is_supported(&self) -> bool {
        matches!(self, Evidence::Supported { .. })
    }

    /// The similarity score, if evidence was found
    pub fn similarity(&self) -> Option<Score> {
        match self {
            Evidence::Supported { similarity, .. } => Some(*similarity),
            Evidence::Unsupported => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_evidence() {
        let evidence = Evidence::Supported {
            sentence_index: 2,
            text: "Benchmarks back this up.".to_string(),
            similarity: Score::new(0.8),
        };
        assert!(evidence.is_supported());
        assert_eq!(evidence.similarity(), Some(Score::new(0.8)));
    }

    #[test]
    fn test_unsupported_evidence() {
        let evidence = Evidence::Unsupported;
        assert!(!evidence.is_supported());
        assert_eq!(evidence.similarity(), None);
    }
}
