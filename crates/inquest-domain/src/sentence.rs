//! Sentence module - segmented text spans with linguistic tags

use serde::{Deserialize, Serialize};

/// Linguistic tags attached to a sentence by the tagger
///
/// These are the structural signals the claim detector weighs. They are
/// derived once at segmentation time and never recomputed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SentenceTags {
    /// Whether a subject-like token was found before the first verb
    pub has_subject: bool,

    /// Whether a finite verb was found
    pub has_finite_verb: bool,

    /// Whether the sentence is a question
    pub is_question: bool,

    /// Number of hedging markers ("may", "might", "could", ...)
    pub hedge_count: usize,

    /// Number of strong assertion markers ("shows", "causes", ...)
    pub assertive_count: usize,

    /// Whether the sentence contains numeric content
    pub has_numeric: bool,
}

impl SentenceTags {
    /// Whether the sentence has declarative structure (subject + finite
    /// verb, not a question)
    pub fn is_declarative(&self) -> bool {
        self.has_subject && self.has_finite_verb && !self.is_question
    }
}

/// A sentence span within one source document
///
/// Immutable and scoped to the document it was segmented from. The
/// character offset allows evidence back-reference into the raw text,
/// and `index` preserves document order, which the evidence matcher
/// relies on for deterministic tie-breaking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    /// Zero-based position in document order
    pub index: usize,

    /// Character offset of the sentence start in the source text
    pub offset: usize,

    /// The sentence text, trimmed
    pub text: String,

    /// Linguistic tags
    pub tags: SentenceTags,
}

impl Sentence {
    /// Number of whitespace-separated words
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentence(tags: SentenceTags) -> Sentence {
        Sentence {
            index: 0,
            offset: 0,
            text: "Example sentence.".to_string(),
            tags,
        }
    }

    #[test]
    fn test_declarative_requires_subject_and_verb() {
        let tags = SentenceTags {
            has_subject: true,
            has_finite_verb: true,
            ..Default::default()
        };
        assert!(sentence(tags).tags.is_declarative());
    }

    #[test]
    fn test_question_is_not_declarative() {
        let tags = SentenceTags {
            has_subject: true,
            has_finite_verb: true,
            is_question: true,
            ..Default::default()
        };
        assert!(!sentence(tags).tags.is_declarative());
    }

    #[test]
    fn test_word_count() {
        let s = Sentence {
            index: 0,
            offset: 0,
            text: "Three word sentence".to_string(),
            tags: SentenceTags::default(),
        };
        assert_eq!(s.word_count(), 3);
    }
}
