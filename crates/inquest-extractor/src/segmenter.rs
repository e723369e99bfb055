//! Sentence segmentation and linguistic tagging
//!
//! Splits raw text on sentence boundaries, preserving document order and
//! character offsets for evidence back-reference, and annotates each
//! sentence with the structural signals the claim detector weighs.
//!
//! Tagging is lexicon-driven and fully deterministic: no models, no
//! randomness, identical text always yields identical tags.

use crate::error::ExtractionError;
use inquest_domain::{Sentence, SentenceTags};

/// Hedging markers that weaken an assertion
const HEDGE_MARKERS: &[&str] = &[
    "may",
    "might",
    "could",
    "possibly",
    "perhaps",
    "arguably",
    "unclear",
    "uncertain",
];

/// Strong assertion markers ("is", "causes", "shows that", ...)
const ASSERTIVE_MARKERS: &[&str] = &[
    "is",
    "are",
    "was",
    "were",
    "shows",
    "show",
    "showed",
    "shown",
    "demonstrates",
    "demonstrate",
    "demonstrated",
    "indicates",
    "indicate",
    "indicated",
    "causes",
    "cause",
    "caused",
    "confirms",
    "confirm",
    "confirmed",
    "finds",
    "find",
    "found",
    "reveals",
    "reveal",
    "revealed",
    "proves",
    "prove",
    "proved",
    "establishes",
    "establish",
    "established",
    "reports",
    "report",
    "reported",
];

/// Auxiliary and modal verbs, always finite
const AUXILIARY_VERBS: &[&str] = &[
    "is", "are", "was", "were", "be", "been", "being", "has", "have", "had", "does", "do", "did",
    "will", "would", "can", "could", "may", "might", "must", "shall", "should",
];

/// Common content-verb forms seen in research prose
const COMMON_VERBS: &[&str] = &[
    "improves",
    "improve",
    "enables",
    "enable",
    "allows",
    "allow",
    "increases",
    "increase",
    "reduces",
    "reduce",
    "suggests",
    "suggest",
    "provides",
    "provide",
    "supports",
    "support",
    "leads",
    "lead",
    "led",
    "results",
    "result",
    "remains",
    "remain",
    "uses",
    "use",
    "offers",
    "offer",
    "requires",
    "require",
    "achieves",
    "achieve",
    "contains",
    "contain",
    "outperforms",
    "outperform",
    "exceeds",
    "exceed",
];

/// Sentence segmenter and linguistic tagger
///
/// Sentences shorter than the configured minimum word count are dropped;
/// indices are assigned over the retained sentences in document order.
#[derive(Debug, Clone)]
pub struct SentenceSegmenter {
    min_sentence_words: usize,
}

impl SentenceSegmenter {
    /// Create a segmenter that drops sentences under `min_sentence_words`
    pub fn new(min_sentence_words: usize) -> Self {
        Self { min_sentence_words }
    }

    /// Split text into tagged sentences
    ///
    /// # Errors
    ///
    /// - [`ExtractionError::EmptyInput`] for empty/whitespace-only text
    /// - [`ExtractionError::NoSentences`] if nothing survives the minimum
    ///   word filter
    pub fn segment(&self, text: &str) -> Result<Vec<Sentence>, ExtractionError> {
        if text.trim().is_empty() {
            return Err(ExtractionError::EmptyInput);
        }

        let mut spans: Vec<(usize, &str)> = Vec::new();
        let mut start = 0usize;
        let chars: Vec<(usize, char)> = text.char_indices().collect();

        for (i, (pos, c)) in chars.iter().enumerate() {
            if !matches!(c, '.' | '!' | '?') {
                continue;
            }
            let followed_by_break = chars
                .get(i + 1)
                .map(|(_, next)| next.is_whitespace())
                .unwrap_or(true);
            if followed_by_break {
                let end = pos + c.len_utf8();
                Self::push_span(text, start, end, &mut spans);
                start = end;
            }
        }
        // Trailing fragment without a terminator still counts
        if start < text.len() {
            Self::push_span(text, start, text.len(), &mut spans);
        }

        let sentences: Vec<Sentence> = spans
            .into_iter()
            .filter(|(_, span)| span.split_whitespace().count() >= self.min_sentence_words)
            .enumerate()
            .map(|(index, (offset, span))| Sentence {
                index,
                offset,
                text: span.to_string(),
                tags: tag(span),
            })
            .collect();

        if sentences.is_empty() {
            return Err(ExtractionError::NoSentences);
        }

        tracing::debug!("Segmented text into {} sentences", sentences.len());
        Ok(sentences)
    }

    fn push_span<'t>(text: &'t str, start: usize, end: usize, spans: &mut Vec<(usize, &'t str)>) {
        let raw = &text[start..end];
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return;
        }
        let offset = start + (raw.len() - raw.trim_start().len());
        spans.push((offset, trimmed));
    }
}

/// Annotate one sentence with structural signals
pub(crate) fn tag(text: &str) -> SentenceTags {
    let tokens: Vec<String> = text
        .split_whitespace()
        .map(|t| {
            t.trim_matches(|c: char| !c.is_alphanumeric() && c != '%')
                .to_lowercase()
        })
        .filter(|t| !t.is_empty())
        .collect();

    let first_verb = tokens.iter().position(|t| is_finite_verb(t));

    SentenceTags {
        has_subject: first_verb.map(|i| i > 0).unwrap_or(false),
        has_finite_verb: first_verb.is_some(),
        is_question: text.trim_end().ends_with('?'),
        hedge_count: tokens
            .iter()
            .filter(|t| HEDGE_MARKERS.contains(&t.as_str()))
            .count(),
        assertive_count: tokens
            .iter()
            .filter(|t| ASSERTIVE_MARKERS.contains(&t.as_str()))
            .count(),
        has_numeric: tokens
            .iter()
            .any(|t| t.contains('%') || t.chars().any(|c| c.is_ascii_digit())),
    }
}

fn is_finite_verb(token: &str) -> bool {
    AUXILIARY_VERBS.contains(&token)
        || ASSERTIVE_MARKERS.contains(&token)
        || COMMON_VERBS.contains(&token)
        || (token.len() > 4 && token.ends_with("ed"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segmenter() -> SentenceSegmenter {
        SentenceSegmenter::new(5)
    }

    #[test]
    fn test_empty_input_rejected() {
        assert!(matches!(
            segmenter().segment(""),
            Err(ExtractionError::EmptyInput)
        ));
        assert!(matches!(
            segmenter().segment("  \n\t "),
            Err(ExtractionError::EmptyInput)
        ));
    }

    #[test]
    fn test_short_fragments_filtered() {
        assert!(matches!(
            segmenter().segment("Too short. Me too."),
            Err(ExtractionError::NoSentences)
        ));
    }

    #[test]
    fn test_splits_and_preserves_order() {
        let text = "AI agents may improve efficiency. \
                    Recent benchmarks show a 20% efficiency gain in agent-based systems.";
        let sentences = segmenter().segment(text).unwrap();
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0].index, 0);
        assert!(sentences[0].text.starts_with("AI agents"));
        assert!(sentences[1].text.starts_with("Recent benchmarks"));
    }

    #[test]
    fn test_offsets_point_into_source() {
        let text = "First sentence with enough words here. Second sentence with enough words too.";
        let sentences = segmenter().segment(text).unwrap();
        for s in &sentences {
            assert!(text[s.offset..].starts_with(&s.text));
        }
    }

    #[test]
    fn test_abbreviation_like_dot_not_split_mid_token() {
        // "3.5" has no whitespace after the dot, so it must not split
        let text = "The model scored 3.5 points on the benchmark overall.";
        let sentences = segmenter().segment(text).unwrap();
        assert_eq!(sentences.len(), 1);
    }

    #[test]
    fn test_trailing_fragment_kept() {
        let text = "This sentence has no terminator but plenty of words";
        let sentences = segmenter().segment(text).unwrap();
        assert_eq!(sentences.len(), 1);
    }

    #[test]
    fn test_tag_declarative_with_assertion_and_numeric() {
        let tags = tag("Recent benchmarks show a 20% efficiency gain in agent-based systems.");
        assert!(tags.has_subject);
        assert!(tags.has_finite_verb);
        assert!(!tags.is_question);
        assert_eq!(tags.hedge_count, 0);
        assert!(tags.assertive_count >= 1);
        assert!(tags.has_numeric);
    }

    #[test]
    fn test_tag_hedged_sentence() {
        let tags = tag("AI agents may improve efficiency.");
        assert!(tags.has_subject);
        assert!(tags.has_finite_verb);
        assert_eq!(tags.hedge_count, 1);
        assert_eq!(tags.assertive_count, 0);
    }

    #[test]
    fn test_tag_question() {
        let tags = tag("Could agents ever replace manual research workflows?");
        assert!(tags.is_question);
    }

    #[test]
    fn test_tag_deterministic() {
        let text = "The study demonstrates a clear causal link.";
        assert_eq!(tag(text), tag(text));
    }
}
