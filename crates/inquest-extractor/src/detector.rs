//! Claim detection over tagged sentences

use crate::config::ExtractorConfig;
use inquest_domain::{Claim, Score, Sentence};

/// Scores sentences as factual-assertion candidates
///
/// Confidence is a weighted heuristic: declarative structure contributes a
/// positive base, assertion markers and numeric content add bonuses, and
/// hedging/questions apply multiplicative penalties, capped at 1.0. The
/// computation is deterministic for identical text and configuration.
#[derive(Debug, Clone)]
pub struct ClaimDetector {
    threshold: f64,
    declarative_base: f64,
    assertive_bonus: f64,
    numeric_bonus: f64,
    hedge_penalty: f64,
    question_penalty: f64,
}

impl ClaimDetector {
    /// Create a detector from pipeline configuration
    pub fn new(config: &ExtractorConfig) -> Self {
        Self {
            threshold: config.claim_threshold,
            declarative_base: config.declarative_base,
            assertive_bonus: config.assertive_bonus,
            numeric_bonus: config.numeric_bonus,
            hedge_penalty: config.hedge_penalty,
            question_penalty: config.question_penalty,
        }
    }

    /// Compute the assertion confidence for one sentence
    pub fn confidence(&self, sentence: &Sentence) -> Score {
        let tags = &sentence.tags;
        let mut value = 0.0;

        if tags.is_declarative() {
            value += self.declarative_base;
        }
        if tags.assertive_count > 0 {
            value += self.assertive_bonus;
        }
        if tags.has_numeric {
            value += self.numeric_bonus;
        }

        // Penalties are multiplicative so they can only lower the score
        if tags.is_question {
            value *= self.question_penalty;
        }
        if tags.hedge_count > 0 {
            value *= self.hedge_penalty.powi(tags.hedge_count as i32);
        }

        Score::clamped(value)
    }

    /// Detect claims, preserving source sentence order
    ///
    /// A sentence becomes a claim only if its confidence exceeds the
    /// configured threshold.
    pub fn detect(&self, sentences: &[Sentence]) -> Vec<Claim> {
        sentences
            .iter()
            .filter_map(|sentence| {
                let confidence = self.confidence(sentence);
                if confidence.value() > self.threshold {
                    Some(Claim {
                        sentence_index: sentence.index,
                        text: sentence.text.clone(),
                        confidence,
                    })
                } else {
                    None
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segmenter::tag;

    fn detector() -> ClaimDetector {
        ClaimDetector::new(&ExtractorConfig::default())
    }

    fn sentence(index: usize, text: &str) -> Sentence {
        Sentence {
            index,
            offset: 0,
            text: text.to_string(),
            tags: tag(text),
        }
    }

    #[test]
    fn test_declarative_assertion_accepted() {
        let s = sentence(0, "Recent benchmarks show a 20% efficiency gain in agent-based systems.");
        let confidence = detector().confidence(&s);
        assert!(confidence.value() > 0.5, "got {}", confidence);
    }

    #[test]
    fn test_hedged_sentence_scores_low() {
        let s = sentence(0, "AI agents may improve efficiency of research teams.");
        let confidence = detector().confidence(&s);
        assert!(confidence.value() <= 0.5, "got {}", confidence);
    }

    #[test]
    fn test_hedge_never_increases_confidence() {
        let plain = sentence(0, "Agent systems improve efficiency in production settings.");
        let hedged = sentence(0, "Agent systems might improve efficiency in production settings.");
        let d = detector();
        assert!(d.confidence(&hedged) < d.confidence(&plain));
    }

    #[test]
    fn test_double_hedge_compounds_penalty() {
        let once = sentence(0, "The approach might improve the accuracy of results.");
        let twice = sentence(0, "The approach might possibly improve the accuracy of results.");
        let d = detector();
        assert!(d.confidence(&twice) < d.confidence(&once));
    }

    #[test]
    fn test_question_scores_low() {
        let s = sentence(0, "Does the benchmark show a 20% efficiency gain overall?");
        let confidence = detector().confidence(&s);
        assert!(confidence.value() < 0.5, "got {}", confidence);
    }

    #[test]
    fn test_detect_preserves_order_and_indices() {
        let sentences = vec![
            sentence(0, "The first study demonstrates a strong causal effect."),
            sentence(1, "Results may vary between deployments and workloads."),
            sentence(2, "The second study confirms a 15% latency reduction."),
        ];
        let claims = detector().detect(&sentences);
        assert_eq!(claims.len(), 2);
        assert_eq!(claims[0].sentence_index, 0);
        assert_eq!(claims[1].sentence_index, 2);
    }

    #[test]
    fn test_detection_deterministic() {
        let sentences = vec![sentence(0, "The report establishes a clear trend in adoption.")];
        let d = detector();
        assert_eq!(d.detect(&sentences), d.detect(&sentences));
    }
}
