//! Configuration for the extraction pipeline

use serde::{Deserialize, Serialize};

/// Configuration for the extraction pipeline
///
/// Heuristic weights are tunable configuration, not fixed contracts; the
/// defaults below are what the scenario tests assume. The aggregate
/// confidence formula itself is fixed in the domain layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Minimum detector confidence for a sentence to become a claim
    pub claim_threshold: f64,

    /// Minimum cosine similarity for a sentence to count as evidence
    pub similarity_floor: f64,

    /// Sentences shorter than this many words are dropped at segmentation
    pub min_sentence_words: usize,

    /// Base confidence for declarative structure (finite verb + subject)
    pub declarative_base: f64,

    /// Bonus for strong assertion markers ("is", "causes", "shows that")
    pub assertive_bonus: f64,

    /// Bonus for numeric content
    pub numeric_bonus: f64,

    /// Multiplicative penalty applied per hedging marker; must stay below
    /// 1.0 so a hedge can never raise confidence
    pub hedge_penalty: f64,

    /// Multiplicative penalty for questions
    pub question_penalty: f64,

    /// Similarity stand-in used in pair scores when no evidence was found
    pub unsupported_factor: f64,
}

impl Default for ExtractorConfig {
    /// Default configuration with balanced settings
    fn default() -> Self {
        Self {
            claim_threshold: 0.5,
            similarity_floor: 0.4,
            min_sentence_words: 5,
            declarative_base: 0.55,
            assertive_bonus: 0.2,
            numeric_bonus: 0.15,
            hedge_penalty: 0.5,
            question_penalty: 0.3,
            unsupported_factor: 0.5,
        }
    }
}

impl ExtractorConfig {
    /// Strict preset: higher bars for claims and evidence
    pub fn strict() -> Self {
        Self {
            claim_threshold: 0.65,
            similarity_floor: 0.5,
            ..Self::default()
        }
    }

    /// Lenient preset: admit weaker claims and looser evidence
    pub fn lenient() -> Self {
        Self {
            claim_threshold: 0.4,
            similarity_floor: 0.3,
            ..Self::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        let unit_bounded = [
            ("claim_threshold", self.claim_threshold),
            ("similarity_floor", self.similarity_floor),
            ("declarative_base", self.declarative_base),
            ("assertive_bonus", self.assertive_bonus),
            ("numeric_bonus", self.numeric_bonus),
            ("question_penalty", self.question_penalty),
            ("unsupported_factor", self.unsupported_factor),
        ];
        for (name, value) in unit_bounded {
            if !(0.0..=1.0).contains(&value) {
                return Err(format!("{} must be in [0, 1], got {}", name, value));
            }
        }
        if !(0.0..1.0).contains(&self.hedge_penalty) {
            return Err(format!(
                "hedge_penalty must be in [0, 1), got {}",
                self.hedge_penalty
            ));
        }
        if self.min_sentence_words == 0 {
            return Err("min_sentence_words must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}
