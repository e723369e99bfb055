//! Configuration for the orchestration controller

use inquest_domain::Stage;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the orchestration controller and quality scorer
///
/// Loaded once per process and immutable for a run's lifetime; passed into
/// constructors explicitly, never ambient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrchestratorConfig {
    /// Acceptance threshold for the Research stage
    pub research_threshold: f64,

    /// Acceptance threshold for the Analysis stage
    pub analysis_threshold: f64,

    /// Acceptance threshold for the Writer stage
    pub writer_threshold: f64,

    /// Retries allowed per stage beyond the first attempt
    pub retries_per_stage: u32,

    /// Requested maximum number of sources
    pub max_sources: usize,

    /// Minimum word count expected of the final report
    pub min_words: usize,

    /// Weight of extraction confidence in Research/Analysis scores
    pub confidence_weight: f64,

    /// Weight of source coverage in Research/Analysis scores
    pub coverage_weight: f64,

    /// Weight of extraction confidence in Writer scores
    pub writer_confidence_weight: f64,

    /// Weight of length adequacy in Writer scores
    pub length_weight: f64,

    /// Maximum time for a single stage tool invocation (seconds)
    pub tool_timeout_secs: u64,
}

impl Default for OrchestratorConfig {
    /// Default configuration with balanced settings
    fn default() -> Self {
        Self {
            research_threshold: 0.6,
            analysis_threshold: 0.6,
            writer_threshold: 0.6,
            retries_per_stage: 2,
            max_sources: 5,
            min_words: 100,
            confidence_weight: 0.7,
            coverage_weight: 0.3,
            writer_confidence_weight: 0.6,
            length_weight: 0.4,
            tool_timeout_secs: 120,
        }
    }
}

impl OrchestratorConfig {
    /// Strict preset: higher acceptance bars, longer reports
    pub fn strict() -> Self {
        Self {
            research_threshold: 0.7,
            analysis_threshold: 0.7,
            writer_threshold: 0.7,
            min_words: 200,
            ..Self::default()
        }
    }

    /// Lenient preset: accept weaker output with fewer retries
    pub fn lenient() -> Self {
        Self {
            research_threshold: 0.45,
            analysis_threshold: 0.45,
            writer_threshold: 0.45,
            retries_per_stage: 1,
            ..Self::default()
        }
    }

    /// The acceptance threshold for one stage
    pub fn acceptance_threshold(&self, stage: Stage) -> f64 {
        match stage {
            Stage::Research => self.research_threshold,
            Stage::Analysis => self.analysis_threshold,
            Stage::Writer => self.writer_threshold,
        }
    }

    /// The stage tool deadline as a Duration
    pub fn tool_timeout(&self) -> Duration {
        Duration::from_secs(self.tool_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        let unit_bounded = [
            ("research_threshold", self.research_threshold),
            ("analysis_threshold", self.analysis_threshold),
            ("writer_threshold", self.writer_threshold),
            ("confidence_weight", self.confidence_weight),
            ("coverage_weight", self.coverage_weight),
            ("writer_confidence_weight", self.writer_confidence_weight),
            ("length_weight", self.length_weight),
        ];
        for (name, value) in unit_bounded {
            if !(0.0..=1.0).contains(&value) {
                return Err(format!("{} must be in [0, 1], got {}", name, value));
            }
        }
        if (self.confidence_weight + self.coverage_weight - 1.0).abs() > 1e-9 {
            return Err("confidence_weight and coverage_weight must sum to 1.0".to_string());
        }
        if (self.writer_confidence_weight + self.length_weight - 1.0).abs() > 1e-9 {
            return Err("writer_confidence_weight and length_weight must sum to 1.0".to_string());
        }
        if self.max_sources == 0 {
            return Err("max_sources must be greater than 0".to_string());
        }
        if self.min_words == 0 {
            return Err("min_words must be greater than 0".to_string());
        }
        if self.tool_timeout_secs == 0 {
            return Err("tool_timeout_secs must be greater than 0".to_string());
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(OrchestratorConfig::default().validate().is_ok());
    }

    #[test]
    fn test_presets_are_valid() {
        assert!(OrchestratorConfig::strict().validate().is_ok());
        assert!(OrchestratorConfig::lenient().validate().is_ok());
    }

    #[test]
    fn test_per_stage_thresholds() {
        let mut config = OrchestratorConfig::default();
        config.analysis_threshold = 0.8;
        assert_eq!(config.acceptance_threshold(Stage::Research), 0.6);
        assert_eq!(config.acceptance_threshold(Stage::Analysis), 0.8);
    }

    #[test]
    fn test_weights_must_sum_to_one() {
        let mut config = OrchestratorConfig::default();
        config.coverage_weight = 0.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_out_of_range_threshold_rejected() {
        let mut config = OrchestratorConfig::default();
        config.writer_threshold = -0.1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_sources_rejected() {
        let mut config = OrchestratorConfig::default();
        config.max_sources = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = OrchestratorConfig::strict();
        let parsed = OrchestratorConfig::from_toml(&config.to_toml().unwrap()).unwrap();
        assert_eq!(config, parsed);
    }
}
