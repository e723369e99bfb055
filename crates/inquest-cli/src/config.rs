//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use inquest_extractor::ExtractorConfig;
use inquest_orchestrator::OrchestratorConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// CLI configuration.
///
/// Persisted as TOML under `~/.inquest/config.toml`. Sections default
/// independently, so a file that only tunes the extractor leaves the
/// orchestrator at its defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Global settings
    #[serde(default)]
    pub settings: Settings,

    /// Stage execution engine settings
    #[serde(default)]
    pub tool: ToolSettings,

    /// Orchestration controller configuration
    #[serde(default)]
    pub orchestrator: OrchestratorConfig,

    /// Extraction pipeline configuration
    #[serde(default)]
    pub extractor: ExtractorConfig,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// Run memory database path; defaults to `~/.inquest/runs.db`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory_path: Option<String>,
}

/// Stage execution engine settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolSettings {
    /// Engine endpoint
    pub endpoint: String,

    /// Model name
    pub model: String,
}

/// Output format.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Get the configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".inquest").join("config.toml"))
    }

    /// Load configuration from file or create default.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;

        if path.exists() {
            let contents = fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&contents)?;
            config.validate()?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file.
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(&path, contents)?;
        Ok(())
    }

    /// The run memory database path.
    pub fn memory_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.settings.memory_path {
            return Ok(PathBuf::from(path));
        }
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".inquest").join("runs.db"))
    }

    /// Validate the tunable sections.
    pub fn validate(&self) -> Result<()> {
        self.orchestrator.validate().map_err(CliError::Config)?;
        self.extractor.validate().map_err(CliError::Config)?;
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
            memory_path: None,
        }
    }
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            endpoint: inquest_tools::ollama::DEFAULT_ENDPOINT.to_string(),
            model: "llama2".to_string(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}
