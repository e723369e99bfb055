//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Orchestration error
    #[error("Orchestration error: {0}")]
    Orchestrator(#[from] inquest_orchestrator::OrchestratorError),

    /// Extraction error
    #[error("Extraction error: {0}")]
    Extraction(#[from] inquest_extractor::ExtractionError),

    /// Run memory error
    #[error("Memory error: {0}")]
    Memory(#[from] inquest_memory::MemoryError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No stored run with the given identifier
    #[error("Run not found: {0}")]
    RunNotFound(String),
}
