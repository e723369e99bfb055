//! Error types for the orchestration controller

use thiserror::Error;

/// Errors that can surface from the controller
///
/// Low quality scores never raise; they are absorbed into the
/// retry/degrade state machine. Tool exhaustion lands in the run's
/// `Failed` state rather than here, so callers still get the attempt
/// history.
#[derive(Error, Debug)]
pub enum OrchestratorError {
    /// Malformed query, rejected before any stage runs
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// Invalid configuration, fatal at startup
    #[error("Configuration error: {0}")]
    Config(String),

    /// Extraction pipeline could not be constructed
    #[error("Extraction error: {0}")]
    Extraction(String),
}
