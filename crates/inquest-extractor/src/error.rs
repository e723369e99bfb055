//! Error types for the extraction pipeline

use thiserror::Error;

/// Errors that can occur during extraction
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// Input text was empty or whitespace-only
    #[error("Input text is empty")]
    EmptyInput,

    /// Segmentation produced no usable sentences
    #[error("Segmentation produced no usable sentences")]
    NoSentences,

    /// Embedding collaborator error
    #[error("Embedding error: {0}")]
    Embedding(String),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),
}
