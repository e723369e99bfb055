//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and its
//! opaque collaborators. Implementations live in other crates.

use crate::{RunSummary, Stage, StageParameters};

/// Trait for the stage execution tool
///
/// Implemented by the infrastructure layer (inquest-tools). The controller
/// treats a tool invocation as the sole operation that may block; it wraps
/// calls in a blocking task and awaits their conclusion before any state
/// transition.
pub trait StageTool {
    /// Error type for tool failures
    type Error;

    /// Run one stage with the given parameters, returning raw text output
    fn run(&self, stage: Stage, parameters: &StageParameters) -> Result<String, Self::Error>;
}

/// Trait for the embedding/similarity collaborator
///
/// Implemented by the infrastructure layer (inquest-embed). Used
/// exclusively by the evidence matcher.
pub trait Embedder {
    /// Error type for embedding operations
    type Error;

    /// Generate an embedding vector for the given text
    fn embed(&self, text: &str) -> Result<Vec<f32>, Self::Error>;

    /// Dimension of the vectors this embedder produces
    fn dimension(&self) -> usize;
}

/// Trait for the long-term memory collaborator
///
/// The core only appends completed run summaries; it never reads memory to
/// make retry decisions, which keeps the controller a pure function of
/// current-run state.
pub trait MemorySink {
    /// Error type for memory operations
    type Error;

    /// Append a completed run summary
    fn record(&mut self, summary: &RunSummary) -> Result<(), Self::Error>;
}
