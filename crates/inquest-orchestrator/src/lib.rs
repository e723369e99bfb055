//! Adaptive orchestration for staged research runs
//!
//! This crate drives a query through the fixed Research → Analysis →
//! Writer pipeline. Each stage's output is scored with the claim-evidence
//! extraction pipeline; output below the stage's acceptance threshold is
//! retried with deterministically adjusted parameters, and a spent retry
//! budget degrades to the best attempt rather than failing the run.
//!
//! The controller is generic over its collaborators: the stage tool, the
//! embedder behind the scorer, the memory sink for completed runs, and the
//! retry policy.

#![warn(missing_docs)]

mod config;
mod controller;
mod error;
mod policy;
mod scorer;

pub use config::OrchestratorConfig;
pub use controller::Controller;
pub use error::OrchestratorError;
pub use policy::{DefaultRetryPolicy, RetryPolicy};
pub use scorer::{count_sources, QualityScorer};
