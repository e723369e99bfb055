//! Inquest Domain Layer
//!
//! This crate contains the core business logic and domain model for Inquest.
//! It is deliberately dependency-light and defines the fundamental concepts,
//! value objects, and trait interfaces that all other layers depend upon.
//!
//! ## Key Concepts
//!
//! - **Claim**: a sentence span judged to assert a factual statement
//! - **Evidence**: a sentence span judged to support a given claim
//! - **Score**: a bounded [0, 1] quality/confidence signal
//! - **Stage**: one phase of the research pipeline (Research, Analysis, Writer)
//! - **OrchestrationRun**: the full lifecycle state of answering one query
//!
//! ## Architecture
//!
//! - Pure domain logic only; no I/O
//! - Infrastructure implementations live in other crates
//! - Trait definitions for all external interactions

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod claim;
pub mod extraction;
pub mod query;
pub mod run;
pub mod score;
pub mod sentence;
pub mod stage;
pub mod traits;

// Re-exports for convenience
pub use claim::{Claim, Evidence};
pub use extraction::{ClaimEvidence, ExtractionResult};
pub use query::Query;
pub use run::{OrchestrationRun, RunId, RunState, RunSummary};
pub use score::Score;
pub use sentence::{Sentence, SentenceTags};
pub use stage::{Stage, StageAttempt, StageParameters};
