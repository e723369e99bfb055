//! Inquest Extractor
//!
//! Converts raw text into ordered claim/evidence records with a numeric
//! aggregate confidence. This is the quality signal the orchestration
//! controller steers by.
//!
//! # Architecture
//!
//! ```text
//! Text → Segmenter/Tagger → Claim Detector → Evidence Matcher → ExtractionResult
//! ```
//!
//! # Key Properties
//!
//! - **Deterministic**: identical text and configuration always produce an
//!   identical result; embeddings are cached per extraction call
//! - **Order-preserving**: claims keep the document order of their source
//!   sentences; equal-similarity evidence ties resolve to the earliest
//!   sentence
//! - **Pure**: the pipeline owns no mutable state across calls
//!
//! # Example Usage
//!
//! ```
//! use inquest_extractor::{ExtractionPipeline, ExtractorConfig};
//! use inquest_embed::HashEmbedder;
//!
//! let pipeline = ExtractionPipeline::new(HashEmbedder::default(), ExtractorConfig::default())
//!     .expect("default config is valid");
//!
//! let text = "AI agents may improve efficiency. \
//!             Recent benchmarks show a 20% efficiency gain in agent-based systems.";
//! let result = pipeline.extract(text).unwrap();
//! assert_eq!(result.sentence_count, 2);
//! ```

#![warn(missing_docs)]

mod config;
mod detector;
mod error;
mod matcher;
mod pipeline;
mod segmenter;

#[cfg(test)]
mod tests;

pub use config::ExtractorConfig;
pub use detector::ClaimDetector;
pub use error::ExtractionError;
pub use matcher::EvidenceMatcher;
pub use pipeline::ExtractionPipeline;
pub use segmenter::SentenceSegmenter;
