//! Pipeline stage definitions and per-attempt records

use crate::Score;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One phase of the research pipeline
///
/// The stage order is fixed: Research → Analysis → Writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Stage {
    /// Gather raw material for the query
    Research,
    /// Summarize findings and structure claims/evidence
    Analysis,
    /// Produce the final report
    Writer,
}

impl Stage {
    /// All stages in pipeline order
    pub const ALL: [Stage; 3] = [Stage::Research, Stage::Analysis, Stage::Writer];

    /// The stage that follows this one, or `None` after Writer
    ///
    /// # Examples
    ///
    /// ```
    /// use inquest_domain::Stage;
    ///
    /// assert_eq!(Stage::Research.next(), Some(Stage::Analysis));
    /// assert_eq!(Stage::Writer.next(), None);
    /// ```
    pub fn next(&self) -> Option<Stage> {
        match self {
            Stage::Research => Some(Stage::Analysis),
            Stage::Analysis => Some(Stage::Writer),
            Stage::Writer => None,
        }
    }

    /// Stable lowercase name
    pub fn name(&self) -> &'static str {
        match self {
            Stage::Research => "research",
            Stage::Analysis => "analysis",
            Stage::Writer => "writer",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parameters handed to the stage tool for one attempt
///
/// The retry policy mutates a copy of these between attempts; accepted
/// prior-stage output travels in `context`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageParameters {
    /// The original query text
    pub query: String,

    /// Accepted output of the previous stage, empty for Research
    pub context: String,

    /// Search breadth (requested number of sources)
    pub breadth: usize,

    /// Whether structured output was requested
    pub structured: bool,

    /// Requested minimum word count for the output
    pub min_words: usize,
}

impl StageParameters {
    /// Initial parameters for the first stage of a run
    pub fn new(query: impl Into<String>, breadth: usize, min_words: usize) -> Self {
        Self {
            query: query.into(),
            context: String::new(),
            breadth,
            structured: false,
            min_words,
        }
    }

    /// Attach prior-stage context
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = context.into();
        self
    }
}

/// One scored invocation of a stage tool
///
/// Immutable once scored; the controller retains the full attempt history
/// for the current run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageAttempt {
    /// Which stage was run
    pub stage: Stage,

    /// 1-based attempt number within the stage
    pub attempt: u32,

    /// Parameters used for this attempt
    pub parameters: StageParameters,

    /// Raw tool output
    pub output: String,

    /// Quality score assigned by the scorer
    pub score: Score,

    /// Seconds since Unix epoch when the attempt was scored
    pub timestamp: u64,
}
