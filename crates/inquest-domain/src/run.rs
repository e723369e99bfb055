//! Orchestration run lifecycle state

use crate::{ExtractionResult, Query, Stage, StageAttempt};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for an orchestration run based on UUIDv7
///
/// UUIDv7 provides chronological sortability, so run logs order naturally
/// by creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RunId(u128);

impl RunId {
    /// Generate a new UUIDv7-based RunId
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().as_u128())
    }

    /// Create a RunId from a raw u128 value
    ///
    /// This is primarily for storage layer deserialization.
    pub fn from_value(value: u128) -> Self {
        Self(value)
    }

    /// Parse a RunId from a UUIDv7 string
    pub fn from_string(s: &str) -> Result<Self, String> {
        uuid::Uuid::parse_str(s)
            .map(|u| Self(u.as_u128()))
            .map_err(|e| format!("Invalid UUIDv7 string: {}", e))
    }

    /// Get the raw u128 value
    pub fn value(&self) -> u128 {
        self.0
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", uuid::Uuid::from_u128(self.0))
    }
}

/// Lifecycle state of an orchestration run
///
/// ```text
/// Pending → Running(stage) → Scoring(stage) → { Advancing(stage)
///                                             | Retrying(stage)
///                                             | Failed
///                                             | Completed }
/// ```
///
/// `Failed` is reached only when the stage tool itself cannot produce any
/// output after exhausting retries; low quality scores degrade instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunState {
    /// Created, not yet started
    Pending,
    /// A stage tool invocation is in flight
    Running(Stage),
    /// Scoring the latest attempt of a stage
    Scoring(Stage),
    /// The stage's parameters are being mutated before a re-run
    Retrying(Stage),
    /// The stage was accepted; moving to its successor
    Advancing(Stage),
    /// Terminal: the Writer output was accepted
    Completed,
    /// Terminal: a stage tool failed on every attempt
    Failed {
        /// The stage whose tool gave out
        stage: Stage,
        /// The last tool error, rendered
        error: String,
    },
}

impl RunState {
    /// Whether this state is terminal
    pub fn is_terminal(&self) -> bool {
        matches!(self, RunState::Completed | RunState::Failed { .. })
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunState::Pending => write!(f, "pending"),
            RunState::Running(s) => write!(f, "running({})", s),
            RunState::Scoring(s) => write!(f, "scoring({})", s),
            RunState::Retrying(s) => write!(f, "retrying({})", s),
            RunState::Advancing(s) => write!(f, "advancing({})", s),
            RunState::Completed => write!(f, "completed"),
            RunState::Failed { stage, .. } => write!(f, "failed({})", stage),
        }
    }
}

/// The full lifecycle state of answering one query
///
/// Owned exclusively by the controller; mutated only through the methods
/// here, and discarded (or handed to the memory collaborator as a
/// [`RunSummary`]) once terminal.
#[derive(Debug, Clone)]
pub struct OrchestrationRun {
    id: RunId,
    query: Query,
    state: RunState,
    attempts: Vec<StageAttempt>,
    accepted: Vec<(Stage, usize)>,
    final_extraction: Option<ExtractionResult>,
}

impl OrchestrationRun {
    /// Create a new run in the `Pending` state
    pub fn new(query: Query) -> Self {
        Self {
            id: RunId::new(),
            query,
            state: RunState::Pending,
            attempts: Vec::new(),
            accepted: Vec::new(),
            final_extraction: None,
        }
    }

    /// The run identifier
    pub fn id(&self) -> RunId {
        self.id
    }

    /// The originating query
    pub fn query(&self) -> &Query {
        &self.query
    }

    /// Current lifecycle state
    pub fn state(&self) -> &RunState {
        &self.state
    }

    /// Move the run to a new state
    pub fn transition(&mut self, state: RunState) {
        debug_assert!(
            !self.state.is_terminal(),
            "terminal runs must not transition"
        );
        self.state = state;
    }

    /// Record a scored attempt, returning its index
    pub fn record_attempt(&mut self, attempt: StageAttempt) -> usize {
        self.attempts.push(attempt);
        self.attempts.len() - 1
    }

    /// All attempts across all stages, in execution order
    pub fn attempts(&self) -> &[StageAttempt] {
        &self.attempts
    }

    /// Attempts for one stage, in execution order
    pub fn attempts_for(&self, stage: Stage) -> impl Iterator<Item = &StageAttempt> {
        self.attempts.iter().filter(move |a| a.stage == stage)
    }

    /// Total number of stage tool invocations so far
    pub fn total_invocations(&self) -> usize {
        self.attempts.len()
    }

    /// Mark an attempt as the accepted output of its stage
    pub fn accept(&mut self, stage: Stage, attempt_index: usize) {
        self.accepted.retain(|(s, _)| *s != stage);
        self.accepted.push((stage, attempt_index));
    }

    /// The accepted attempt for a stage, if any
    pub fn accepted_attempt(&self, stage: Stage) -> Option<&StageAttempt> {
        self.accepted
            .iter()
            .find(|(s, _)| *s == stage)
            .and_then(|(_, idx)| self.attempts.get(*idx))
    }

    /// The best-scored attempt for a stage (earliest wins ties)
    pub fn best_attempt(&self, stage: Stage) -> Option<(usize, &StageAttempt)> {
        let mut best: Option<(usize, &StageAttempt)> = None;
        for (idx, attempt) in self.attempts.iter().enumerate() {
            if attempt.stage != stage {
                continue;
            }
            match best {
                Some((_, current)) if attempt.score <= current.score => {}
                _ => best = Some((idx, attempt)),
            }
        }
        best
    }

    /// Mark the run completed with the extraction backing the final score
    pub fn complete(&mut self, extraction: ExtractionResult) {
        self.final_extraction = Some(extraction);
        self.state = RunState::Completed;
    }

    /// Mark the run failed at a stage
    pub fn fail(&mut self, stage: Stage, error: impl Into<String>) {
        self.state = RunState::Failed {
            stage,
            error: error.into(),
        };
    }

    /// The accepted Writer output, once completed
    pub fn final_output(&self) -> Option<&str> {
        self.accepted_attempt(Stage::Writer).map(|a| a.output.as_str())
    }

    /// The extraction result behind the final quality score, once completed
    pub fn final_extraction(&self) -> Option<&ExtractionResult> {
        self.final_extraction.as_ref()
    }

    /// Build an append-only summary for the memory collaborator
    ///
    /// Returns `None` unless the run is `Completed`.
    pub fn summary(&self, sources_count: usize) -> Option<RunSummary> {
        if self.state != RunState::Completed {
            return None;
        }
        let writer = self.accepted_attempt(Stage::Writer)?;
        let extraction = self.final_extraction.as_ref()?;
        Some(RunSummary {
            run_id: self.id.to_string(),
            query: self.query.text().to_string(),
            report: writer.output.clone(),
            quality: writer.score.value(),
            claims_count: extraction.claim_count(),
            supported_count: extraction.supported_count(),
            sources_count,
            attempts_count: self.attempts.len(),
            created_at: writer.timestamp,
        })
    }
}

/// Summary of a completed run, handed to the memory collaborator
///
/// The core only appends these; it never reads memory to make retry
/// decisions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Run identifier as a UUID string
    pub run_id: String,
    /// The query text
    pub query: String,
    /// The accepted final report
    pub report: String,
    /// Final quality score
    pub quality: f64,
    /// Claims detected in the final report
    pub claims_count: usize,
    /// Claims with supporting evidence
    pub supported_count: usize,
    /// Distinct sources referenced
    pub sources_count: usize,
    /// Total stage tool invocations for the run
    pub attempts_count: usize,
    /// Seconds since Unix epoch when the run completed
    pub created_at: u64,
}
