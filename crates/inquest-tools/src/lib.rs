//! Inquest Stage Tool Layer
//!
//! Pluggable implementations of the [`StageTool`] trait from
//! `inquest-domain`. The stage tool is the controller's only execution
//! collaborator: it turns (stage, parameters) into raw text.
//!
//! # Providers
//!
//! - `MockTool`: deterministic scripted tool for tests and offline runs
//! - `OllamaTool`: local Ollama API integration
//!
//! # Examples
//!
//! ```
//! use inquest_tools::MockTool;
//! use inquest_domain::traits::StageTool;
//! use inquest_domain::{Stage, StageParameters};
//!
//! let tool = MockTool::new("stage output");
//! let params = StageParameters::new("query", 5, 100);
//! let result = tool.run(Stage::Research, &params).unwrap();
//! assert_eq!(result, "stage output");
//! ```

#![warn(missing_docs)]

pub mod ollama;
pub mod prompt;

use inquest_domain::traits::StageTool;
use inquest_domain::{Stage, StageParameters};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use ollama::OllamaTool;

/// Errors that can occur during stage tool execution
///
/// Timeouts surface through here as well; the controller treats every
/// variant the same way, feeding its retry budget.
#[derive(Error, Debug)]
pub enum ToolError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from the execution engine
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// The invocation exceeded its deadline
    #[error("Stage tool timed out")]
    Timeout,

    /// Generic execution failure
    #[error("Tool error: {0}")]
    Execution(String),
}

/// Scripted response for one mock invocation
type Scripted = Result<String, String>;

/// Mock stage tool for deterministic testing
///
/// Returns pre-scripted responses per stage in FIFO order, falling back to
/// a fixed default, and counts invocations so tests can assert the
/// controller's bounded-attempts guarantee.
///
/// # Examples
///
/// ```
/// use inquest_tools::MockTool;
/// use inquest_domain::traits::StageTool;
/// use inquest_domain::{Stage, StageParameters};
///
/// let tool = MockTool::new("default");
/// tool.script(Stage::Research, "first research output");
/// tool.script_error(Stage::Research, "engine unavailable");
///
/// let params = StageParameters::new("q", 5, 100);
/// assert!(tool.run(Stage::Research, &params).is_ok());
/// assert!(tool.run(Stage::Research, &params).is_err());
/// assert_eq!(tool.run(Stage::Research, &params).unwrap(), "default");
/// assert_eq!(tool.call_count(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct MockTool {
    default_response: String,
    scripts: Arc<Mutex<HashMap<Stage, VecDeque<Scripted>>>>,
    calls: Arc<Mutex<HashMap<Stage, usize>>>,
}

impl MockTool {
    /// Create a mock tool with a fixed default response for all stages
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            scripts: Arc::new(Mutex::new(HashMap::new())),
            calls: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Queue a successful response for the next invocation of a stage
    pub fn script(&self, stage: Stage, output: impl Into<String>) {
        self.scripts
            .lock()
            .unwrap()
            .entry(stage)
            .or_default()
            .push_back(Ok(output.into()));
    }

    /// Queue a failure for the next invocation of a stage
    pub fn script_error(&self, stage: Stage, message: impl Into<String>) {
        self.scripts
            .lock()
            .unwrap()
            .entry(stage)
            .or_default()
            .push_back(Err(message.into()));
    }

    /// Total invocations across all stages
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().values().sum()
    }

    /// Invocations for one stage
    pub fn calls_for(&self, stage: Stage) -> usize {
        self.calls.lock().unwrap().get(&stage).copied().unwrap_or(0)
    }
}

impl Default for MockTool {
    fn default() -> Self {
        Self::new("Default mock stage output")
    }
}

impl StageTool for MockTool {
    type Error = ToolError;

    fn run(&self, stage: Stage, _parameters: &StageParameters) -> Result<String, ToolError> {
        *self.calls.lock().unwrap().entry(stage).or_insert(0) += 1;

        let next = self
            .scripts
            .lock()
            .unwrap()
            .get_mut(&stage)
            .and_then(|queue| queue.pop_front());

        match next {
            Some(Ok(output)) => Ok(output),
            Some(Err(message)) => Err(ToolError::Execution(message)),
            None => Ok(self.default_response.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> StageParameters {
        StageParameters::new("test query", 5, 100)
    }

    #[test]
    fn test_mock_default_response() {
        let tool = MockTool::new("fixed");
        assert_eq!(tool.run(Stage::Research, &params()).unwrap(), "fixed");
    }

    #[test]
    fn test_mock_scripted_order() {
        let tool = MockTool::default();
        tool.script(Stage::Analysis, "first");
        tool.script(Stage::Analysis, "second");

        assert_eq!(tool.run(Stage::Analysis, &params()).unwrap(), "first");
        assert_eq!(tool.run(Stage::Analysis, &params()).unwrap(), "second");
    }

    #[test]
    fn test_mock_scripts_are_per_stage() {
        let tool = MockTool::new("default");
        tool.script(Stage::Research, "research output");

        assert_eq!(tool.run(Stage::Writer, &params()).unwrap(), "default");
        assert_eq!(tool.run(Stage::Research, &params()).unwrap(), "research output");
    }

    #[test]
    fn test_mock_scripted_error() {
        let tool = MockTool::default();
        tool.script_error(Stage::Writer, "engine down");

        let result = tool.run(Stage::Writer, &params());
        assert!(matches!(result, Err(ToolError::Execution(_))));
    }

    #[test]
    fn test_mock_call_counting() {
        let tool = MockTool::default();
        assert_eq!(tool.call_count(), 0);

        tool.run(Stage::Research, &params()).unwrap();
        tool.run(Stage::Research, &params()).unwrap();
        tool.run(Stage::Writer, &params()).unwrap();

        assert_eq!(tool.call_count(), 3);
        assert_eq!(tool.calls_for(Stage::Research), 2);
        assert_eq!(tool.calls_for(Stage::Analysis), 0);
    }

    #[test]
    fn test_mock_clone_shares_counts() {
        let tool1 = MockTool::default();
        let tool2 = tool1.clone();

        tool1.run(Stage::Research, &params()).unwrap();

        assert_eq!(tool1.call_count(), 1);
        assert_eq!(tool2.call_count(), 1);
    }
}
