//! The adaptive orchestration controller
//!
//! Drives one query through the Research → Analysis → Writer pipeline,
//! scoring each stage's output and retrying with adjusted parameters when
//! quality falls short. Stage tools are synchronous collaborators; the
//! controller runs them on blocking tasks under a deadline.

use crate::config::OrchestratorConfig;
use crate::error::OrchestratorError;
use crate::policy::{DefaultRetryPolicy, RetryPolicy};
use crate::scorer::{count_sources, QualityScorer};
use inquest_domain::traits::{Embedder, MemorySink, StageTool};
use inquest_domain::{
    ExtractionResult, OrchestrationRun, Query, RunState, Stage, StageAttempt, StageParameters,
};
use inquest_extractor::ExtractorConfig;
use std::fmt::Display;
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{info, warn};

/// The orchestration controller
///
/// Owns the run lifecycle exclusively: collaborators receive immutable
/// parameters and hand back output or summaries, never mutate the run.
/// A low-quality stage degrades to its best attempt after the retry budget
/// is spent; only a stage whose tool produced nothing at all fails the run.
pub struct Controller<T, E, M, P = DefaultRetryPolicy>
where
    T: StageTool,
    E: Embedder,
    M: MemorySink,
    P: RetryPolicy,
{
    tool: Arc<T>,
    scorer: QualityScorer<E>,
    memory: Arc<Mutex<M>>,
    policy: P,
    config: OrchestratorConfig,
}

impl<T, E, M> Controller<T, E, M, DefaultRetryPolicy>
where
    T: StageTool + Send + Sync + 'static,
    T::Error: Display,
    E: Embedder,
    E::Error: Display,
    M: MemorySink,
    M::Error: Display,
{
    /// Create a controller with the default retry policy
    ///
    /// # Errors
    ///
    /// Returns [`OrchestratorError::Config`] for an invalid orchestrator
    /// configuration and [`OrchestratorError::Extraction`] for an invalid
    /// extractor configuration.
    pub fn new(
        tool: T,
        embedder: E,
        memory: M,
        extractor_config: ExtractorConfig,
        config: OrchestratorConfig,
    ) -> Result<Self, OrchestratorError> {
        config.validate().map_err(OrchestratorError::Config)?;
        let scorer = QualityScorer::new(embedder, extractor_config, &config)
            .map_err(|e| OrchestratorError::Extraction(e.to_string()))?;
        Ok(Self {
            tool: Arc::new(tool),
            scorer,
            memory: Arc::new(Mutex::new(memory)),
            policy: DefaultRetryPolicy,
            config,
        })
    }
}

impl<T, E, M, P> Controller<T, E, M, P>
where
    T: StageTool + Send + Sync + 'static,
    T::Error: Display,
    E: Embedder,
    E::Error: Display,
    M: MemorySink,
    M::Error: Display,
    P: RetryPolicy,
{
    /// Swap in a different retry policy
    pub fn with_policy<P2: RetryPolicy>(self, policy: P2) -> Controller<T, E, M, P2> {
        Controller {
            tool: self.tool,
            scorer: self.scorer,
            memory: self.memory,
            policy,
            config: self.config,
        }
    }

    /// The active configuration
    pub fn config(&self) -> &OrchestratorConfig {
        &self.config
    }

    /// Answer a raw query string
    ///
    /// # Errors
    ///
    /// Returns [`OrchestratorError::InvalidQuery`] for empty text. Stage
    /// failures do not raise; they land in the returned run's state.
    pub async fn answer(&self, text: &str) -> Result<OrchestrationRun, OrchestratorError> {
        let query = Query::new(text, self.config.max_sources)
            .map_err(OrchestratorError::InvalidQuery)?;
        self.execute(query).await
    }

    /// Execute a full run for one query
    ///
    /// Always returns `Ok` once a run has started; inspect the run's state
    /// for `Completed` versus `Failed`.
    pub async fn execute(&self, query: Query) -> Result<OrchestrationRun, OrchestratorError> {
        self.execute_with_context(query, String::new()).await
    }

    /// Execute a run with seed context for the first stage
    ///
    /// Callers that opted into past-session history pass it here; the
    /// controller itself never reads memory.
    pub async fn execute_with_context(
        &self,
        query: Query,
        seed_context: String,
    ) -> Result<OrchestrationRun, OrchestratorError> {
        let mut run = OrchestrationRun::new(query);
        info!(run_id = %run.id(), query = run.query().text(), "starting orchestration run");

        // The query's own source budget drives breadth and coverage, not
        // the configured default.
        let max_sources = run.query().max_sources();
        let mut context = seed_context;
        let mut extractions: Vec<Option<ExtractionResult>> = Vec::new();
        let mut final_extraction = None;
        for stage in Stage::ALL {
            let mut parameters =
                StageParameters::new(run.query().text(), max_sources, self.config.min_words);
            if !context.is_empty() {
                parameters = parameters.with_context(context.clone());
            }

            let threshold = self.config.acceptance_threshold(stage);
            let budget = 1 + self.config.retries_per_stage;
            let mut accepted_idx = None;
            let mut last_tool_error = None;

            for attempt_number in 1..=budget {
                run.transition(RunState::Running(stage));
                let output = match self.invoke_tool(stage, &parameters).await {
                    Ok(output) => output,
                    Err(error) => {
                        warn!(
                            stage = %stage,
                            attempt = attempt_number,
                            %error,
                            "stage tool invocation failed"
                        );
                        last_tool_error = Some(error);
                        if attempt_number < budget {
                            run.transition(RunState::Retrying(stage));
                            parameters = self.policy.adjust(stage, &parameters);
                        }
                        continue;
                    }
                };

                run.transition(RunState::Scoring(stage));
                let (score, extraction) = self.scorer.score(stage, &output, max_sources);
                let idx = run.record_attempt(StageAttempt {
                    stage,
                    attempt: attempt_number,
                    parameters: parameters.clone(),
                    output,
                    score,
                    timestamp: unix_now(),
                });
                extractions.push(extraction);

                if score.meets(threshold) {
                    accepted_idx = Some(idx);
                    break;
                }
                info!(
                    stage = %stage,
                    attempt = attempt_number,
                    %score,
                    threshold,
                    "attempt below threshold"
                );
                if attempt_number < budget {
                    run.transition(RunState::Retrying(stage));
                    parameters = self.policy.adjust(stage, &parameters);
                }
            }

            let accepted = match accepted_idx.or_else(|| run.best_attempt(stage).map(|(i, _)| i))
            {
                Some(idx) => idx,
                None => {
                    let error = last_tool_error
                        .unwrap_or_else(|| "stage tool produced no output".to_string());
                    warn!(stage = %stage, %error, "stage exhausted its budget with no output");
                    run.fail(stage, error);
                    return Ok(run);
                }
            };
            if accepted_idx.is_none() {
                info!(
                    stage = %stage,
                    score = %run.attempts()[accepted].score,
                    "budget spent; degrading to best attempt"
                );
            }
            run.accept(stage, accepted);
            if stage == Stage::Writer {
                final_extraction = extractions[accepted].take();
            }
            context = run.attempts()[accepted].output.clone();
            run.transition(RunState::Advancing(stage));
        }

        // The Writer's accepted output becomes the final report; its
        // extraction was already computed during scoring. An accepted
        // report the pipeline could not process carries an empty result.
        let report = context;
        let extraction = final_extraction.unwrap_or_else(|| ExtractionResult::empty(0));
        let sources = count_sources(&report);
        run.complete(extraction);

        if let Some(summary) = run.summary(sources) {
            match self.memory.lock() {
                Ok(mut sink) => {
                    if let Err(e) = sink.record(&summary) {
                        warn!("failed to record run summary: {}", e);
                    }
                }
                Err(_) => warn!("memory sink lock poisoned; run summary dropped"),
            }
        }

        info!(
            run_id = %run.id(),
            invocations = run.total_invocations(),
            state = %run.state(),
            "orchestration run finished"
        );
        Ok(run)
    }

    /// Run the stage tool on a blocking task under the configured deadline
    async fn invoke_tool(
        &self,
        stage: Stage,
        parameters: &StageParameters,
    ) -> Result<String, String> {
        let tool = Arc::clone(&self.tool);
        let parameters = parameters.clone();
        let task =
            tokio::task::spawn_blocking(move || {
                tool.run(stage, &parameters).map_err(|e| e.to_string())
            });

        match tokio::time::timeout(self.config.tool_timeout(), task).await {
            Ok(Ok(result)) => result,
            Ok(Err(join_error)) => Err(format!("stage task panicked: {}", join_error)),
            Err(_) => Err(format!(
                "stage tool timed out after {}s",
                self.config.tool_timeout_secs
            )),
        }
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
