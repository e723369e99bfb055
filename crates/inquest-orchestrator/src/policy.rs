//! Retry parameter adjustment
//!
//! When a stage's output scores below its acceptance threshold, the
//! controller mutates the stage parameters before re-running so the retry
//! asks for something different rather than replaying the same request.

use inquest_domain::{Stage, StageParameters};

/// Strategy for mutating stage parameters between attempts
///
/// Implementations must be deterministic: the adjusted parameters depend
/// only on the stage and the parameters passed in, never on wall-clock
/// time or external state.
pub trait RetryPolicy {
    /// Produce the parameters for the next attempt of `stage`
    fn adjust(&self, stage: Stage, parameters: &StageParameters) -> StageParameters;
}

/// The standard per-stage adjustments
///
/// - Research: widen the search by two sources
/// - Analysis: request structured output
/// - Writer: double the minimum word count
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultRetryPolicy;

impl RetryPolicy for DefaultRetryPolicy {
    fn adjust(&self, stage: Stage, parameters: &StageParameters) -> StageParameters {
        let mut adjusted = parameters.clone();
        match stage {
            Stage::Research => adjusted.breadth += 2,
            Stage::Analysis => adjusted.structured = true,
            Stage::Writer => adjusted.min_words *= 2,
        }
        adjusted
    }
}
