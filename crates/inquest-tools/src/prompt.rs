//! Per-stage prompt construction
//!
//! Turns stage parameters into the instruction text handed to the
//! execution engine. Retry mutations (breadth, structure, detail) are
//! reflected here so a re-run actually asks for something different.

use inquest_domain::{Stage, StageParameters};
use std::fmt::Write;

/// Build the prompt for one stage invocation
pub fn build_prompt(stage: Stage, parameters: &StageParameters) -> String {
    let mut prompt = String::new();

    match stage {
        Stage::Research => {
            let _ = write!(
                prompt,
                "Gather relevant, credible information for the query: \"{}\".\n\
                 Find {} distinct sources. For each source include a title, a short \
                 excerpt, and its URL.",
                parameters.query, parameters.breadth,
            );
        }
        Stage::Analysis => {
            let _ = write!(
                prompt,
                "Analyze the research material for the query: \"{}\".\n\
                 Summarize the main findings, state the key claims, and for each \
                 claim quote the supporting evidence with a confidence rating.",
                parameters.query,
            );
            if parameters.structured {
                prompt.push_str(
                    "\nReturn the result as structured text with exactly three \
                     sections: Summary, Claims, Evidence.",
                );
            }
        }
        Stage::Writer => {
            let _ = write!(
                prompt,
                "Write a research report answering the query: \"{}\".\n\
                 Use Markdown with an Overview, a Key Claims section listing \
                 evidence per claim, and a Sources section. Write at least {} words.",
                parameters.query, parameters.min_words,
            );
        }
    }

    if !parameters.context.is_empty() {
        let _ = write!(
            prompt,
            "\n\nMaterial from the previous stage:\n{}",
            parameters.context
        );
    }

    prompt
}
