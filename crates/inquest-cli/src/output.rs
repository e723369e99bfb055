//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use inquest_domain::{
    Evidence, ExtractionResult, OrchestrationRun, RunState, RunSummary, Stage,
};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a finished orchestration run.
    pub fn format_run(&self, run: &OrchestrationRun) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_run_json(run),
            OutputFormat::Table => Ok(self.format_run_table(run)),
            OutputFormat::Quiet => Ok(run.id().to_string()),
        }
    }

    fn format_run_json(&self, run: &OrchestrationRun) -> Result<String> {
        let quality = run
            .accepted_attempt(Stage::Writer)
            .map(|a| a.score.value());
        let value = serde_json::json!({
            "run_id": run.id().to_string(),
            "query": run.query().text(),
            "state": run.state().to_string(),
            "report": run.final_output(),
            "quality": quality,
            "attempts": run.total_invocations(),
            "extraction": run.final_extraction(),
        });
        Ok(serde_json::to_string_pretty(&value)?)
    }

    fn format_run_table(&self, run: &OrchestrationRun) -> String {
        let mut out = String::new();

        if let RunState::Failed { stage, error } = run.state() {
            out.push_str(&self.error(&format!("Run failed at {} stage: {}", stage, error)));
            out.push('\n');
            out.push_str(&format!(
                "Attempts: {}  Run: {}",
                run.total_invocations(),
                run.id()
            ));
            return out;
        }

        if let Some(report) = run.final_output() {
            out.push_str(report);
            out.push_str("\n\n");
        }

        if let Some(attempt) = run.accepted_attempt(Stage::Writer) {
            out.push_str(&self.info(&format!("Quality: {}", attempt.score)));
            out.push('\n');
        }
        if let Some(extraction) = run.final_extraction() {
            out.push_str(&format!(
                "Claims: {} ({} supported)  Attempts: {}  Run: {}",
                extraction.claim_count(),
                extraction.supported_count(),
                run.total_invocations(),
                run.id()
            ));
        }
        out
    }

    /// Format an extraction result.
    pub fn format_extraction(&self, result: &ExtractionResult) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
            OutputFormat::Table => Ok(self.format_extraction_table(result)),
            OutputFormat::Quiet => Ok(format!("{}", result.aggregate)),
        }
    }

    fn format_extraction_table(&self, result: &ExtractionResult) -> String {
        if result.pairs.is_empty() {
            return self.colorize("No claims found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["#", "Claim", "Confidence", "Evidence", "Similarity"]);

        for pair in &result.pairs {
            let (evidence_text, similarity) = match &pair.evidence {
                Evidence::Supported {
                    text, similarity, ..
                } => (truncate(text, 50), similarity.to_string()),
                Evidence::Unsupported => ("(unsupported)".to_string(), "-".to_string()),
            };
            builder.push_record([
                pair.claim.sentence_index.to_string(),
                truncate(&pair.claim.text, 50),
                pair.claim.confidence.to_string(),
                evidence_text,
                similarity,
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        format!(
            "{}\nAggregate confidence: {} over {} sentence(s)",
            table, result.aggregate, result.sentence_count
        )
    }

    /// Format the run history listing.
    pub fn format_history(&self, summaries: &[RunSummary]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(summaries)?),
            OutputFormat::Table => Ok(self.format_history_table(summaries)),
            OutputFormat::Quiet => Ok(summaries
                .iter()
                .map(|s| s.run_id.clone())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    fn format_history_table(&self, summaries: &[RunSummary]) -> String {
        if summaries.is_empty() {
            return self.colorize("No runs recorded.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["ID", "Query", "Quality", "Claims", "Sources", "Attempts"]);

        for summary in summaries {
            builder.push_record([
                summary.run_id.get(..8).unwrap_or(&summary.run_id).to_string(),
                truncate(&summary.query, 40),
                format!("{:.3}", summary.quality),
                format!("{}/{}", summary.supported_count, summary.claims_count),
                summary.sources_count.to_string(),
                summary.attempts_count.to_string(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format one stored run.
    pub fn format_summary(&self, summary: &RunSummary) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(summary)?),
            OutputFormat::Quiet => Ok(summary.run_id.clone()),
            OutputFormat::Table => Ok(format!(
                "{}\n\n{}\nClaims: {} ({} supported)  Sources: {}  Attempts: {}",
                summary.report,
                self.info(&format!("Quality: {:.3}", summary.quality)),
                summary.claims_count,
                summary.supported_count,
                summary.sources_count,
                summary.attempts_count,
            )),
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", cut)
}

#[cfg(test)]
mod tests {
    use super::*;
    use inquest_domain::{Claim, ClaimEvidence, Score};

    fn extraction() -> ExtractionResult {
        let pairs = vec![
            ClaimEvidence {
                claim: Claim {
                    sentence_index: 1,
                    text: "Benchmarks show a 20% gain.".to_string(),
                    confidence: Score::new(0.9),
                },
                evidence: Evidence::Supported {
                    sentence_index: 2,
                    text: "Replications confirm the gain.".to_string(),
                    similarity: Score::new(0.7),
                },
            },
            ClaimEvidence {
                claim: Claim {
                    sentence_index: 3,
                    text: "Costs fall in every deployment.".to_string(),
                    confidence: Score::new(0.75),
                },
                evidence: Evidence::Unsupported,
            },
        ];
        ExtractionResult::from_pairs(pairs, 4, 0.5)
    }

    fn summary() -> RunSummary {
        RunSummary {
            run_id: "0190b5f4-aaaa-bbbb-cccc-ddddeeeeffff".to_string(),
            query: "test query".to_string(),
            report: "final report".to_string(),
            quality: 0.81,
            claims_count: 3,
            supported_count: 2,
            sources_count: 4,
            attempts_count: 5,
            created_at: 1_700_000_000,
        }
    }

    #[test]
    fn test_extraction_table_format() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_extraction(&extraction()).unwrap();
        assert!(output.contains("Claim"));
        assert!(output.contains("(unsupported)"));
        assert!(output.contains("Aggregate confidence"));
    }

    #[test]
    fn test_extraction_json_format() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_extraction(&extraction()).unwrap();
        assert!(output.contains("\"aggregate\""));
        assert!(output.contains("Benchmarks show"));
    }

    #[test]
    fn test_extraction_quiet_is_aggregate_only() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter.format_extraction(&extraction()).unwrap();
        assert!(!output.contains("Benchmarks"));
        assert!(output.parse::<f64>().is_ok());
    }

    #[test]
    fn test_empty_extraction() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let result = ExtractionResult::from_pairs(vec![], 2, 0.5);
        let output = formatter.format_extraction(&result).unwrap();
        assert!(output.contains("No claims found"));
    }

    #[test]
    fn test_history_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_history(&[summary()]).unwrap();
        assert!(output.contains("0190b5f4"));
        assert!(output.contains("2/3"));
    }

    #[test]
    fn test_history_quiet_lists_ids() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter.format_history(&[summary()]).unwrap();
        assert_eq!(output, "0190b5f4-aaaa-bbbb-cccc-ddddeeeeffff");
    }

    #[test]
    fn test_empty_history() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_history(&[]).unwrap();
        assert!(output.contains("No runs recorded"));
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("done"), "✓ done");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a very long piece of text", 10), "a very lo…");
    }
}
