//! Ask command implementation.

use crate::cli::AskArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use inquest_domain::traits::{MemorySink, StageTool};
use inquest_domain::{Query, RunSummary};
use inquest_embed::HashEmbedder;
use inquest_memory::{InMemorySink, MemoryError, SqliteMemory};
use inquest_orchestrator::Controller;
use inquest_tools::{MockTool, OllamaTool};
use std::fmt::Display;
use std::fmt::Write;

/// Runs included as seed context with `--history`
const HISTORY_CONTEXT_RUNS: usize = 3;

/// Run memory selected at the command line
///
/// `--no-record` swaps the durable store for an ephemeral one without
/// changing the controller's type.
enum RunMemory {
    Sqlite(SqliteMemory),
    Ephemeral(InMemorySink),
}

impl MemorySink for RunMemory {
    type Error = MemoryError;

    fn record(&mut self, summary: &RunSummary) -> std::result::Result<(), MemoryError> {
        match self {
            RunMemory::Sqlite(memory) => memory.record(summary),
            RunMemory::Ephemeral(sink) => sink.record(summary),
        }
    }
}

/// Execute the ask command.
pub async fn execute_ask(args: AskArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let seed_context = if args.history {
        let memory = SqliteMemory::new(config.memory_path()?)?;
        history_context(&memory.recent(HISTORY_CONTEXT_RUNS)?)
    } else {
        String::new()
    };

    let memory = if args.no_record {
        RunMemory::Ephemeral(InMemorySink::new())
    } else {
        RunMemory::Sqlite(SqliteMemory::new(config.memory_path()?)?)
    };

    if args.offline {
        let tool = MockTool::default();
        run_query(tool, memory, seed_context, config, &args, formatter).await
    } else {
        let endpoint = args
            .endpoint
            .clone()
            .unwrap_or_else(|| config.tool.endpoint.clone());
        let model = args
            .model
            .clone()
            .unwrap_or_else(|| config.tool.model.clone());
        let tool = OllamaTool::new(endpoint, model);
        run_query(tool, memory, seed_context, config, &args, formatter).await
    }
}

async fn run_query<T>(
    tool: T,
    memory: RunMemory,
    seed_context: String,
    config: &Config,
    args: &AskArgs,
    formatter: &Formatter,
) -> Result<()>
where
    T: StageTool + Send + Sync + 'static,
    T::Error: Display,
{
    let mut orchestrator_config = config.orchestrator.clone();
    if let Some(sources) = args.sources {
        orchestrator_config.max_sources = sources;
    }

    let controller = Controller::new(
        tool,
        HashEmbedder::default(),
        memory,
        config.extractor.clone(),
        orchestrator_config,
    )?;

    let query = Query::new(&args.query, controller.config().max_sources)
        .map_err(CliError::InvalidInput)?
        .with_history(args.history);

    let run = controller.execute_with_context(query, seed_context).await?;
    println!("{}", formatter.format_run(&run)?);
    Ok(())
}

/// Condense past runs into a context block for the first stage
fn history_context(summaries: &[RunSummary]) -> String {
    let mut context = String::new();
    for summary in summaries {
        let _ = writeln!(
            context,
            "Earlier research on \"{}\":\n{}\n",
            summary.query,
            excerpt(&summary.report, 400)
        );
    }
    context
}

fn excerpt(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((pos, _)) => &text[..pos],
        None => text,
    }
}
