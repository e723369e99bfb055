//! History command implementation.

use crate::cli::HistoryArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use inquest_memory::SqliteMemory;

/// Execute the history command.
pub fn execute_history(args: HistoryArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let memory = SqliteMemory::new(config.memory_path()?)?;
    let summaries = memory.recent(args.limit)?;

    println!("{}", formatter.format_history(&summaries)?);
    Ok(())
}
