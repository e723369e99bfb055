//! Show command implementation.

use crate::cli::ShowArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use inquest_memory::SqliteMemory;

/// Execute the show command.
pub fn execute_show(args: ShowArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let memory = SqliteMemory::new(config.memory_path()?)?;
    let summary = memory
        .find(&args.run_id)?
        .ok_or_else(|| CliError::RunNotFound(args.run_id.clone()))?;

    println!("{}", formatter.format_summary(&summary)?);
    Ok(())
}
