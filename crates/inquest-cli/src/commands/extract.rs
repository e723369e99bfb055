//! Extract command implementation.

use crate::cli::ExtractArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use inquest_embed::HashEmbedder;
use inquest_extractor::ExtractionPipeline;
use std::io::Read;

/// Execute the extract command.
pub fn execute_extract(args: ExtractArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let text = read_input(&args)?;

    let pipeline = ExtractionPipeline::new(HashEmbedder::default(), config.extractor.clone())?;
    let result = pipeline.extract(&text)?;

    println!("{}", formatter.format_extraction(&result)?);
    Ok(())
}

fn read_input(args: &ExtractArgs) -> Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }
    if let Some(path) = &args.file {
        return Ok(std::fs::read_to_string(path)?);
    }
    if args.stdin {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }
    Err(CliError::InvalidInput(
        "Provide text as an argument, via --file, or via --stdin".to_string(),
    ))
}
