//! Inquest CLI - research queries with claim-evidence quality gating.

use clap::Parser;
use inquest_cli::{commands, Cli, Command, Config, Formatter};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> inquest_cli::Result<()> {
    // Diagnostics go to stderr so piped output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    let format = cli.format.map(Into::into).unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Ask(args) => commands::execute_ask(args, &config, &formatter).await?,
        Command::Extract(args) => commands::execute_extract(args, &config, &formatter)?,
        Command::History(args) => commands::execute_history(args, &config, &formatter)?,
        Command::Show(args) => commands::execute_show(args, &config, &formatter)?,
        Command::Config(args) => commands::execute_config(args, &config, &formatter)?,
    }

    Ok(())
}
