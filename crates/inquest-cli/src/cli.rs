//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};

/// Inquest CLI - Research queries with claim-evidence quality gating.
#[derive(Debug, Parser)]
#[command(name = "inquest")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (minimal)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run a research query through the full pipeline
    Ask(AskArgs),

    /// Extract claims and evidence from text
    Extract(ExtractArgs),

    /// List past runs
    History(HistoryArgs),

    /// Show the stored report of one run
    Show(ShowArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

/// Arguments for the ask command.
#[derive(Debug, Parser)]
pub struct AskArgs {
    /// The research query
    pub query: String,

    /// Maximum number of sources to request
    #[arg(short, long)]
    pub sources: Option<usize>,

    /// Model to use for stage execution
    #[arg(short, long)]
    pub model: Option<String>,

    /// Execution engine endpoint
    #[arg(short, long)]
    pub endpoint: Option<String>,

    /// Run with the scripted offline tool instead of a live engine
    #[arg(long)]
    pub offline: bool,

    /// Seed the run with findings from recent past runs
    #[arg(long)]
    pub history: bool,

    /// Do not record this run in memory
    #[arg(long)]
    pub no_record: bool,
}

/// Arguments for the extract command.
#[derive(Debug, Parser)]
pub struct ExtractArgs {
    /// Text to extract from (omit to read a file or stdin)
    pub text: Option<String>,

    /// Read the text from a file
    #[arg(short = 'F', long)]
    pub file: Option<String>,

    /// Read the text from stdin
    #[arg(long)]
    pub stdin: bool,
}

/// Arguments for the history command.
#[derive(Debug, Parser)]
pub struct HistoryArgs {
    /// Maximum number of runs to list
    #[arg(short, long, default_value = "10")]
    pub limit: usize,
}

/// Arguments for the show command.
#[derive(Debug, Parser)]
pub struct ShowArgs {
    /// Run identifier (UUID)
    pub run_id: String,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration management actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Show the active configuration
    Show,

    /// Write the default configuration file
    Init,

    /// Print the configuration file path
    Path,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ask_command() {
        let cli = Cli::parse_from(["inquest", "ask", "Do AI agents improve efficiency?"]);
        match cli.command {
            Command::Ask(args) => {
                assert_eq!(args.query, "Do AI agents improve efficiency?");
                assert!(!args.offline);
            }
            _ => panic!("Expected Ask command"),
        }
    }

    #[test]
    fn test_ask_flags() {
        let cli = Cli::parse_from(["inquest", "ask", "q", "--offline", "--sources", "3"]);
        match cli.command {
            Command::Ask(args) => {
                assert!(args.offline);
                assert_eq!(args.sources, Some(3));
            }
            _ => panic!("Expected Ask command"),
        }
    }

    #[test]
    fn test_history_default_limit() {
        let cli = Cli::parse_from(["inquest", "history"]);
        match cli.command {
            Command::History(args) => assert_eq!(args.limit, 10),
            _ => panic!("Expected History command"),
        }
    }

    #[test]
    fn test_global_format_flag() {
        let cli = Cli::parse_from(["inquest", "--format", "json", "history"]);
        assert!(matches!(cli.format, Some(CliFormat::Json)));
    }
}
