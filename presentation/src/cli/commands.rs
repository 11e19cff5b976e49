//! CLI command definitions

use analyst_domain::{AgentMode, OutputFormat};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for responses
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputArg {
    /// Formatted response text
    Text,
    /// The full response envelope as JSON
    Json,
}

impl From<OutputArg> for OutputFormat {
    fn from(arg: OutputArg) -> Self {
        match arg {
            OutputArg::Text => OutputFormat::Text,
            OutputArg::Json => OutputFormat::Json,
        }
    }
}

/// CLI arguments for marketing-analyst
#[derive(Parser, Debug)]
#[command(name = "marketing-analyst")]
#[command(author, version, about = "Marketing analyst agent - market insights from a tool-using model")]
#[command(long_about = r#"
Marketing Analyst answers marketing questions by letting a language model
call analysis tools (market trends, competitors, consumer sentiment,
reports and strategy recommendations) before it writes an answer.

Modes:
  substitute   Canned answers, no model and no API key needed (default)
  live         OpenAI-compatible model; the API key is read from the
               environment variable named by provider.api_key_env

Configuration files are loaded from (in priority order):
1. ANALYST_* environment variables (e.g. ANALYST_AGENT__MODE=live)
2. --config <path>     Explicit config file
3. ./analyst.toml      Project-level config
4. ~/.config/marketing-analyst/config.toml   Global config

Example:
  marketing-analyst "Analyze mobile gaming market trends"
  marketing-analyst --mode live --highlight growth "Who leads the EV market?"
  marketing-analyst            # interactive session
"#)]
pub struct Cli {
    /// The query to answer (starts an interactive session when omitted)
    pub query: Option<String>,

    /// The query to answer, as a flag
    #[arg(long = "query", value_name = "QUERY", conflicts_with = "query")]
    pub query_flag: Option<String>,

    /// Decision mode: live or substitute
    #[arg(long, value_name = "MODE")]
    pub mode: Option<AgentMode>,

    /// Model identifier for live mode
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Disable round trace events
    #[arg(long)]
    pub no_tracing: bool,

    /// Terms to highlight in the response (can be specified multiple times)
    #[arg(long, value_name = "TERM", num_args = 1..)]
    pub highlight: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputArg>,

    /// Maximum decision rounds per query
    #[arg(long, value_name = "N")]
    pub max_rounds: Option<usize>,

    /// Timeout in seconds for one model decision
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// The query from either the positional argument or `--query`
    pub fn query_text(&self) -> Option<&str> {
        self.query.as_deref().or(self.query_flag.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_query() {
        let cli = Cli::parse_from(["marketing-analyst", "Analyze mobile gaming"]);
        assert_eq!(cli.query_text(), Some("Analyze mobile gaming"));
        assert!(cli.mode.is_none());
    }

    #[test]
    fn test_flags() {
        let cli = Cli::parse_from([
            "marketing-analyst",
            "--query",
            "Who are our competitors?",
            "--mode",
            "live",
            "--highlight",
            "growth",
            "share",
            "--output",
            "json",
            "--max-rounds",
            "3",
            "-vv",
        ]);

        assert_eq!(cli.query_text(), Some("Who are our competitors?"));
        assert_eq!(cli.mode, Some(AgentMode::Live));
        assert_eq!(cli.highlight, vec!["growth", "share"]);
        assert_eq!(cli.output.map(OutputFormat::from), Some(OutputFormat::Json));
        assert_eq!(cli.max_rounds, Some(3));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_debug_alias_selects_substitute() {
        let cli = Cli::parse_from(["marketing-analyst", "--mode", "debug"]);
        assert_eq!(cli.mode, Some(AgentMode::Substitute));
        assert!(cli.query_text().is_none());
    }

    #[test]
    fn test_invalid_mode_rejected() {
        assert!(Cli::try_parse_from(["marketing-analyst", "--mode", "turbo"]).is_err());
    }
}
