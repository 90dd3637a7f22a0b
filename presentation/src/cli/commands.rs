//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use fanout_domain::OutputFormat;
use std::path::PathBuf;

/// Output format for fan-out results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    /// Every strategy answer followed by the comparison
    Full,
    /// Only the comparative analysis
    Analysis,
    /// JSON output
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Full => OutputFormat::Full,
            OutputFormatArg::Analysis => OutputFormat::Analysis,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

/// CLI arguments for prompt-fanout
#[derive(Parser, Debug)]
#[command(name = "prompt-fanout")]
#[command(author, version, about = "Compare prompt strategies against one LLM")]
#[command(long_about = r#"
prompt-fanout renders a query into six prompt strategies, asks one model to
answer each of them, then asks the same model to compare and rate the answers.

Strategies: zero_shot, few_shot, chain_of_thought, react, self_critique, multi_role

Configuration files are loaded from (in priority order):
1. FANOUT_<SECTION>__<KEY> environment variables
2. --config <path>     Explicit config file
3. ./fanout.toml       Project-level config
4. ~/.config/prompt-fanout/config.toml   Global config

The API key is read from OPENROUTER_API_KEY (a .env file is honored).

Example:
  prompt-fanout serve --bind 0.0.0.0:8000
  prompt-fanout run "Explain REST" --output analysis
  prompt-fanout ask "Explain what REST API means."
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the HTTP API (POST /run-prompts plus demo routes)
    Serve {
        /// Listen address, overrides [server].bind
        #[arg(long, value_name = "ADDR")]
        bind: Option<String>,
    },

    /// Run one query through every strategy and print the result
    Run {
        /// The query to fan out
        query: String,

        /// Output format, overrides [output].format
        #[arg(short, long, value_enum)]
        output: Option<OutputFormatArg>,

        /// Model to use, overrides [upstream].model
        #[arg(short, long, value_name = "MODEL")]
        model: Option<String>,
    },

    /// Send a single prompt with a system prompt
    Ask {
        /// The prompt to send
        prompt: String,

        /// Model to use, overrides [ask].model
        #[arg(short, long, value_name = "MODEL")]
        model: Option<String>,

        /// System prompt, overrides [ask].system_prompt
        #[arg(short, long, value_name = "TEXT")]
        system: Option<String>,
    },

    /// List the prompt strategies
    Strategies,
}
