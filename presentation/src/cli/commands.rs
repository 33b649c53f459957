//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for analysis results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The client JSON contract
    Json,
    /// Human-readable summary
    Summary,
}

/// CLI arguments for blink
#[derive(Parser, Debug)]
#[command(name = "blink")]
#[command(author, version, about = "Analyze an image with a domain-tuned vision model")]
#[command(long_about = r#"
Blink sends an image to a generative vision provider using the prompt,
model and output schema of the selected domain, and prints the validated
analysis.

Configuration is loaded from (in priority order):
1. Environment         GEMINI_API_KEY, GEMINI_API_URL, GEMINI_REQUEST_TIMEOUT,
                       MAX_UPLOAD_SIZE_MB, DEFAULT_CREDITS_REMAINING
2. --config <path>     Explicit config file
3. ./blink.toml        Project-level config
4. ~/.config/blink/config.toml   Global config

Example:
  blink photo.jpg --domain vision-lite
  blink scan.png -d vision-medical -o summary
  blink --list-domains
"#)]
pub struct Cli {
    /// Image file to analyze
    #[arg(required_unless_present_any = ["list_domains", "show_config"])]
    pub image: Option<PathBuf>,

    /// Domain identifier selecting prompt, model and schema
    #[arg(short, long, value_name = "ID", default_value = "vision-lite")]
    pub domain: String,

    /// Override the content type inferred from the file extension
    #[arg(long, value_name = "MIME")]
    pub mime: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    pub output: OutputFormat,

    /// List available domains and exit
    #[arg(long)]
    pub list_domains: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Ignore configuration files (environment variables still apply)
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
