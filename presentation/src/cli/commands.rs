//! CLI command definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for smart-tutor
#[derive(Parser, Debug)]
#[command(name = "smart-tutor")]
#[command(author, version, about = "11+ practice tutor with an LLM completion gateway")]
#[command(long_about = r#"
Smart Tutor generates 11+ practice questions, gives hints, grades answers and
chats with the learner. All model calls go through a small completion gateway
that keeps the upstream API key on the server.

Configuration files are loaded from (in priority order):
1. PORT environment variable   Gateway port only
2. --config <path>             Explicit config file
3. ./tutor.toml                Project-level config
4. ~/.config/smart-tutor/config.toml   Global config

Example:
  smart-tutor serve --port 3001
  smart-tutor tutor --gateway http://localhost:3001
  smart-tutor tutor --local
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

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
    /// Run the completion gateway (POST /api/chat)
    Serve(ServeArgs),
    /// Start the interactive tutor in the terminal
    Tutor(TutorArgs),
}

#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    /// Port to listen on (overrides config and PORT)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Address to bind
    #[arg(long, value_name = "ADDR")]
    pub host: Option<String>,
}

#[derive(Args, Debug, Default)]
pub struct TutorArgs {
    /// Gateway base URL
    #[arg(long, value_name = "URL", conflicts_with = "local")]
    pub gateway: Option<String>,

    /// Relay in-process instead of calling a running gateway
    #[arg(long)]
    pub local: bool,

    /// Start with this subject selected (label, English name or 1-4)
    #[arg(short, long, value_name = "SUBJECT")]
    pub subject: Option<String>,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,
}
