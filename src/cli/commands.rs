use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "stageline")]
#[command(author, version, about = "Staged progress tracker for plan generation jobs", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(short, long, global = true, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Path to config.toml (default: built-in defaults)
    #[arg(long, global = true, env = "STAGELINE_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Output format for CLI results.
/// - Text: Human-readable text output (default)
/// - Json: One JSON object per rendered frame
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a simulated generation job and render live progress
    Run {
        /// Seconds spent in each stage
        #[arg(long)]
        stage_secs: Option<u64>,
    },

    /// Print the configured stage sequence
    Stages,

    /// Render a single frame for a given stage id
    Show {
        /// Stage id (unknown ids render the fallback frame)
        #[arg(long)]
        stage: String,

        /// Status message shown verbatim
        #[arg(long, default_value = "")]
        message: String,
    },
}
