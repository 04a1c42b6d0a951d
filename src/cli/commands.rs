//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Inspect Increase API payloads
#[derive(Parser, Debug)]
#[command(name = "increase-inspect")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML or JSON)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Reject payloads missing required fields (overrides config)
    #[arg(long, global = true)]
    pub strict: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Decode a single object payload and report field presence and extras
    Inspect {
        /// Resource name (see `resources`)
        #[arg(short, long)]
        resource: String,

        /// Payload file, or `-` for stdin
        file: PathBuf,
    },

    /// Decode a list response and report on every item
    Page {
        /// Resource name of the list items (see `resources`)
        #[arg(short, long)]
        resource: String,

        /// Payload file, or `-` for stdin
        file: PathBuf,
    },

    /// List supported resource names
    Resources,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON report
    Json,
    /// Human-readable report
    Pretty,
}
