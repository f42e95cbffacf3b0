//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Inspect HTTP Authorization header values
#[derive(Parser, Debug)]
#[command(name = "authz-header")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(
        short,
        long,
        global = true,
        env = "AUTHZ_HEADER_FORMAT",
        default_value = "json"
    )]
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
    /// Parse Authorization header values
    Parse {
        /// Header values, without the "Authorization:" prefix
        #[arg(value_name = "VALUE")]
        values: Vec<String>,

        /// Read one header value per line from a file
        #[arg(long, conflicts_with_all = ["values", "stdin"])]
        file: Option<PathBuf>,

        /// Read one header value per line from stdin
        #[arg(long, conflicts_with = "values")]
        stdin: bool,

        /// Include decoded Basic passwords in the output
        #[arg(long)]
        show_password: bool,

        /// Exit with status 1 if any value is rejected
        #[arg(long)]
        fail_on_invalid: bool,
    },

    /// List recognized scheme tokens
    Schemes,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one report per line)
    Json,
    /// Human-readable output
    Pretty,
}
