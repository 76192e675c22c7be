//! CLI argument parsing for the tracefront inspection binary
//!
//! The binary's own options come before `--`; everything after it is the
//! front-end command line, resolved by [`crate::settings::FrontEndArgs`].

use clap::{Parser, ValueEnum};

/// Output format for the resolved configuration
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format (default)
    Text,
    /// JSON format for machine parsing
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "tracefront")]
#[command(version)]
#[command(
    about = "Resolve instrumentation front-end arguments into a typed configuration",
    long_about = None
)]
pub struct Cli {
    /// Output format (text or json)
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Enable debug tracing to stderr
    #[arg(long = "debug")]
    pub debug: bool,

    /// Front-end arguments and target program (everything after --)
    #[arg(last = true)]
    pub args: Vec<String>,
}
