//! CLI argument definitions for the TLFB flattener.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "tlfb",
    version,
    about = "TLFB calendar flattener - turn timeline follow-back submissions into flat CSV records",
    long_about = "Flatten a timeline follow-back (TLFB) substance-use calendar into one\n\
                  dense, fixed-schema CSV row: 30 day slots of per-substance columns plus\n\
                  the summary aggregate catalog, ready for repository import."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow subject identifiers and raw answers in log output.
    ///
    /// Off by default: answer-level values are PHI and logged as [REDACTED]
    /// unless this flag is set.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Flatten one submission JSON file into a CSV record.
    Transform(TransformArgs),

    /// List the tracked wizard fields and their output columns.
    Fields,
}

#[derive(Parser)]
pub struct TransformArgs {
    /// Path to the submission JSON file.
    #[arg(value_name = "SUBMISSION")]
    pub input: PathBuf,

    /// Write the CSV record here instead of stdout.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Emit the data row only, without the header line.
    #[arg(long = "no-header")]
    pub no_header: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
