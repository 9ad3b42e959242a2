//! CLI argument definitions for excel2txt.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "excel2txt",
    version,
    about = "Convert Excel workbooks to delimited text",
    long_about = "Convert Excel workbooks to delimited text, one output file per worksheet.\n\n\
                  Header cells can be normalized to snake_case identifiers, and each\n\
                  workbook's outputs can be fanned out into their own directory."
)]
pub struct Cli {
    /// Input workbook file(s).
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// Output directory (default: current directory, created if missing).
    #[arg(short = 'o', long = "outdir", value_name = "DIR")]
    pub outdir: Option<PathBuf>,

    /// Delimiter for output fields.
    #[arg(
        short = 'd',
        long = "delimiter",
        value_name = "STR",
        default_value = "\t"
    )]
    pub delimiter: String,

    /// Create a separate output directory per input file.
    #[arg(short = 'D', long = "mkdirs")]
    pub mkdirs: bool,

    /// Normalize header cells to snake_case identifiers.
    #[arg(short = 'n', long = "normalize")]
    pub normalize: bool,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
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
