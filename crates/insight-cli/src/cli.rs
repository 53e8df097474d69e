//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "insight",
    version,
    about = "Turn unlabeled text into a tabular dataset with charts and filters",
    long_about = "Ingest delimited text, JSON, or free text without declaring the format.\n\n\
                  The input is sniffed, parsed into a typed dataset, profiled, and matched\n\
                  with chart suggestions. Views can be filtered, sorted, and exported."
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Ingest a file or bundled sample and show the resulting dataset.
    Ingest(IngestArgs),

    /// List the bundled sample inputs.
    Samples,
}

#[derive(Parser)]
pub struct IngestArgs {
    /// Path to the input file (any text: delimited, JSON, or free text).
    #[arg(value_name = "FILE", required_unless_present = "sample")]
    pub input: Option<PathBuf>,

    /// Ingest a bundled sample instead of a file (see `insight samples`).
    #[arg(long = "sample", value_name = "NAME", conflicts_with = "input")]
    pub sample: Option<String>,

    /// Keep only rows whose column value is in the list (COLUMN=V1,V2,...).
    #[arg(long = "filter", value_name = "SPEC")]
    pub filter: Vec<String>,

    /// Keep only rows whose numeric column value lies in MIN..MAX
    /// inclusive (COLUMN=MIN..MAX).
    #[arg(long = "range", value_name = "SPEC")]
    pub range: Vec<String>,

    /// Sort the view ascending by this column (nulls last).
    #[arg(long = "sort", value_name = "COLUMN")]
    pub sort: Option<String>,

    /// Maximum number of rows in the view (prefix truncation).
    #[arg(long = "limit", value_name = "N")]
    pub limit: Option<usize>,

    /// Number of preview rows to print.
    #[arg(long = "rows", value_name = "N", default_value_t = 20)]
    pub rows: usize,

    /// Skip chart suggestions.
    #[arg(long = "no-charts")]
    pub no_charts: bool,

    /// Write the view as delimited text with a header row.
    #[arg(long = "export-csv", value_name = "PATH")]
    pub export_csv: Option<PathBuf>,

    /// Write the view as a JSON array of row-objects.
    #[arg(long = "export-json", value_name = "PATH")]
    pub export_json: Option<PathBuf>,

    /// Write a plain-text summary of the view.
    #[arg(long = "export-summary", value_name = "PATH")]
    pub export_summary: Option<PathBuf>,
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
