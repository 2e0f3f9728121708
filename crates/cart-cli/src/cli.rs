//! CLI argument definitions for cart-convert.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "cart-convert",
    version,
    about = "Convert vendor cart and estimate spreadsheets into normalized line items",
    long_about = "Convert vendor cart and estimate spreadsheets into normalized line items.\n\n\
                  Finds the header row below banners and metadata, maps columns by their\n\
                  Korean or English labels, and coerces prices and quantities.\n\
                  Reads xlsx, xlsm, xlsb, xls, ods, csv and tsv files."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -vvv for trace, -q for errors only).
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

    /// Prefix log lines with a timestamp (pretty and compact formats).
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert a cart file and print a preview; optionally export it.
    Convert(ConvertArgs),

    /// Show the detected header row and column mapping of a cart file.
    Inspect(InspectArgs),
}

/// Header detection flags shared by both commands.
#[derive(Args)]
pub struct HeaderArgs {
    /// Rows scanned from the top for the header (default: 60).
    #[arg(long = "scan-rows", value_name = "N")]
    pub scan_rows: Option<usize>,

    /// Take the first row containing this exact label as the header.
    #[arg(long = "sentinel", value_name = "LABEL")]
    pub sentinel: Option<String>,
}

#[derive(Parser)]
pub struct ConvertArgs {
    /// Cart or estimate file (xlsx, xlsm, xlsb, xls, ods, csv, tsv).
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Write the converted items to this file.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Export format.
    #[arg(long = "format", value_enum, default_value = "csv")]
    pub format: ExportFormatArg,

    /// Site label written to every exported row.
    #[arg(long = "site", value_name = "LABEL", default_value = "")]
    pub site: String,

    #[command(flatten)]
    pub header: HeaderArgs,

    /// What to do with named rows whose quantity is missing.
    #[arg(long = "missing-quantity", value_enum)]
    pub missing_quantity: Option<MissingQuantityArg>,

    /// Treat number-less rows as items instead of option lines.
    #[arg(long = "no-option-lines")]
    pub no_option_lines: bool,

    /// Keep product codes embedded in names.
    #[arg(long = "no-embedded-codes")]
    pub no_embedded_codes: bool,

    /// JSON file with conversion options; explicit flags override it.
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Maximum number of items shown in the preview table.
    #[arg(long = "preview-rows", value_name = "N", default_value_t = 20)]
    pub preview_rows: usize,
}

#[derive(Parser)]
pub struct InspectArgs {
    /// Cart or estimate file.
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    #[command(flatten)]
    pub header: HeaderArgs,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ExportFormatArg {
    Csv,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum MissingQuantityArg {
    DefaultToOne,
    SkipRow,
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
