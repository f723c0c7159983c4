//! CLI argument definitions for the sales profit tool.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use sales_core::{ColumnMismatchMode, InputFormat, ProcessingOptions, ZeroRevenuePolicy};

#[derive(Parser)]
#[command(
    name = "sales-profit",
    version,
    about = "Sales profit calculator - derive profit and margin for product sales files",
    long_about = "Read a product sales file (CSV with a header row, or a JSON array of records)\n\
                  with sku, cost, price and qty columns, derive profit and profit margin for\n\
                  every row, and report the rows together with a summary row."
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
    /// Enrich every row of a sales file and print the result.
    Process(ProcessArgs),

    /// Print only the summary row of a sales file.
    Summary(SummaryArgs),
}

/// Source selection and processing policy shared by all commands.
#[derive(Args)]
pub struct SourceArgs {
    /// Sales file to read; `-` reads from standard input.
    #[arg(value_name = "FILE")]
    pub path: PathBuf,

    /// Source layout (default: from the file extension, CSV otherwise).
    #[arg(long = "input", value_enum)]
    pub input: Option<InputFormatArg>,

    /// Reject rows whose width differs from the header and rows with zero revenue.
    #[arg(long = "strict")]
    pub strict: bool,

    /// Reject rows whose width differs from the header.
    #[arg(long = "reject-ragged-rows")]
    pub reject_ragged_rows: bool,

    /// Reject rows whose revenue (price * qty) is zero instead of reporting a 0 margin.
    #[arg(long = "reject-zero-revenue")]
    pub reject_zero_revenue: bool,
}

impl SourceArgs {
    pub fn input_format(&self) -> InputFormat {
        match self.input {
            Some(InputFormatArg::Csv) => InputFormat::Csv,
            Some(InputFormatArg::Json) => InputFormat::Json,
            None => InputFormat::from_path(&self.path),
        }
    }

    pub fn processing_options(&self) -> ProcessingOptions {
        if self.strict {
            return ProcessingOptions::strict();
        }
        ProcessingOptions::default()
            .with_column_mismatch(if self.reject_ragged_rows {
                ColumnMismatchMode::Reject
            } else {
                ColumnMismatchMode::Truncate
            })
            .with_zero_revenue(if self.reject_zero_revenue {
                ZeroRevenuePolicy::Reject
            } else {
                ZeroRevenuePolicy::ZeroMargin
            })
    }

    pub fn is_stdin(&self) -> bool {
        self.path.as_os_str() == "-"
    }
}

#[derive(Parser)]
pub struct ProcessArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// How to print the enriched rows.
    #[arg(long = "output", value_enum, default_value = "table")]
    pub output: OutputArg,

    /// Omit the summary row from table output.
    #[arg(long = "no-summary")]
    pub no_summary: bool,
}

#[derive(Parser)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Summary format: `array` prints a table, `json` prints a JSON object.
    /// Case-insensitive; unrecognized values print a table.
    #[arg(long = "format", default_value = "array")]
    pub format: String,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum InputFormatArg {
    Csv,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputArg {
    Table,
    Json,
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
