//! CLI argument definitions for the inventory browser.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use inv_model::SortOrder;

#[derive(Parser)]
#[command(
    name = "inventory",
    version,
    about = "Browse, filter and export the master equipment inventory",
    long_about = "Browse the master equipment inventory CSV.\n\n\
                  Filter by free text or kit, sort by NSN, description or quantity,\n\
                  and export selected items as CSV."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Inventory CSV to load: a file path or an http(s) URL.
    #[arg(long = "source", value_name = "PATH|URL", global = true)]
    pub source: Option<String>,

    /// Settings file (default: ./inventory.toml when present).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
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
    /// Show the filtered and sorted inventory.
    List(ListArgs),

    /// List every kit named in the inventory.
    Kits,

    /// Select items and write them to a CSV file.
    Export(ExportArgs),

    /// Browse interactively, one command per line.
    Shell(ShellArgs),
}

/// Filters shared by every subcommand that works on the filtered view.
#[derive(Args, Clone, Default)]
pub struct QueryArgs {
    /// Case-insensitive text to look for in any field.
    #[arg(long = "search", short = 's', value_name = "TEXT")]
    pub search: Option<String>,

    /// Only items that belong to this kit (exact name).
    #[arg(long = "kit", short = 'k', value_name = "KIT")]
    pub kit: Option<String>,

    /// Sort order: nsn-asc, nsn-desc, description-asc, description-desc,
    /// qty-asc or qty-desc.
    #[arg(long = "sort", value_name = "ORDER")]
    pub sort: Option<SortOrder>,
}

#[derive(Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub query: QueryArgs,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: ListFormatArg,

    /// Never shorten kit membership text.
    #[arg(long = "full-kits")]
    pub full_kits: bool,
}

#[derive(Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub query: QueryArgs,

    /// Toggle every item with this NSN into the selection (repeatable).
    #[arg(long = "nsn", value_name = "NSN")]
    pub nsn: Vec<String>,

    /// Select every item in the filtered view.
    #[arg(long = "all")]
    pub all: bool,

    /// Directory for the export file (default: settings `export_dir`).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Print the CSV to stdout instead of writing a file.
    #[arg(long = "stdout")]
    pub stdout: bool,
}

#[derive(Args)]
pub struct ShellArgs {
    #[command(flatten)]
    pub query: QueryArgs,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormatArg {
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
