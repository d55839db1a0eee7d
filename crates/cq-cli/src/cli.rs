//! CLI argument definitions for Catalog Quality.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use cq_query::{DEFAULT_PAGE_SIZE, SortColumn, SortDirection, StockFilter};

#[derive(Parser)]
#[command(
    name = "cq",
    version,
    about = "Catalog Quality - audit and query messy product catalogs",
    long_about = "Normalize untrusted product records into a canonical, strictly-typed\n\
                  form, score how malformed each record was, and filter, sort, and\n\
                  paginate the result. Dirty data is displayed, not rejected."
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
    /// Normalize a catalog and list one page of matching records.
    List(ListArgs),

    /// Show one record in full, including its glitch report.
    Show(ShowArgs),

    /// Patch a record in the catalog store.
    Update(UpdateArgs),

    /// List the distinct categories present after normalization.
    Categories(CategoriesArgs),
}

#[derive(Parser)]
pub struct ListArgs {
    /// Path to the catalog JSON file (an array of raw product records).
    #[arg(value_name = "CATALOG")]
    pub catalog: PathBuf,

    /// Case-insensitive substring match on the product name.
    #[arg(long)]
    pub search: Option<String>,

    /// Exact category match ("All" disables the filter).
    #[arg(long)]
    pub category: Option<String>,

    /// Stock-status filter.
    #[arg(long, value_enum, default_value = "all")]
    pub stock: StockArg,

    /// Only show records with a non-zero glitch score.
    #[arg(long = "glitched-only")]
    pub glitched_only: bool,

    /// Column to sort by.
    #[arg(long, value_enum, default_value = "name")]
    pub sort: SortArg,

    /// Sort direction.
    #[arg(long, value_enum, default_value = "asc")]
    pub direction: DirectionArg,

    /// Page to show (out-of-range values clamp to the last page).
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Records per page.
    #[arg(long = "page-size", default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: usize,

    /// Output format.
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Parser)]
pub struct ShowArgs {
    /// Path to the catalog JSON file.
    #[arg(value_name = "CATALOG")]
    pub catalog: PathBuf,

    /// Record identifier.
    #[arg(value_name = "ID")]
    pub id: String,
}

#[derive(Parser)]
pub struct UpdateArgs {
    /// Path to the catalog JSON file.
    #[arg(value_name = "CATALOG")]
    pub catalog: PathBuf,

    /// Record identifier.
    #[arg(value_name = "ID")]
    pub id: String,

    /// New product name.
    #[arg(long)]
    pub name: Option<String>,

    /// New price. A numeric value is stored as a number; anything else is
    /// stored as the raw string (and will be penalized on normalization).
    #[arg(long)]
    pub price: Option<String>,

    /// New stock count.
    #[arg(long, allow_negative_numbers = true)]
    pub stock: Option<f64>,

    /// New category.
    #[arg(long)]
    pub category: Option<String>,

    /// New updatedAt timestamp.
    #[arg(long = "updated-at")]
    pub updated_at: Option<String>,

    /// Write the patched catalog back to the file.
    #[arg(long)]
    pub write: bool,
}

#[derive(Parser)]
pub struct CategoriesArgs {
    /// Path to the catalog JSON file.
    #[arg(value_name = "CATALOG")]
    pub catalog: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StockArg {
    All,
    InStock,
    OutOfStock,
}

impl From<StockArg> for StockFilter {
    fn from(arg: StockArg) -> Self {
        match arg {
            StockArg::All => StockFilter::All,
            StockArg::InStock => StockFilter::InStock,
            StockArg::OutOfStock => StockFilter::OutOfStock,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    Name,
    Price,
    GlitchScore,
}

impl From<SortArg> for SortColumn {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Name => SortColumn::Name,
            SortArg::Price => SortColumn::Price,
            SortArg::GlitchScore => SortColumn::GlitchScore,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DirectionArg {
    Asc,
    Desc,
}

impl From<DirectionArg> for SortDirection {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::Asc => SortDirection::Ascending,
            DirectionArg::Desc => SortDirection::Descending,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
