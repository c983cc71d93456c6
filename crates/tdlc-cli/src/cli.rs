//! CLI argument definitions for the `tdlc` tool.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "tdlc",
    version,
    about = "TDLC case timelines - How long does the tribunal take to rule?",
    long_about = "Analyze case timelines of the Tribunal de Defensa de la Libre Competencia.\n\n\
                  Reads the scraped hearing calendar and case detail CSV files and reports\n\
                  average days to ruling, trends, pending cases and upcoming hearings."
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

    /// Folder holding the scraped CSV files.
    #[arg(
        long = "data-dir",
        value_name = "DIR",
        default_value = "data",
        global = true
    )]
    pub data_dir: PathBuf,

    /// Result format on stdout.
    #[arg(long = "format", value_enum, default_value = "table", global = true)]
    pub format: OutputFormatArg,

    /// Also write the JSON result to this file.
    #[arg(long = "output", value_name = "PATH", global = true)]
    pub output: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Average days to ruling, grouped by procedure, month or quarter.
    Averages(AveragesArgs),

    /// Days to ruling per case, in ruling-date order.
    Evolution(SeriesArgs),

    /// Mean days to ruling per ruling quarter.
    Quarterly(TrendArgs),

    /// Heard cases still awaiting a ruling, with the estimated wait.
    Awaiting(AwaitingArgs),

    /// Hearing calendar with days until each hearing.
    Calendar(CalendarArgs),

    /// Number of distinct cases and how many have a ruling.
    Totals,

    /// Cases and filings of the daily status bulletin.
    Daily(DailyArgs),

    /// Normalize two dates and classify the days between them.
    Classify(ClassifyArgs),
}

/// Case selection shared by the duration analyses.
#[derive(Args, Clone)]
pub struct FilterArgs {
    /// Earliest ruling date (DD-MM-YYYY or YYYY-MM-DD).
    #[arg(long = "from", value_name = "DATE")]
    pub from: Option<String>,

    /// Latest ruling date (DD-MM-YYYY or YYYY-MM-DD).
    #[arg(long = "to", value_name = "DATE")]
    pub to: Option<String>,

    /// Procedure type to keep ("todos" keeps every procedure).
    #[arg(long = "procedure", value_name = "NAME", default_value = "todos")]
    pub procedure: String,

    /// Event the duration is measured from.
    #[arg(long = "basis", value_enum, default_value = "hearing")]
    pub basis: BasisArg,

    /// Only count hearings whose status says they were held.
    #[arg(long = "held-only")]
    pub held_only: bool,
}

/// Ladder selection.
#[derive(Args, Clone)]
pub struct LadderArgs {
    /// Built-in ladder used to bucket day counts.
    #[arg(long = "ladder", value_enum)]
    pub ladder: Option<LadderArg>,

    /// JSON file with a custom ladder (overrides --ladder).
    #[arg(long = "ladder-file", value_name = "PATH")]
    pub ladder_file: Option<PathBuf>,
}

#[derive(Parser)]
pub struct AveragesArgs {
    #[command(flatten)]
    pub filters: FilterArgs,

    #[command(flatten)]
    pub ladder: LadderArgs,

    /// Grouping of the averages.
    #[arg(long = "group-by", value_enum, default_value = "procedure")]
    pub group_by: GroupByArg,

    /// Print only the global mean (two decimals) and the case count.
    #[arg(long = "mean-only", conflicts_with_all = ["ladder", "ladder_file"])]
    pub mean_only: bool,
}

#[derive(Parser)]
pub struct SeriesArgs {
    #[command(flatten)]
    pub filters: FilterArgs,

    #[command(flatten)]
    pub ladder: LadderArgs,

    /// Emit chart labels and datasets instead of rows.
    #[arg(long = "chart", conflicts_with_all = ["ladder", "ladder_file"])]
    pub chart: bool,
}

#[derive(Parser)]
pub struct TrendArgs {
    #[command(flatten)]
    pub filters: FilterArgs,

    /// Emit chart labels and datasets instead of rows.
    #[arg(long = "chart")]
    pub chart: bool,
}

#[derive(Parser)]
pub struct AwaitingArgs {
    #[command(flatten)]
    pub ladder: LadderArgs,

    /// Procedure type to keep ("todos" keeps every procedure).
    #[arg(long = "procedure", value_name = "NAME", default_value = "todos")]
    pub procedure: String,

    /// Date to count from instead of the current date.
    #[arg(long = "today", value_name = "DATE")]
    pub today: Option<String>,
}

#[derive(Parser)]
pub struct CalendarArgs {
    /// Earliest hearing date.
    #[arg(long = "from", value_name = "DATE")]
    pub from: Option<String>,

    /// Latest hearing date.
    #[arg(long = "to", value_name = "DATE")]
    pub to: Option<String>,

    /// Hearing type to keep; repeat for several ("__ALL__" keeps every type).
    #[arg(long = "kind", value_name = "TYPE")]
    pub kinds: Vec<String>,

    /// Hearing status to keep; repeat for several ("__ALL__" keeps every status).
    #[arg(long = "status", value_name = "STATUS")]
    pub statuses: Vec<String>,

    /// Include hearings that already took place.
    #[arg(long = "include-past")]
    pub include_past: bool,

    /// Text to look for in the case role or caption.
    #[arg(long = "search", value_name = "TEXT")]
    pub search: Option<String>,

    /// Built-in ladder used to bucket the countdown.
    #[arg(long = "ladder", value_enum, default_value = "countdown")]
    pub ladder: LadderArg,

    /// JSON file with a custom ladder (overrides --ladder).
    #[arg(long = "ladder-file", value_name = "PATH")]
    pub ladder_file: Option<PathBuf>,

    /// Date to count from instead of the current date.
    #[arg(long = "today", value_name = "DATE")]
    pub today: Option<String>,
}

#[derive(Parser)]
pub struct DailyArgs {
    /// Keep only cases published on this date.
    #[arg(long = "date", value_name = "DATE")]
    pub date: Option<String>,
}

#[derive(Parser)]
pub struct ClassifyArgs {
    /// Reference date (DD-MM-YYYY or YYYY-MM-DD).
    #[arg(value_name = "REFERENCE")]
    pub reference: String,

    /// Outcome date (DD-MM-YYYY or YYYY-MM-DD).
    #[arg(value_name = "OUTCOME")]
    pub outcome: String,

    #[command(flatten)]
    pub ladder: LadderArgs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum BasisArg {
    /// Latest "vista" or public hearing.
    Hearing,
    /// First procedural filing.
    FirstFiling,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LadderArg {
    /// Days until an event: past, within a week, within a month, ...
    Countdown,
    /// Days since an event: urgent, soon, ample.
    Elapsed,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum GroupByArg {
    Procedure,
    Month,
    Quarter,
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
