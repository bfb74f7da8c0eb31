use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;

/// Log level options for CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    Off,
    /// Error messages only
    Error,
    /// Warnings and errors (default)
    Warn,
    /// Informational messages
    Info,
    /// Debug messages
    Debug,
    /// Trace-level messages (most verbose)
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::OFF,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

#[derive(Parser)]
#[command(name = "lattes")]
#[command(about = "lattes - batch reports over Lattes curriculum XML exports")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Set log level (off, error, warn, info, debug, trace)
    /// If not specified, uses RUST_LOG or defaults to 'warn'
    #[arg(short = 'l', long, global = true, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Enable verbose logging (shortcut for --log-level=debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path (defaults to ./lattes.toml when present)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Set output format (plain, json, table)
    #[arg(short = 'f', long, global = true, default_value = "plain")]
    pub format: String,

    /// Also write the report as a PDF to this path
    #[arg(short = 'o', long, global = true)]
    pub output: Option<PathBuf>,
}

impl Cli {
    /// Explicit level from the flags, if any; `--log-level` wins over `--verbose`
    pub fn level_filter(&self) -> Option<LevelFilter> {
        match (self.log_level, self.verbose) {
            (Some(level), _) => Some(level.into()),
            (None, true) => Some(LevelFilter::DEBUG),
            (None, false) => None,
        }
    }
}

/// Where the candidate curricula live
#[derive(Args, Debug, Clone, Default)]
pub struct DirArgs {
    /// Directory of Lattes XML files (overrides paths.candidate_dir)
    #[arg(short = 'd', long)]
    pub dir: Option<PathBuf>,

    /// Also scan subdirectories
    #[arg(short = 'r', long)]
    pub recursive: bool,
}

/// Advisor score kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScoreKind {
    /// Teaching, research and extension activity
    Engagement,
    /// Advising completion rates
    Quality,
    /// Committee work and co-authorship, normalized over the batch
    Reputation,
    /// Advising experience scaled by publication output
    Experience,
    /// Impact factor and percentile of published articles
    Production,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank curricula by knowledge-area similarity to a reference
    Similar {
        /// Reference curriculum (overrides paths.reference_path)
        #[arg(short = 'R', long)]
        reference: Option<PathBuf>,

        #[command(flatten)]
        input: DirArgs,
    },

    /// List knowledge areas by formation section
    Areas {
        #[command(flatten)]
        input: DirArgs,

        /// Print the distinct area, sub-area and specialty names instead
        #[arg(long)]
        distinct: bool,
    },

    /// Frequencies of declared areas of activity
    Activity {
        #[command(flatten)]
        input: DirArgs,
    },

    /// Concluded and in-progress advising with experience score
    Advising {
        #[command(flatten)]
        input: DirArgs,
    },

    /// Published articles and author frequencies
    Articles {
        #[command(flatten)]
        input: DirArgs,
    },

    /// Examining-committee participation
    Committees {
        #[command(flatten)]
        input: DirArgs,
    },

    /// Congress participation by year
    Events {
        #[command(flatten)]
        input: DirArgs,
    },

    /// Grouped curriculum summary with batch totals
    Summary {
        #[command(flatten)]
        input: DirArgs,
    },

    /// Advisor scores
    Score {
        #[arg(value_enum)]
        kind: ScoreKind,

        #[command(flatten)]
        input: DirArgs,
    },

    /// Every element name used in one file
    Tags {
        /// Lattes XML file
        file: PathBuf,
    },

    /// Count the Lattes IDs in a header-less CSV file
    CountIds {
        /// CSV file with one ID per row
        file: PathBuf,
    },
}
