//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use elotracker_core::Federation;

#[derive(Parser)]
#[command(name = "elotracker")]
#[command(about = "Ingest FIDE and USCF rating exports into the member store", long_about = None)]
#[command(version)]
pub(crate) struct Cli {
    /// Settings file to use instead of ~/.config/elotracker/settings.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the primary store partitions
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Inclusive YYYYMM range for range-filtered runs.
#[derive(Args, Clone)]
pub(crate) struct PeriodArgs {
    /// First period to ingest (YYYYMM)
    pub start: String,

    /// Last period to ingest (YYYYMM, defaults to start)
    pub end: Option<String>,

    /// Input directory (overrides the settings file)
    #[arg(long)]
    pub input: Option<PathBuf>,
}

/// Filename-filtered runs over a whole input directory.
#[derive(Args, Clone)]
pub(crate) struct FilterArgs {
    /// Only ingest files whose name contains this text
    pub filter: Option<String>,

    /// Input directory (overrides the settings file)
    #[arg(long)]
    pub input: Option<PathBuf>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Ingest FIDE rating lists into member snapshots and supplement history
    FideLatest {
        #[command(flatten)]
        periods: PeriodArgs,
    },

    /// Ingest FIDE rating lists into supplement history only
    FideHistory {
        #[command(flatten)]
        files: FilterArgs,
    },

    /// Ingest USCF golden rating lists (ALLRTG<yymm>/rtglist.txt)
    UscfLatest {
        #[command(flatten)]
        periods: PeriodArgs,
    },

    /// Ingest USCF RS/RSQ/RSB supplements into supplement history
    UscfHistory {
        #[command(flatten)]
        files: FilterArgs,
    },

    /// Ingest USCF crawler output (JSON lines)
    UscfEvents {
        /// Crawler output file (overrides the settings file)
        path: Option<PathBuf>,
    },

    /// Show a member and their supplement history from the read replicas
    Lookup {
        /// Federation (fide, uscf)
        federation: Federation,

        /// Member id
        id: String,
    },

    /// Show or locate the settings file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the effective settings
    Show,

    /// Print the settings file path
    Path,
}
