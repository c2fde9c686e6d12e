pub(crate) mod config;
pub(crate) mod events;
pub(crate) mod fide;
pub(crate) mod lookup;
pub(crate) mod uscf;

use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use elotracker_db::Partition;
use elotracker_import::progress::LINE_REPORT_INTERVAL;
use elotracker_import::{ImportProgress, ImportStats, PeriodRange};

use crate::cli_types::PeriodArgs;
use crate::error::CliError;

/// Open a primary partition, logging where it lives.
pub(crate) fn open_partition(data_dir: &Path, name: &str) -> Result<Partition, CliError> {
    let partition = Partition::open(data_dir, name)?;
    if let Some(path) = partition.path() {
        log::debug!("  {} -> {}", name, path.display());
    }
    Ok(partition)
}

/// Validate the positional period arguments.
pub(crate) fn period_range(args: &PeriodArgs) -> Result<PeriodRange, CliError> {
    PeriodRange::new(&args.start, args.end.as_deref()).map_err(|e| CliError::usage(e.to_string()))
}

/// CLI progress reporter for ingestion runs.
pub(crate) struct CliImportProgress {
    label: String,
}

impl CliImportProgress {
    pub(crate) fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
        }
    }
}

impl ImportProgress for CliImportProgress {
    fn on_file(&self, current: usize, total: usize, path: &Path) {
        log::info!(
            "  {} [{}/{}] {}",
            self.label.if_supports_color(Stdout, |t| t.dimmed()),
            current,
            total,
            path.display(),
        );
    }

    fn on_line(&self, lines: u64) {
        // Report every 100k lines to avoid spam
        if lines.is_multiple_of(LINE_REPORT_INTERVAL) {
            log::info!(
                "    {} {} lines",
                self.label.if_supports_color(Stdout, |t| t.dimmed()),
                lines,
            );
        }
    }

    fn on_complete(&self, stats: &ImportStats) {
        let mark = if stats.lines_skipped + stats.fields_skipped > 0 {
            "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()).to_string()
        } else {
            "\u{2714}".if_supports_color(Stdout, |t| t.green()).to_string()
        };
        log::info!(
            "{} {}: {}",
            mark,
            self.label.if_supports_color(Stdout, |t| t.bold()),
            stats.summary(),
        );
        if stats.files_skipped > 0 {
            log::info!("  {} files not selected", stats.files_skipped);
        }
        if stats.supplements_without_period > 0 {
            log::info!(
                "  {} supplement writes skipped for missing period",
                stats.supplements_without_period,
            );
        }
    }
}
