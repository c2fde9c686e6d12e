//! Ingestion progress reporting.

use std::path::Path;

use crate::stats::ImportStats;

/// Lines between periodic progress reports.
pub const LINE_REPORT_INTERVAL: u64 = 100_000;

/// Trait for receiving ingestion progress updates.
pub trait ImportProgress {
    /// Called before each eligible file is processed.
    fn on_file(&self, current: usize, total: usize, path: &Path);

    /// Called after each data line, with the running line count for the file.
    fn on_line(&self, lines: u64);

    /// Called once the run has finished.
    fn on_complete(&self, stats: &ImportStats);
}

/// A no-op progress reporter that discards all updates.
pub struct SilentProgress;

impl ImportProgress for SilentProgress {
    fn on_file(&self, _current: usize, _total: usize, _path: &Path) {}
    fn on_line(&self, _lines: u64) {}
    fn on_complete(&self, _stats: &ImportStats) {}
}

/// A progress reporter that logs to the `log` crate.
pub struct LogProgress;

impl ImportProgress for LogProgress {
    fn on_file(&self, current: usize, total: usize, path: &Path) {
        log::info!("  [{}/{}] {}", current, total, path.display());
    }

    fn on_line(&self, lines: u64) {
        if lines.is_multiple_of(LINE_REPORT_INTERVAL) {
            log::info!("    line count = {}", lines);
        }
    }

    fn on_complete(&self, stats: &ImportStats) {
        log::info!("Done: {}", stats.summary());
    }
}
