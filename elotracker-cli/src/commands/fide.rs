use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use elotracker_core::Federation;
use elotracker_db::{member_partition, supplement_partition};
use elotracker_import::{FideMode, IngestContext, IngestOptions, ingest_fide_dir};

use super::{CliImportProgress, open_partition, period_range};
use crate::cli_types::{FilterArgs, PeriodArgs};
use crate::error::CliError;
use crate::settings::Settings;

/// Ingest FIDE lists in a period range into member snapshots and history.
pub(crate) fn run_fide_latest(settings: &Settings, periods: PeriodArgs) -> Result<(), CliError> {
    let range = period_range(&periods)?;
    let root = periods
        .input
        .unwrap_or_else(|| settings.inputs.fide_supplements.clone());
    let data_dir = &settings.store.data_dir;

    let ctx = IngestContext::new(Federation::Fide, IngestOptions::for_range(range.clone()))
        .with_members(open_partition(data_dir, member_partition(Federation::Fide))?)
        .with_supplements(open_partition(data_dir, supplement_partition(Federation::Fide))?);

    log::info!(
        "{}",
        format!(
            "FIDE lists {}..{} from {}",
            range.start(),
            range.end(),
            root.display()
        )
        .if_supports_color(Stdout, |t| t.bold()),
    );
    let progress = CliImportProgress::new("fide-latest");
    ingest_fide_dir(&ctx, &root, FideMode::Latest, Some(&progress))?;
    Ok(())
}

/// Ingest every FIDE list (optionally filtered by path) into history only.
pub(crate) fn run_fide_history(settings: &Settings, files: FilterArgs) -> Result<(), CliError> {
    let root = files
        .input
        .unwrap_or_else(|| settings.inputs.fide_supplements.clone());

    let ctx = IngestContext::new(Federation::Fide, IngestOptions::for_filter(files.filter))
        .with_supplements(open_partition(
            &settings.store.data_dir,
            supplement_partition(Federation::Fide),
        )?);

    log::info!(
        "{}",
        format!("FIDE history from {}", root.display()).if_supports_color(Stdout, |t| t.bold()),
    );
    let progress = CliImportProgress::new("fide-history");
    ingest_fide_dir(&ctx, &root, FideMode::History, Some(&progress))?;
    Ok(())
}
