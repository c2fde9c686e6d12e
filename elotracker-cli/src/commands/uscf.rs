use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use elotracker_core::Federation;
use elotracker_db::{member_partition, supplement_partition};
use elotracker_import::{IngestContext, IngestOptions, ingest_rating_lists, ingest_supplements};

use super::{CliImportProgress, open_partition, period_range};
use crate::cli_types::{FilterArgs, PeriodArgs};
use crate::error::CliError;
use crate::settings::Settings;

/// Ingest golden rating lists in a period range.
pub(crate) fn run_uscf_latest(settings: &Settings, periods: PeriodArgs) -> Result<(), CliError> {
    let range = period_range(&periods)?;
    let root = periods
        .input
        .unwrap_or_else(|| settings.inputs.uscf_rating_lists.clone());
    let data_dir = &settings.store.data_dir;

    let options = IngestOptions::for_range(range.clone())
        .with_new_layout_min_columns(settings.delimited.new_layout_min_columns);
    let ctx = IngestContext::new(Federation::Uscf, options)
        .with_members(open_partition(data_dir, member_partition(Federation::Uscf))?)
        .with_supplements(open_partition(data_dir, supplement_partition(Federation::Uscf))?);

    log::info!(
        "{}",
        format!(
            "USCF rating lists {}..{} from {}",
            range.start(),
            range.end(),
            root.display()
        )
        .if_supports_color(Stdout, |t| t.bold()),
    );
    let progress = CliImportProgress::new("uscf-latest");
    ingest_rating_lists(&ctx, &root, Some(&progress))?;
    Ok(())
}

/// Ingest RS/RSQ/RSB supplements into history.
pub(crate) fn run_uscf_history(settings: &Settings, files: FilterArgs) -> Result<(), CliError> {
    let root = files
        .input
        .unwrap_or_else(|| settings.inputs.uscf_supplements.clone());

    let ctx = IngestContext::new(Federation::Uscf, IngestOptions::for_filter(files.filter))
        .with_supplements(open_partition(
            &settings.store.data_dir,
            supplement_partition(Federation::Uscf),
        )?);

    log::info!(
        "{}",
        format!("USCF supplements from {}", root.display()).if_supports_color(Stdout, |t| t.bold()),
    );
    let progress = CliImportProgress::new("uscf-history");
    ingest_supplements(&ctx, &root, Some(&progress))?;
    Ok(())
}
