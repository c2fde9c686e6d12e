use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use elotracker_core::Federation;
use elotracker_db::{USCF_EVENTS, USCF_MEMBER_NEW_RATING, USCF_MEMBER_WIN_LOSS, member_partition};
use elotracker_import::{EventPartitions, IngestContext, IngestOptions, ingest_crawler_file};

use super::{CliImportProgress, open_partition};
use crate::error::CliError;
use crate::settings::Settings;

/// Ingest crawler output into members, events, rating changes and results.
pub(crate) fn run_uscf_events(settings: &Settings, path: Option<PathBuf>) -> Result<(), CliError> {
    let path = path.unwrap_or_else(|| settings.inputs.uscf_events.clone());
    let data_dir = &settings.store.data_dir;

    let events = EventPartitions {
        events: open_partition(data_dir, USCF_EVENTS)?,
        new_ratings: open_partition(data_dir, USCF_MEMBER_NEW_RATING)?,
        win_loss: open_partition(data_dir, USCF_MEMBER_WIN_LOSS)?,
    };
    let ctx = IngestContext::new(Federation::Uscf, IngestOptions::default())
        .with_members(open_partition(data_dir, member_partition(Federation::Uscf))?)
        .with_events(events);

    log::info!(
        "{}",
        format!("USCF crawler output {}", path.display()).if_supports_color(Stdout, |t| t.bold()),
    );
    let progress = CliImportProgress::new("uscf-events");
    ingest_crawler_file(&ctx, &path, Some(&progress))?;
    Ok(())
}
