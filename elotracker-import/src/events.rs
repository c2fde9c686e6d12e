//! USCF crawler output: one flat JSON object per line.
//!
//! A line can describe a member profile, an event, a rating change, a game
//! result, or several of these at once; each kind is recognised by a marker
//! key and written to its own partition.

use std::path::Path;

use elotracker_core::{Event, EventRating, RatingCategory, WinLoss};

use crate::context::IngestContext;
use crate::error::ImportError;
use crate::lines::SourceLines;
use crate::merge::{MemberUpdate, merge_member, upsert_event, upsert_new_rating, upsert_win_loss};
use crate::progress::ImportProgress;
use crate::record::{CrawlerLine, parse_crawler_line};
use crate::stats::ImportStats;

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

/// Ingest a crawler JSON-lines file.
///
/// Lines that aren't valid JSON, or carry a non-string value on a
/// recognised key, are skipped with a warning.
pub fn ingest_crawler_file(
    ctx: &IngestContext,
    path: &Path,
    progress: Option<&dyn ImportProgress>,
) -> Result<ImportStats, ImportError> {
    let members = ctx.members()?;
    let partitions = ctx.events()?;

    let mut stats = ImportStats::default();
    if !path.is_file() {
        log::warn!("Crawler output {} does not exist", path.display());
        return Ok(stats);
    }
    stats.files_scanned = 1;
    if let Some(p) = progress {
        p.on_file(1, 1, path);
    }
    log::info!("Ingesting {}", path.display());

    for line in SourceLines::open(path)? {
        let (line_no, line) = line.map_err(|e| ImportError::io(path, e))?;
        if line.trim().is_empty() {
            continue;
        }
        stats.lines_read += 1;

        let parsed = match parse_crawler_line(&line) {
            Ok(parsed) => parsed,
            Err(e) => {
                log::warn!("{}:{}: {}, line skipped", path.display(), line_no, e);
                stats.lines_skipped += 1;
                continue;
            }
        };
        let member_id = text(&parsed.member_id);
        let event_id = text(&parsed.event_id);

        if parsed.gender.is_some() {
            if member_id.is_empty() {
                log::warn!("{}:{}: profile without member id", path.display(), line_no);
                stats.lines_skipped += 1;
                continue;
            }
            merge_member(members, &member_id, &profile_update(&parsed))?;
            stats.members_written += 1;
        }

        if parsed.event_date.is_some() && !event_id.is_empty() {
            upsert_event(&partitions.events, &event(&parsed))?;
            stats.events_written += 1;
        }

        if parsed.new_rating.is_some() && !member_id.is_empty() {
            let rating = EventRating {
                event_id: event_id.clone(),
                section: text(&parsed.section),
                rating_type: text(&parsed.rating_type),
                old_rating: text(&parsed.old_rating),
                new_rating: text(&parsed.new_rating),
            };
            upsert_new_rating(&partitions.new_ratings, &member_id, rating)?;
            stats.rating_changes_written += 1;
        }

        if parsed.result.is_some() && !member_id.is_empty() {
            let result = WinLoss {
                round: text(&parsed.round),
                result: text(&parsed.result),
                opponent_id: text(&parsed.opponent_id),
            };
            upsert_win_loss(&partitions.win_loss, &member_id, &event_id, result)?;
            stats.game_results_written += 1;
        }

        if let Some(p) = progress {
            p.on_line(stats.lines_read);
        }
    }

    if let Some(p) = progress {
        p.on_complete(&stats);
    }
    Ok(stats)
}

fn profile_update(line: &CrawlerLine) -> MemberUpdate {
    let ratings = RatingCategory::ALL
        .iter()
        .filter_map(|c| line.rating(*c).map(|v| (*c, v.to_string())))
        .collect();
    MemberUpdate {
        gender: line.gender.clone(),
        state: line.state.clone(),
        fide_id: line.fide_id.clone(),
        ratings,
        ..Default::default()
    }
}

fn event(line: &CrawlerLine) -> Event {
    Event {
        id: text(&line.event_id),
        name: text(&line.event_name),
        date: text(&line.event_date),
        location: text(&line.event_location),
        num_sections: text(&line.num_sections),
        num_players: text(&line.num_players),
    }
}
