//! FIDE fixed-width rating lists.
//!
//! Each file is named after its list date (`standard_mar24frl.txt`), opens
//! with a header line from which the column offsets are sniffed, and holds
//! one member per line. The rating column is the one whose header equals the
//! file's date token.

use std::path::Path;

use elotracker_core::{RatingAtPeriod, RatingCategory, normalize_country};

use crate::context::IngestContext;
use crate::error::ImportError;
use crate::layout::ColumnOffsetTable;
use crate::lines::SourceLines;
use crate::merge::{MemberUpdate, merge_member, merge_supplement};
use crate::period::{fide_period, fide_period_token};
use crate::progress::ImportProgress;
use crate::record::{FixedWidthRecord, parse_fixed_width};
use crate::scan::{file_name, is_fide_list, scan_dir};
use crate::stats::ImportStats;

/// What a FIDE run writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FideMode {
    /// Member snapshot plus supplement history.
    Latest,
    /// Supplement history only.
    History,
}

/// Ingest every eligible list under `root`.
///
/// Files are selected by name (`.txt`, not excluded), by the run's filename
/// filter, and by the run's period range.
pub fn ingest_fide_dir(
    ctx: &IngestContext,
    root: &Path,
    mode: FideMode,
    progress: Option<&dyn ImportProgress>,
) -> Result<ImportStats, ImportError> {
    let mut stats = ImportStats::default();
    let mut selected = Vec::new();

    for path in scan_dir(root)? {
        let name = file_name(&path);
        if !is_fide_list(&name) || !ctx.options().accepts_file_name(&name) {
            stats.files_skipped += 1;
            continue;
        }
        let token = fide_period_token(&name);
        let Some(period) = fide_period(&token, &ctx.options().century) else {
            log::warn!("No period in file name {}, skipping", path.display());
            stats.files_skipped += 1;
            continue;
        };
        if !ctx.options().accepts_period(&period) {
            log::debug!("Period {} of {} outside range", period, path.display());
            stats.files_skipped += 1;
            continue;
        }
        selected.push((path, token, period));
    }

    let total = selected.len();
    for (i, (path, token, period)) in selected.iter().enumerate() {
        if let Some(p) = progress {
            p.on_file(i + 1, total, path);
        }
        let category = RatingCategory::from_list_filename(&file_name(path));
        let file_stats = ingest_fide_file(ctx, path, token, period, category, mode, progress)?;
        stats.absorb(&file_stats);
    }

    if let Some(p) = progress {
        p.on_complete(&stats);
    }
    Ok(stats)
}

/// Ingest one list whose date token and period are already resolved.
pub fn ingest_fide_file(
    ctx: &IngestContext,
    path: &Path,
    token: &str,
    period: &str,
    category: RatingCategory,
    mode: FideMode,
    progress: Option<&dyn ImportProgress>,
) -> Result<ImportStats, ImportError> {
    let supplements = ctx.supplements()?;
    let members = match mode {
        FideMode::Latest => Some(ctx.members()?),
        FideMode::History => None,
    };

    let mut stats = ImportStats {
        files_scanned: 1,
        ..Default::default()
    };
    log::info!(
        "Ingesting {} ({} list, period {})",
        path.display(),
        category,
        period
    );

    let mut table = ColumnOffsetTable::default();
    for line in SourceLines::open(path)? {
        let (line_no, line) = line.map_err(|e| ImportError::io(path, e))?;

        if line_no == 1 {
            table = ColumnOffsetTable::from_header(&line);
            for column in table.columns() {
                log::debug!(
                    "  column '{}' start={} end={:?}",
                    column.name,
                    column.start,
                    column.end
                );
            }
            if table.get(token).is_none() {
                log::warn!(
                    "{}: no rating column named '{}'; ratings will be empty",
                    path.display(),
                    token
                );
            }
            continue;
        }
        if line.trim().is_empty() {
            continue;
        }
        stats.lines_read += 1;

        let (record, skipped) = parse_fixed_width(&table, &line, token);
        for column in &skipped {
            log::warn!(
                "{}:{}: column '{}' starts past end of line, skipped",
                path.display(),
                line_no,
                column
            );
        }
        stats.fields_skipped += skipped.len() as u64;

        if record.member_id.is_empty() {
            log::warn!("{}:{}: no member id, line skipped", path.display(), line_no);
            stats.lines_skipped += 1;
            continue;
        }

        if let Some(members) = members {
            merge_member(members, &record.member_id, &member_update(&record, category))?;
            stats.members_written += 1;
        }

        if !record.rating.is_empty() {
            let row = RatingAtPeriod::new().with(category, record.rating.as_str());
            merge_supplement(supplements, &record.member_id, period, &row)?;
            stats.supplements_written += 1;
        }

        if let Some(p) = progress {
            p.on_line(stats.lines_read);
        }
    }

    log::info!("  {}", stats.summary());
    Ok(stats)
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

fn member_update(record: &FixedWidthRecord, category: RatingCategory) -> MemberUpdate {
    MemberUpdate {
        name: non_empty(&record.name),
        country: non_empty(&normalize_country(&record.federation)),
        gender: non_empty(&record.gender),
        birthday: non_empty(&record.birthday),
        active_flag: non_empty(&record.flag),
        fide_title: record.titles.joined(),
        supp_ratings: vec![(category, record.rating.clone())],
        supp_games: non_empty(&record.games),
        ..Default::default()
    }
}
