//! USCF tab-delimited exports: golden rating lists and supplements.
//!
//! Neither format has a usable header; fields are bound by position.

use std::fs::File;
use std::path::Path;

use csv::ByteRecord;

use elotracker_core::{RatingCategory, normalize_country};

use crate::context::IngestContext;
use crate::error::ImportError;
use crate::merge::{MemberUpdate, merge_member, merge_supplement};
use crate::period::{SupplementMarker, rating_list_period, record_period, supplement_period};
use crate::progress::ImportProgress;
use crate::record::{RatingListRecord, is_rating_list_header, parse_rating_list, parse_supplement};
use crate::scan::{file_name, is_rating_list, is_uscf_supplement, scan_dir};
use crate::stats::ImportStats;

fn tab_reader(path: &Path) -> Result<csv::Reader<File>, ImportError> {
    Ok(csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_path(path)?)
}

/// Fields of one tab-split record, with its 1-based line number.
///
/// Fields are decoded lossily; a trailing `\r` never reaches a field.
fn record_fields(record: &ByteRecord) -> (u64, Vec<String>) {
    let line = record.position().map(|p| p.line()).unwrap_or_default();
    let fields = record
        .iter()
        .map(|f| String::from_utf8_lossy(f).into_owned())
        .collect();
    (line, fields)
}

// ── Golden rating lists ─────────────────────────────────────────────────────

/// Ingest every `rtglist.txt` under `root` whose `ALLRTG<yymm>` period lies
/// in the run's range.
pub fn ingest_rating_lists(
    ctx: &IngestContext,
    root: &Path,
    progress: Option<&dyn ImportProgress>,
) -> Result<ImportStats, ImportError> {
    let mut stats = ImportStats::default();
    let mut selected = Vec::new();

    for path in scan_dir(root)? {
        let name = file_name(&path);
        let path_text = path.to_string_lossy().into_owned();
        if !is_rating_list(&name) || !ctx.options().accepts_file_name(&name) {
            stats.files_skipped += 1;
            continue;
        }
        let Some(period) = rating_list_period(&path_text) else {
            log::warn!("No ALLRTG period in {}, skipping", path.display());
            stats.files_skipped += 1;
            continue;
        };
        if !ctx.options().accepts_period(&period) {
            log::debug!("Period {} of {} outside range", period, path.display());
            stats.files_skipped += 1;
            continue;
        }
        selected.push((path, period));
    }

    let total = selected.len();
    for (i, (path, period)) in selected.iter().enumerate() {
        if let Some(p) = progress {
            p.on_file(i + 1, total, path);
        }
        stats.absorb(&ingest_rating_list_file(ctx, path, period, progress)?);
    }

    if let Some(p) = progress {
        p.on_complete(&stats);
    }
    Ok(stats)
}

/// Ingest one golden list with file period `period`.
///
/// A line's own supplement date column, when present, replaces the file
/// period for its supplement write; an empty date skips that write.
pub fn ingest_rating_list_file(
    ctx: &IngestContext,
    path: &Path,
    period: &str,
    progress: Option<&dyn ImportProgress>,
) -> Result<ImportStats, ImportError> {
    let members = ctx.members()?;
    let supplements = ctx.supplements()?;
    let min_columns = ctx.options().new_layout_min_columns;

    let mut stats = ImportStats {
        files_scanned: 1,
        ..Default::default()
    };
    log::info!("Ingesting {} (period {})", path.display(), period);

    let mut reader = tab_reader(path)?;
    let mut raw = ByteRecord::new();
    while reader.read_byte_record(&mut raw)? {
        let (line_no, fields) = record_fields(&raw);
        if is_rating_list_header(&fields) {
            log::debug!("{}:{}: header line skipped", path.display(), line_no);
            continue;
        }
        stats.lines_read += 1;

        let record = parse_rating_list(&fields, min_columns);
        if record.member_id.is_empty() {
            log::warn!("{}:{}: no member id, line skipped", path.display(), line_no);
            stats.lines_skipped += 1;
            continue;
        }

        merge_member(members, &record.member_id, &rating_list_update(&record))?;
        stats.members_written += 1;

        let line_period = match &record.supplement_date {
            Some(date) => record_period(date),
            None => Some(period.to_string()),
        };
        match line_period {
            Some(line_period) => {
                merge_supplement(supplements, &record.member_id, &line_period, &record.ratings)?;
                stats.supplements_written += 1;
            }
            None => stats.supplements_without_period += 1,
        }

        if let Some(p) = progress {
            p.on_line(stats.lines_read);
        }
    }

    log::info!("  {}", stats.summary());
    Ok(stats)
}

fn rating_list_update(record: &RatingListRecord) -> MemberUpdate {
    let supp_ratings = RatingCategory::OVER_THE_BOARD
        .iter()
        .filter_map(|c| record.ratings.get(*c).map(|v| (*c, v.to_string())))
        .collect();
    MemberUpdate {
        name: Some(record.name.clone()),
        title_case_name: true,
        country: Some(normalize_country(&record.country)),
        state: Some(record.state.clone()),
        active_flag: Some(record.active_flag.clone()),
        fide_id: Some(record.fide_id.clone()),
        supp_ratings,
        ..Default::default()
    }
}

// ── Supplements ─────────────────────────────────────────────────────────────

/// Ingest every `RS`/`RSQ`/`RSB` supplement under `root` that passes the
/// run's filename filter.
pub fn ingest_supplements(
    ctx: &IngestContext,
    root: &Path,
    progress: Option<&dyn ImportProgress>,
) -> Result<ImportStats, ImportError> {
    let mut stats = ImportStats::default();
    let mut selected = Vec::new();

    for path in scan_dir(root)? {
        let name = file_name(&path);
        let path_text = path.to_string_lossy().into_owned();
        if !is_uscf_supplement(&name) || !ctx.options().accepts_file_name(&name) {
            stats.files_skipped += 1;
            continue;
        }
        let Some((marker, period)) = supplement_period(&path_text) else {
            log::warn!("No RS/RSQ/RSB period in {}, skipping", path.display());
            stats.files_skipped += 1;
            continue;
        };
        if !ctx.options().accepts_period(&period) {
            stats.files_skipped += 1;
            continue;
        }
        selected.push((path, marker, period));
    }

    let total = selected.len();
    for (i, (path, marker, period)) in selected.iter().enumerate() {
        if let Some(p) = progress {
            p.on_file(i + 1, total, path);
        }
        stats.absorb(&ingest_supplement_file(ctx, path, *marker, period, progress)?);
    }

    if let Some(p) = progress {
        p.on_complete(&stats);
    }
    Ok(stats)
}

/// Ingest one supplement; only the marker's categories are merged.
pub fn ingest_supplement_file(
    ctx: &IngestContext,
    path: &Path,
    marker: SupplementMarker,
    period: &str,
    progress: Option<&dyn ImportProgress>,
) -> Result<ImportStats, ImportError> {
    let supplements = ctx.supplements()?;
    let mut stats = ImportStats {
        files_scanned: 1,
        ..Default::default()
    };
    log::info!(
        "Ingesting {} ({:?} supplement, period {})",
        path.display(),
        marker,
        period
    );

    let mut reader = tab_reader(path)?;
    let mut raw = ByteRecord::new();
    while reader.read_byte_record(&mut raw)? {
        let (line_no, fields) = record_fields(&raw);
        stats.lines_read += 1;
        let record = parse_supplement(&fields, marker);
        if record.member_id.is_empty() {
            log::warn!("{}:{}: no member id, line skipped", path.display(), line_no);
            stats.lines_skipped += 1;
            continue;
        }
        if record.ratings.is_empty() {
            continue;
        }
        merge_supplement(supplements, &record.member_id, period, &record.ratings)?;
        stats.supplements_written += 1;

        if let Some(p) = progress {
            p.on_line(stats.lines_read);
        }
    }

    log::info!("  {}", stats.summary());
    Ok(stats)
}
