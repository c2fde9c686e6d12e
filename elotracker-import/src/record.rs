//! Record parsing for the three source shapes.
//!
//! Parsers are pure: they turn one line (or one split record) into the
//! semantic fields the merges consume, and report what they had to skip.
//! Nothing here touches the store.

use elotracker_core::{RatingAtPeriod, RatingCategory, TitleSet};
use serde_json::Value;
use thiserror::Error;

use crate::layout::{ColumnOffsetTable, DelimitedLayout};
use crate::period::SupplementMarker;

/// Title columns of a fixed-width list, in the order their codes are joined.
const TITLE_COLUMNS: &[&str] = &["tit", "wtit", "otit"];

/// Substrings that mark the birthday column.
const BIRTHDAY_MARKERS: &[&str] = &["birth", "b-day", "bday"];

// ── Fixed-width ─────────────────────────────────────────────────────────────

/// Fields of one fixed-width data line. Missing columns leave fields empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixedWidthRecord {
    pub member_id: String,
    pub name: String,
    /// Value of the column named after the file's own date token.
    pub rating: String,
    pub birthday: String,
    pub gender: String,
    pub federation: String,
    pub titles: TitleSet,
    pub games: String,
    pub flag: String,
}

/// Parse one data line against a file's offset table.
///
/// `rating_token` is the file's lower-cased date token; the column with that
/// exact name holds the rating. Returns the record and the names of columns
/// whose start lies past the end of `line`.
pub fn parse_fixed_width<'t>(
    table: &'t ColumnOffsetTable,
    line: &str,
    rating_token: &str,
) -> (FixedWidthRecord, Vec<&'t str>) {
    let mut record = FixedWidthRecord::default();
    let mut skipped = Vec::new();

    for column in table.columns() {
        let key = column.name.as_str();
        let Some(value) = column.extract(line) else {
            skipped.push(key);
            continue;
        };

        if key.contains("number") {
            record.member_id = value.to_string();
        }
        if key.contains("name") {
            record.name = value.to_string();
        }
        if key == rating_token {
            record.rating = value.to_string();
        }
        if key == "sex" {
            record.gender = value.to_string();
        }
        if BIRTHDAY_MARKERS.iter().any(|m| key.contains(m)) {
            record.birthday = value.to_string();
        }
        if TITLE_COLUMNS.contains(&key) {
            record.titles.add_code(value);
        }
        if key.contains("fed") {
            record.federation = value.to_string();
        }
        if key.contains("gms") {
            record.games = value.to_string();
        }
        if key == "flag" {
            record.flag = value.to_string();
        }
    }

    (record, skipped)
}

// ── Delimited ───────────────────────────────────────────────────────────────

fn field(fields: &[String], index: usize) -> &str {
    fields.get(index).map(|f| f.trim()).unwrap_or("")
}

/// Put a non-empty value into `row` for `category`.
fn supply(row: &mut RatingAtPeriod, category: RatingCategory, value: &str) {
    if !value.is_empty() {
        row.set(category, value);
    }
}

/// Fields of one line of a golden rating list (`rtglist.txt`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RatingListRecord {
    pub member_id: String,
    pub name: String,
    pub state: String,
    /// Federation of record: the FIDE federation column when present,
    /// otherwise the country column.
    pub country: String,
    pub active_flag: String,
    pub fide_id: String,
    /// Per-record supplement date column, when the line has one.
    pub supplement_date: Option<String>,
    pub ratings: RatingAtPeriod,
}

/// Parse a golden-list line split on tabs.
pub fn parse_rating_list(fields: &[String], new_layout_min_columns: usize) -> RatingListRecord {
    let layout = DelimitedLayout::detect(fields.len(), new_layout_min_columns);

    let fide_federation = field(fields, 7);
    let country = if fide_federation.is_empty() {
        field(fields, 3)
    } else {
        fide_federation
    };

    let mut ratings = RatingAtPeriod::new();
    for category in RatingCategory::ALL {
        supply(&mut ratings, category, field(fields, layout.rating_index(category)));
    }

    RatingListRecord {
        member_id: field(fields, 0).to_string(),
        name: field(fields, 1).to_string(),
        state: field(fields, 2).to_string(),
        country: country.to_string(),
        active_flag: field(fields, 5).to_string(),
        fide_id: field(fields, 6).to_string(),
        supplement_date: fields.get(8).map(|d| d.trim().to_string()),
        ratings,
    }
}

/// True for the title/header lines golden lists open with.
pub fn is_rating_list_header(fields: &[String]) -> bool {
    fields
        .iter()
        .any(|f| f.contains("rtglistdate") || f.contains("rtgreg"))
}

/// Fields of one line of a USCF supplement (`RS`/`RSQ`/`RSB`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SupplementRecord {
    pub member_id: String,
    /// Only the categories the file's marker owns.
    pub ratings: RatingAtPeriod,
}

/// Parse a supplement line split on tabs.
///
/// Column 5 is the quick rating, except in blitz-only files where it holds
/// the blitz rating.
pub fn parse_supplement(fields: &[String], marker: SupplementMarker) -> SupplementRecord {
    let mut ratings = RatingAtPeriod::new();
    supply(&mut ratings, RatingCategory::Regular, field(fields, 4));
    if marker == SupplementMarker::Blitz {
        supply(&mut ratings, RatingCategory::Blitz, field(fields, 5));
    } else {
        supply(&mut ratings, RatingCategory::Quick, field(fields, 5));
        supply(&mut ratings, RatingCategory::Blitz, field(fields, 6));
    }
    supply(&mut ratings, RatingCategory::OnlineRegular, field(fields, 7));
    supply(&mut ratings, RatingCategory::OnlineQuick, field(fields, 8));
    supply(&mut ratings, RatingCategory::OnlineBlitz, field(fields, 9));
    ratings.retain(marker.categories());

    SupplementRecord {
        member_id: field(fields, 1).to_string(),
        ratings,
    }
}

// ── JSON lines ──────────────────────────────────────────────────────────────

/// Why a crawler line was skipped.
#[derive(Debug, Error)]
pub enum CrawlerLineError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("line is not a JSON object")]
    NotObject,
    #[error("key '{0}' is not a string or number")]
    BadValue(String),
}

/// Recognised keys of one crawler line. Absent keys stay `None`.
///
/// The crawler's display name is not among them; members are named only by
/// the rating lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrawlerLine {
    pub event_id: Option<String>,
    pub event_name: Option<String>,
    pub event_date: Option<String>,
    pub event_location: Option<String>,
    pub num_players: Option<String>,
    pub num_sections: Option<String>,
    pub member_id: Option<String>,
    pub gender: Option<String>,
    pub state: Option<String>,
    pub fide_id: Option<String>,
    pub regular_rating: Option<String>,
    pub quick_rating: Option<String>,
    pub blitz_rating: Option<String>,
    pub online_regular_rating: Option<String>,
    pub online_quick_rating: Option<String>,
    pub online_blitz_rating: Option<String>,
    pub section: Option<String>,
    pub rating_type: Option<String>,
    pub old_rating: Option<String>,
    pub new_rating: Option<String>,
    pub result: Option<String>,
    pub opponent_id: Option<String>,
    pub round: Option<String>,
}

impl CrawlerLine {
    fn slot(&mut self, key: &str) -> Option<&mut Option<String>> {
        Some(match key {
            "event_id" => &mut self.event_id,
            "event_name" => &mut self.event_name,
            "event_date" => &mut self.event_date,
            "event_location" => &mut self.event_location,
            "num_players" => &mut self.num_players,
            "num_sections" => &mut self.num_sections,
            "member" | "id" => &mut self.member_id,
            "gender" => &mut self.gender,
            "state" => &mut self.state,
            "fide_id" => &mut self.fide_id,
            "regular_rating" => &mut self.regular_rating,
            "quick_rating" => &mut self.quick_rating,
            "blitz_rating" => &mut self.blitz_rating,
            "online_regular_rating" => &mut self.online_regular_rating,
            "online_quick_rating" => &mut self.online_quick_rating,
            "online_blitz_rating" => &mut self.online_blitz_rating,
            "section" => &mut self.section,
            "rating_type" => &mut self.rating_type,
            "old_rating" => &mut self.old_rating,
            "new_rating" => &mut self.new_rating,
            "result" => &mut self.result,
            "opponent_id" => &mut self.opponent_id,
            "round" => &mut self.round,
            _ => return None,
        })
    }

    /// The rating value this line carries for `category`.
    pub fn rating(&self, category: RatingCategory) -> Option<&str> {
        match category {
            RatingCategory::Regular => self.regular_rating.as_deref(),
            RatingCategory::Quick => self.quick_rating.as_deref(),
            RatingCategory::Blitz => self.blitz_rating.as_deref(),
            RatingCategory::OnlineRegular => self.online_regular_rating.as_deref(),
            RatingCategory::OnlineQuick => self.online_quick_rating.as_deref(),
            RatingCategory::OnlineBlitz => self.online_blitz_rating.as_deref(),
        }
    }
}

/// Parse one crawler line.
///
/// Missing values written as `: null` are rewritten to empty strings first.
/// Numbers become their decimal text; any other non-string value on a
/// recognised key rejects the line. Unrecognised keys are ignored.
pub fn parse_crawler_line(line: &str) -> Result<CrawlerLine, CrawlerLineError> {
    let line = line.replace(": null", ": \"\"");
    let Value::Object(map) = serde_json::from_str::<Value>(&line)? else {
        return Err(CrawlerLineError::NotObject);
    };

    let mut parsed = CrawlerLine::default();
    for (key, value) in map {
        let Some(slot) = parsed.slot(&key) else {
            continue;
        };
        let text = match value {
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            Value::Null => String::new(),
            _ => return Err(CrawlerLineError::BadValue(key)),
        };
        *slot = Some(text);
    }
    Ok(parsed)
}

#[cfg(test)]
#[path = "tests/record_tests.rs"]
mod tests;
