//! Period keys: derivation from filenames and in-record dates, and the
//! inclusive range filter applied to directory scans.

use chrono::NaiveDate;
use elotracker_core::RatingCategory;

use crate::error::ImportError;

const MONTHS: [(&str, &str); 12] = [
    ("jan", "01"),
    ("feb", "02"),
    ("mar", "03"),
    ("apr", "04"),
    ("may", "05"),
    ("jun", "06"),
    ("jul", "07"),
    ("aug", "08"),
    ("sep", "09"),
    ("oct", "10"),
    ("nov", "11"),
    ("dec", "12"),
];

const LIST_PREFIXES: &[&str] = &["standard_", "rapid_", "blitz_"];
const LIST_SUFFIX: &str = "frl.txt";

/// Century prefix used when a run doesn't supply one.
pub const DEFAULT_CENTURY: &str = "20";

/// Marker preceding the period digits in golden rating-list directories.
const RATING_LIST_MARKER: &str = "ALLRTG";

// ── FIDE filenames ──────────────────────────────────────────────────────────

/// Date token of a FIDE rating-list filename: known prefix and suffix
/// stripped, lower-cased. `"standard_mar24frl.txt"` gives `"mar24"`.
///
/// The rating column in the file's header carries the same token.
pub fn fide_period_token(filename: &str) -> String {
    let mut token = filename;
    for prefix in LIST_PREFIXES {
        if let Some(rest) = token.strip_prefix(prefix) {
            token = rest;
            break;
        }
    }
    let token = token
        .strip_suffix(LIST_SUFFIX)
        .or_else(|| token.strip_suffix(".txt"))
        .unwrap_or(token);
    token.to_lowercase()
}

/// `YYYYMM` period of a date token such as `"mar24"`.
///
/// The month name must be followed by exactly two year digits.
pub fn fide_period(token: &str, century: &str) -> Option<String> {
    let (idx, month) = MONTHS
        .iter()
        .filter_map(|(name, num)| token.find(name).map(|idx| (idx, *num)))
        .min_by_key(|(idx, _)| *idx)?;
    let year = &token[idx + 3..];
    if year.len() != 2 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(format!("{century}{year}{month}"))
}

// ── USCF paths ──────────────────────────────────────────────────────────────

/// Period of a golden rating list, from the `ALLRTG<yymm>` directory in its
/// path. `".../ALLRTG2403/rtglist.txt"` gives `"202403"`.
pub fn rating_list_period(path: &str) -> Option<String> {
    let idx = path.find(RATING_LIST_MARKER)?;
    let digits = leading_digits(&path[idx + RATING_LIST_MARKER.len()..]);
    if digits.is_empty() {
        return None;
    }
    Some(format!("{DEFAULT_CENTURY}{digits}"))
}

/// Which categories a USCF supplement file owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupplementMarker {
    /// `RS`: the full supplement, all categories.
    All,
    /// `RSQ`: quick ratings only.
    Quick,
    /// `RSB`: blitz ratings only.
    Blitz,
}

impl SupplementMarker {
    fn text(&self) -> &'static str {
        match self {
            Self::All => "RS",
            Self::Quick => "RSQ",
            Self::Blitz => "RSB",
        }
    }

    pub fn categories(&self) -> &'static [RatingCategory] {
        match self {
            Self::All => &RatingCategory::ALL,
            Self::Quick => &[RatingCategory::Quick],
            Self::Blitz => &[RatingCategory::Blitz],
        }
    }
}

/// Marker and period of a USCF supplement file, from its path.
///
/// `RSQ` and `RSB` are looked for before the plain `RS`; a marker only
/// counts when digits follow it. The period is `"20"` followed by those
/// digits.
pub fn supplement_period(path: &str) -> Option<(SupplementMarker, String)> {
    [
        SupplementMarker::Quick,
        SupplementMarker::Blitz,
        SupplementMarker::All,
    ]
    .into_iter()
    .find_map(|marker| {
        path.match_indices(marker.text()).find_map(|(idx, text)| {
            let digits = leading_digits(&path[idx + text.len()..]);
            (!digits.is_empty()).then(|| (marker, format!("{DEFAULT_CENTURY}{digits}")))
        })
    })
}

/// `YYYYMM` from an in-record `YYYY-MM...` date. Empty or malformed dates
/// have no period.
pub fn record_period(date: &str) -> Option<String> {
    let date = date.trim();
    let bytes = date.as_bytes();
    if bytes.len() < 7
        || bytes[4] != b'-'
        || !bytes[..4].iter().all(u8::is_ascii_digit)
        || !bytes[5..7].iter().all(u8::is_ascii_digit)
    {
        return None;
    }
    Some(format!("{}{}", &date[..4], &date[5..7]))
}

fn leading_digits(s: &str) -> &str {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    &s[..end]
}

// ── Range filter ────────────────────────────────────────────────────────────

/// Check a `YYYYMM` argument names a real month.
pub fn validate_period(period: &str) -> Result<(), ImportError> {
    if period.len() != 6 || !period.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ImportError::InvalidPeriod(period.to_string()));
    }
    NaiveDate::parse_from_str(&format!("{period}01"), "%Y%m%d")
        .map(|_| ())
        .map_err(|_| ImportError::InvalidPeriod(period.to_string()))
}

/// Inclusive range of `YYYYMM` period keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodRange {
    start: String,
    end: String,
}

impl PeriodRange {
    /// Range from `start` to `end`; a missing end means `start` alone.
    pub fn new(start: &str, end: Option<&str>) -> Result<Self, ImportError> {
        validate_period(start)?;
        let end = end.unwrap_or(start);
        validate_period(end)?;
        Ok(Self {
            start: start.to_string(),
            end: end.to_string(),
        })
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn end(&self) -> &str {
        &self.end
    }

    /// Century prefix implied by the start period (`"202508"` gives `"20"`).
    pub fn century(&self) -> &str {
        &self.start[..2]
    }

    pub fn contains(&self, period: &str) -> bool {
        period >= self.start.as_str() && period <= self.end.as_str()
    }
}

#[cfg(test)]
#[path = "tests/period_tests.rs"]
mod tests;
