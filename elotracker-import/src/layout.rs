//! Column layouts: the fixed-width offset table sniffed from a header line,
//! and the two positional layouts of tab-delimited rating lists.

use elotracker_core::RatingCategory;
use elotracker_core::util::slice_chars;

/// Spellings of the identifier column header, rewritten to one token so the
/// space inside them doesn't split the column.
const ID_HEADER_VARIANTS: &[&str] = &["ID Number", "ID number", "id number", "ID NUMBER"];
const ID_HEADER_TOKEN: &str = "id_number";

// ── Fixed-width ─────────────────────────────────────────────────────────────

/// One column's character span within every data line of a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpan {
    /// Lower-cased header token.
    pub name: String,
    /// First character offset, inclusive.
    pub start: usize,
    /// Last character offset, inclusive. `None` for the final column, which
    /// runs to the end of the line.
    pub end: Option<usize>,
}

impl ColumnSpan {
    /// Trimmed value of this column in `line`, or `None` when the line ends
    /// before the column starts.
    pub fn extract<'a>(&self, line: &'a str) -> Option<&'a str> {
        slice_chars(line, self.start, self.end).map(str::trim)
    }
}

/// Column spans of a fixed-width file, ordered by start offset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnOffsetTable {
    columns: Vec<ColumnSpan>,
}

impl ColumnOffsetTable {
    /// Build the table from a file's header line.
    ///
    /// Tokens are runs of non-space characters; each token's start is its
    /// own position in the scan, and each column ends one character before
    /// the next begins. A repeated token keeps only its later occurrence.
    pub fn from_header(header: &str) -> Self {
        let header = normalize_header(header);
        let mut columns: Vec<ColumnSpan> = Vec::new();
        let mut token = String::new();
        let mut token_start = 0;

        for (i, c) in header.chars().chain(std::iter::once(' ')).enumerate() {
            if c == ' ' {
                if !token.is_empty() {
                    push_column(&mut columns, std::mem::take(&mut token), token_start);
                }
            } else {
                if token.is_empty() {
                    token_start = i;
                }
                token.push(c);
            }
        }

        Self { columns }
    }

    pub fn columns(&self) -> &[ColumnSpan] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Column whose name is exactly `name`.
    pub fn get(&self, name: &str) -> Option<&ColumnSpan> {
        self.columns.iter().find(|c| c.name == name)
    }
}

fn push_column(columns: &mut Vec<ColumnSpan>, name: String, start: usize) {
    // The column physically before this token ends here, even when it is the
    // earlier occurrence about to be dropped.
    if let Some(prev) = columns.last_mut() {
        prev.end = Some(start.saturating_sub(1));
    }
    columns.retain(|c| c.name != name);
    columns.push(ColumnSpan {
        name,
        start,
        end: None,
    });
}

/// Rewrite identifier-header spellings to a single token and lower-case.
pub fn normalize_header(header: &str) -> String {
    let mut line = header.to_string();
    for variant in ID_HEADER_VARIANTS {
        line = line.replacen(variant, ID_HEADER_TOKEN, 1);
    }
    line.to_lowercase()
}

// ── Delimited ───────────────────────────────────────────────────────────────

/// Positional layout of a tab-delimited rating list, chosen per line by
/// field count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelimitedLayout {
    /// Current export: each rating is followed by a companion column.
    New,
    /// Older export: ratings in consecutive columns.
    Legacy,
}

impl DelimitedLayout {
    pub fn detect(field_count: usize, new_layout_min_columns: usize) -> Self {
        if field_count >= new_layout_min_columns {
            Self::New
        } else {
            Self::Legacy
        }
    }

    /// Field index holding the rating for `category`.
    pub fn rating_index(&self, category: RatingCategory) -> usize {
        let ordinal = match category {
            RatingCategory::Regular => 0,
            RatingCategory::Quick => 1,
            RatingCategory::Blitz => 2,
            RatingCategory::OnlineRegular => 3,
            RatingCategory::OnlineQuick => 4,
            RatingCategory::OnlineBlitz => 5,
        };
        match self {
            Self::New => 9 + ordinal * 2,
            Self::Legacy => 9 + ordinal,
        }
    }
}

#[cfg(test)]
#[path = "tests/layout_tests.rs"]
mod tests;
