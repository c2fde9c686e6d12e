//! Federation title abbreviations and per-line title accumulation.

/// Expand a short title code (e.g. `"WFM"`) to its full text.
///
/// Unknown codes are returned as-is; an empty code yields an empty string.
pub fn expand_title(code: &str) -> &str {
    match code.trim() {
        "GM" => "Grandmaster",
        "IM" => "International Master",
        "FM" => "FIDE Master",
        "CM" => "Candidate Master",
        "WGM" => "Woman Grandmaster",
        "WIM" => "Woman International Master",
        "WFM" => "Woman FIDE Master",
        "WCM" => "Woman Candidate Master",
        "AGM" => "Arena Grandmaster",
        "AIM" => "Arena International Master",
        "AFM" => "Arena FIDE Master",
        "ACM" => "Arena Candidate Master",
        other => other,
    }
}

/// Deduplicated, insertion-ordered set of expanded titles for one data line.
///
/// Several source columns (general, woman's, other title) may repeat the
/// same code; each distinct title is kept once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TitleSet {
    titles: Vec<String>,
}

impl TitleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expand `code` and add it unless empty or already present.
    pub fn add_code(&mut self, code: &str) {
        let title = expand_title(code);
        if title.is_empty() || self.titles.iter().any(|t| t == title) {
            return;
        }
        self.titles.push(title.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    /// Comma-joined titles, or `None` when no title was seen.
    pub fn joined(&self) -> Option<String> {
        if self.titles.is_empty() {
            None
        } else {
            Some(self.titles.join(","))
        }
    }
}
