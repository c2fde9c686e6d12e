/// Counters for one ingestion run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ImportStats {
    pub files_scanned: u64,
    /// Files passed over by the exclusion list, suffix, filter or period range.
    pub files_skipped: u64,
    pub lines_read: u64,
    /// Lines dropped by a parse-skip (bad JSON, missing member id, bad value).
    pub lines_skipped: u64,
    /// Fixed-width fields left empty because their start offset was past the line end.
    pub fields_skipped: u64,
    pub members_written: u64,
    pub supplements_written: u64,
    /// Lines whose supplement write was skipped for want of a period.
    pub supplements_without_period: u64,
    pub events_written: u64,
    pub rating_changes_written: u64,
    pub game_results_written: u64,
}

impl ImportStats {
    /// Fold another run's counters into this one.
    pub fn absorb(&mut self, other: &ImportStats) {
        self.files_scanned += other.files_scanned;
        self.files_skipped += other.files_skipped;
        self.lines_read += other.lines_read;
        self.lines_skipped += other.lines_skipped;
        self.fields_skipped += other.fields_skipped;
        self.members_written += other.members_written;
        self.supplements_written += other.supplements_written;
        self.supplements_without_period += other.supplements_without_period;
        self.events_written += other.events_written;
        self.rating_changes_written += other.rating_changes_written;
        self.game_results_written += other.game_results_written;
    }

    /// One-line summary suitable for a completion message.
    pub fn summary(&self) -> String {
        let mut parts = vec![
            format!("{} files", self.files_scanned),
            format!("{} lines", self.lines_read),
        ];
        if self.members_written > 0 {
            parts.push(format!("{} members", self.members_written));
        }
        if self.supplements_written > 0 {
            parts.push(format!("{} supplements", self.supplements_written));
        }
        if self.events_written > 0 {
            parts.push(format!("{} events", self.events_written));
        }
        if self.rating_changes_written > 0 {
            parts.push(format!("{} rating changes", self.rating_changes_written));
        }
        if self.game_results_written > 0 {
            parts.push(format!("{} game results", self.game_results_written));
        }
        let skipped = self.lines_skipped + self.fields_skipped;
        if skipped > 0 {
            parts.push(format!(
                "{} lines / {} fields skipped",
                self.lines_skipped, self.fields_skipped
            ));
        }
        parts.join(", ")
    }
}
