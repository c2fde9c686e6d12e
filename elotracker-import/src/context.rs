//! Per-run ingestion context: the open partitions plus run options.
//!
//! Built once by the caller and passed by reference to every driver and
//! merge. Drivers ask for the partitions they need and fail with
//! [`ImportError::PartitionNotOpen`] when the run didn't open one.

use elotracker_core::Federation;
use elotracker_db::Partition;

use crate::error::ImportError;
use crate::period::{DEFAULT_CENTURY, PeriodRange};

/// Field count at or above which a golden-list line uses the new layout.
pub const DEFAULT_NEW_LAYOUT_MIN_COLUMNS: usize = 19;

/// Options shared by every driver in a run.
#[derive(Debug, Clone)]
pub struct IngestOptions {
    /// Inclusive period range; files outside it are skipped.
    pub range: Option<PeriodRange>,
    /// Century prefix for two-digit years in FIDE filenames.
    pub century: String,
    /// Only files whose name contains this substring are processed.
    pub filter: Option<String>,
    pub new_layout_min_columns: usize,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            range: None,
            century: DEFAULT_CENTURY.to_string(),
            filter: None,
            new_layout_min_columns: DEFAULT_NEW_LAYOUT_MIN_COLUMNS,
        }
    }
}

impl IngestOptions {
    /// Options for a range-filtered run; the century follows the range start.
    pub fn for_range(range: PeriodRange) -> Self {
        Self {
            century: range.century().to_string(),
            range: Some(range),
            ..Default::default()
        }
    }

    /// Options for a filename-filtered run.
    pub fn for_filter(filter: Option<String>) -> Self {
        Self {
            filter: filter.filter(|f| !f.is_empty()),
            ..Default::default()
        }
    }

    pub fn with_new_layout_min_columns(mut self, columns: usize) -> Self {
        self.new_layout_min_columns = columns;
        self
    }

    /// True when `file_name` passes the filename filter (or there is none).
    /// Directory names never take part.
    pub fn accepts_file_name(&self, file_name: &str) -> bool {
        self.filter.as_deref().is_none_or(|f| file_name.contains(f))
    }

    /// True when `period` lies in the range (or there is none).
    pub fn accepts_period(&self, period: &str) -> bool {
        self.range.as_ref().is_none_or(|r| r.contains(period))
    }
}

/// Partitions written by event ingestion.
#[derive(Debug)]
pub struct EventPartitions {
    pub events: Partition,
    pub new_ratings: Partition,
    pub win_loss: Partition,
}

#[derive(Debug)]
pub struct IngestContext {
    federation: Federation,
    members: Option<Partition>,
    supplements: Option<Partition>,
    events: Option<EventPartitions>,
    options: IngestOptions,
}

impl IngestContext {
    pub fn new(federation: Federation, options: IngestOptions) -> Self {
        Self {
            federation,
            members: None,
            supplements: None,
            events: None,
            options,
        }
    }

    pub fn with_members(mut self, members: Partition) -> Self {
        self.members = Some(members);
        self
    }

    pub fn with_supplements(mut self, supplements: Partition) -> Self {
        self.supplements = Some(supplements);
        self
    }

    pub fn with_events(mut self, events: EventPartitions) -> Self {
        self.events = Some(events);
        self
    }

    pub fn federation(&self) -> Federation {
        self.federation
    }

    pub fn options(&self) -> &IngestOptions {
        &self.options
    }

    pub fn members(&self) -> Result<&Partition, ImportError> {
        self.members
            .as_ref()
            .ok_or(ImportError::PartitionNotOpen("members"))
    }

    pub fn supplements(&self) -> Result<&Partition, ImportError> {
        self.supplements
            .as_ref()
            .ok_or(ImportError::PartitionNotOpen("supplements"))
    }

    pub fn events(&self) -> Result<&EventPartitions, ImportError> {
        self.events
            .as_ref()
            .ok_or(ImportError::PartitionNotOpen("events"))
    }
}
