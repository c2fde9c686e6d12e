//! Ingest federation rating exports into the keyed store.
//!
//! This crate owns all ETL logic: sniffing fixed-width layouts, parsing the
//! fixed-width, tab-delimited and JSON-line sources, resolving period keys,
//! and the non-destructive member and supplement merges.

pub mod context;
pub mod error;
pub mod events;
pub mod fide;
pub mod layout;
pub mod lines;
pub mod merge;
pub mod period;
pub mod progress;
pub mod record;
pub mod scan;
pub mod stats;
pub mod uscf;

pub use context::{EventPartitions, IngestContext, IngestOptions};
pub use error::ImportError;
pub use events::ingest_crawler_file;
pub use fide::{FideMode, ingest_fide_dir, ingest_fide_file};
pub use layout::{ColumnOffsetTable, ColumnSpan, DelimitedLayout};
pub use merge::{MemberUpdate, merge_member, merge_supplement};
pub use period::{PeriodRange, validate_period};
pub use progress::{ImportProgress, LogProgress, SilentProgress};
pub use stats::ImportStats;
pub use uscf::{
    ingest_rating_list_file, ingest_rating_lists, ingest_supplement_file, ingest_supplements,
};
