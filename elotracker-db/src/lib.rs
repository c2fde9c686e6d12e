//! SQLite-backed keyed store for member and event records.
//!
//! Each entity family lives in its own partition file. Primary partitions
//! are read and written by ingestion; read replicas are private copies
//! opened read-only by consumers.

pub mod error;
pub mod operations;
pub mod partition;
pub mod replica;
pub mod schema;

pub use error::StoreError;
pub use operations::{
    load, load_event, load_member, load_new_rating, load_supplement, load_win_loss, store,
    store_event, store_member, store_new_rating, store_supplement, store_win_loss,
};
pub use partition::{
    EntryReader, FIDE_MEMBER_SUPPLEMENT, FIDE_MEMBERS, Partition, USCF_EVENTS,
    USCF_MEMBER_NEW_RATING, USCF_MEMBER_SUPPLEMENT, USCF_MEMBER_WIN_LOSS, USCF_MEMBERS,
    member_partition, partition_path, supplement_partition,
};
pub use replica::ReadReplica;
pub use schema::{open_database, open_memory};
