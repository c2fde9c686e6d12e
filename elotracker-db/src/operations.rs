//! Typed load/store operations for every entity family.
//!
//! Values are JSON-encoded. Loads return `Ok(None)` for keys never written;
//! callers start from a fresh record in that case.

use elotracker_core::types::*;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::StoreError;
use crate::partition::{EntryReader, Partition};

/// Decode the value stored under `key`, if any.
pub fn load<T: DeserializeOwned>(
    reader: &impl EntryReader,
    key: &str,
) -> Result<Option<T>, StoreError> {
    let Some(bytes) = reader.get(key)? else {
        return Ok(None);
    };
    serde_json::from_slice(&bytes)
        .map(Some)
        .map_err(|source| StoreError::Decode {
            partition: reader.name().to_string(),
            key: key.to_string(),
            source,
        })
}

/// Encode `value` and write it under `key`, replacing any previous value.
pub fn store<T: Serialize>(partition: &Partition, key: &str, value: &T) -> Result<(), StoreError> {
    let bytes = serde_json::to_vec(value).map_err(|source| StoreError::Encode {
        key: key.to_string(),
        source,
    })?;
    partition.put(key, &bytes)
}

// ── Member Operations ───────────────────────────────────────────────────────

pub fn load_member(reader: &impl EntryReader, id: &str) -> Result<Option<Member>, StoreError> {
    load(reader, id)
}

/// Write a member snapshot keyed by its id.
pub fn store_member(partition: &Partition, member: &Member) -> Result<(), StoreError> {
    store(partition, &member.id, member)
}

// ── Supplement Operations ───────────────────────────────────────────────────

pub fn load_supplement(
    reader: &impl EntryReader,
    member_id: &str,
) -> Result<Option<MemberSupplementRating>, StoreError> {
    load(reader, member_id)
}

pub fn store_supplement(
    partition: &Partition,
    supplement: &MemberSupplementRating,
) -> Result<(), StoreError> {
    store(partition, &supplement.member_id, supplement)
}

// ── Event Operations ────────────────────────────────────────────────────────

pub fn load_event(reader: &impl EntryReader, event_id: &str) -> Result<Option<Event>, StoreError> {
    load(reader, event_id)
}

pub fn store_event(partition: &Partition, event: &Event) -> Result<(), StoreError> {
    store(partition, &event.id, event)
}

pub fn load_new_rating(
    reader: &impl EntryReader,
    member_id: &str,
) -> Result<Option<MemberNewRating>, StoreError> {
    load(reader, member_id)
}

pub fn store_new_rating(
    partition: &Partition,
    ratings: &MemberNewRating,
) -> Result<(), StoreError> {
    store(partition, &ratings.member_id, ratings)
}

/// Results for one member in one event; keyed `<member>-<event>`.
pub fn load_win_loss(
    reader: &impl EntryReader,
    member_id: &str,
    event_id: &str,
) -> Result<Option<MemberWinLoss>, StoreError> {
    load(reader, &MemberWinLoss::key(member_id, event_id))
}

pub fn store_win_loss(partition: &Partition, results: &MemberWinLoss) -> Result<(), StoreError> {
    store(
        partition,
        &MemberWinLoss::key(&results.member_id, &results.event_id),
        results,
    )
}
