//! Load-modify-store merges into the keyed partitions.
//!
//! Every merge reads the stored record (a missing key starts a fresh one),
//! applies only what the caller supplied, and writes the record back. There
//! is no transaction around the read and the write; one run per partition.

use elotracker_core::RatingCategory;
use elotracker_core::types::*;
use elotracker_core::util::reorder_name;
use elotracker_db::{Partition, operations};

use crate::error::ImportError;

// ── Member Merge ────────────────────────────────────────────────────────────

/// Parsed member fields from one source line. `None` and empty values leave
/// the stored field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberUpdate {
    pub name: Option<String>,
    /// Capitalize each word of a reordered `"Last, First"` name.
    pub title_case_name: bool,
    pub country: Option<String>,
    pub gender: Option<String>,
    pub birthday: Option<String>,
    pub state: Option<String>,
    pub active_flag: Option<String>,
    pub fide_title: Option<String>,
    pub fide_id: Option<String>,
    /// Current-snapshot ratings.
    pub ratings: Vec<(RatingCategory, String)>,
    /// Last-supplement ratings (over-the-board categories only).
    pub supp_ratings: Vec<(RatingCategory, String)>,
    pub supp_games: Option<String>,
}

fn set_if_supplied(target: &mut String, value: Option<&String>) {
    if let Some(v) = value.filter(|v| !v.is_empty()) {
        target.clone_from(v);
    }
}

impl MemberUpdate {
    /// Apply every supplied field onto `member`, last write wins.
    pub fn apply(&self, member: &mut Member) {
        if let Some(name) = self.name.as_ref().filter(|n| !n.is_empty()) {
            member.name = reorder_name(name, self.title_case_name);
        }
        set_if_supplied(&mut member.country, self.country.as_ref());
        set_if_supplied(&mut member.gender, self.gender.as_ref());
        set_if_supplied(&mut member.birthday, self.birthday.as_ref());
        set_if_supplied(&mut member.state, self.state.as_ref());
        set_if_supplied(&mut member.active_flag, self.active_flag.as_ref());
        set_if_supplied(&mut member.fide_title, self.fide_title.as_ref());
        set_if_supplied(&mut member.fide_id, self.fide_id.as_ref());
        set_if_supplied(&mut member.supp_games, self.supp_games.as_ref());

        for (category, value) in &self.ratings {
            set_if_supplied(member.rating_mut(*category), Some(value));
        }
        for (category, value) in &self.supp_ratings {
            if let Some(slot) = member.supp_rating_mut(*category) {
                set_if_supplied(slot, Some(value));
            }
        }
    }
}

/// Merge `update` into the member stored under `member_id`.
pub fn merge_member(
    members: &Partition,
    member_id: &str,
    update: &MemberUpdate,
) -> Result<Member, ImportError> {
    let mut member = operations::load_member(members, member_id)?.unwrap_or_default();
    member.id = member_id.to_string();
    update.apply(&mut member);
    operations::store_member(members, &member)?;
    Ok(member)
}

// ── Supplement Merge ────────────────────────────────────────────────────────

/// Merge one period's ratings into a member's supplement history.
///
/// Only the categories `rating` supplies are overwritten for `period`;
/// other categories and other periods are kept as stored.
pub fn merge_supplement(
    supplements: &Partition,
    member_id: &str,
    period: &str,
    rating: &RatingAtPeriod,
) -> Result<MemberSupplementRating, ImportError> {
    let mut history = operations::load_supplement(supplements, member_id)?
        .unwrap_or_else(|| MemberSupplementRating::new(member_id));
    history.member_id = member_id.to_string();
    history.merge_period(period, rating);
    operations::store_supplement(supplements, &history)?;
    Ok(history)
}

// ── Event records ───────────────────────────────────────────────────────────

/// Write an event, replacing any stored version.
pub fn upsert_event(events: &Partition, event: &Event) -> Result<(), ImportError> {
    operations::store_event(events, event)?;
    Ok(())
}

/// Record one rating change for a member, unique per (event, section, type).
pub fn upsert_new_rating(
    new_ratings: &Partition,
    member_id: &str,
    rating: EventRating,
) -> Result<(), ImportError> {
    let mut stored = operations::load_new_rating(new_ratings, member_id)?.unwrap_or_else(|| {
        MemberNewRating {
            member_id: member_id.to_string(),
            ..Default::default()
        }
    });
    stored.upsert(rating);
    operations::store_new_rating(new_ratings, &stored)?;
    Ok(())
}

/// Record one game result for a member in an event.
pub fn upsert_win_loss(
    win_loss: &Partition,
    member_id: &str,
    event_id: &str,
    result: WinLoss,
) -> Result<(), ImportError> {
    let mut stored = operations::load_win_loss(win_loss, member_id, event_id)?.unwrap_or_else(|| {
        MemberWinLoss {
            member_id: member_id.to_string(),
            event_id: event_id.to_string(),
            results: Vec::new(),
        }
    });
    stored.upsert(result);
    operations::store_win_loss(win_loss, &stored)?;
    Ok(())
}
