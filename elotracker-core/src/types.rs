//! Persisted record types.
//!
//! These are the values stored in the keyed partitions: the member snapshot,
//! the per-period supplement history, and the event/result records derived
//! from crawler output. All fields default on decode so records written by
//! older runs stay readable.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::federation::RatingCategory;

// ── Member ──────────────────────────────────────────────────────────────────

/// Current snapshot of one federation member.
///
/// Identity is (federation, `id`); the federation is implied by the
/// partition the record lives in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Member {
    pub id: String,
    pub name: String,
    pub country: String,
    pub gender: String,
    pub birthday: String,
    /// Region code; only USCF publishes one.
    pub state: String,
    pub active_flag: String,
    /// Comma-joined, deduplicated full title text.
    pub fide_title: String,
    /// Cross-federation link (a USCF member's FIDE id).
    pub fide_id: String,

    pub regular_rating: String,
    pub quick_rating: String,
    pub blitz_rating: String,
    pub online_regular_rating: String,
    pub online_quick_rating: String,
    pub online_blitz_rating: String,

    /// Ratings from the most recent supplement this member appeared in.
    pub supp_regular_rating: String,
    pub supp_quick_rating: String,
    pub supp_blitz_rating: String,
    pub supp_games: String,
}

impl Member {
    pub fn rating(&self, category: RatingCategory) -> &str {
        match category {
            RatingCategory::Regular => &self.regular_rating,
            RatingCategory::Quick => &self.quick_rating,
            RatingCategory::Blitz => &self.blitz_rating,
            RatingCategory::OnlineRegular => &self.online_regular_rating,
            RatingCategory::OnlineQuick => &self.online_quick_rating,
            RatingCategory::OnlineBlitz => &self.online_blitz_rating,
        }
    }

    /// Last-supplement value; `None` for online categories.
    pub fn supp_rating(&self, category: RatingCategory) -> Option<&str> {
        match category {
            RatingCategory::Regular => Some(&self.supp_regular_rating),
            RatingCategory::Quick => Some(&self.supp_quick_rating),
            RatingCategory::Blitz => Some(&self.supp_blitz_rating),
            _ => None,
        }
    }

    /// Mutable access to the current-snapshot field for a category.
    pub fn rating_mut(&mut self, category: RatingCategory) -> &mut String {
        match category {
            RatingCategory::Regular => &mut self.regular_rating,
            RatingCategory::Quick => &mut self.quick_rating,
            RatingCategory::Blitz => &mut self.blitz_rating,
            RatingCategory::OnlineRegular => &mut self.online_regular_rating,
            RatingCategory::OnlineQuick => &mut self.online_quick_rating,
            RatingCategory::OnlineBlitz => &mut self.online_blitz_rating,
        }
    }

    /// Mutable access to the last-supplement field for an over-the-board
    /// category. Online categories have no supplement snapshot.
    pub fn supp_rating_mut(&mut self, category: RatingCategory) -> Option<&mut String> {
        match category {
            RatingCategory::Regular => Some(&mut self.supp_regular_rating),
            RatingCategory::Quick => Some(&mut self.supp_quick_rating),
            RatingCategory::Blitz => Some(&mut self.supp_blitz_rating),
            _ => None,
        }
    }
}

// ── Supplement history ──────────────────────────────────────────────────────

/// One period's worth of category values.
///
/// `None` means "not supplied": merging never touches a stored value for a
/// category the newer row leaves as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingAtPeriod {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regular_rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quick_rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blitz_rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub online_regular_rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub online_quick_rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub online_blitz_rating: Option<String>,
}

impl RatingAtPeriod {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter for a single category.
    pub fn with(mut self, category: RatingCategory, value: impl Into<String>) -> Self {
        self.set(category, value);
        self
    }

    pub fn set(&mut self, category: RatingCategory, value: impl Into<String>) {
        *self.slot_mut(category) = Some(value.into());
    }

    pub fn get(&self, category: RatingCategory) -> Option<&str> {
        match category {
            RatingCategory::Regular => self.regular_rating.as_deref(),
            RatingCategory::Quick => self.quick_rating.as_deref(),
            RatingCategory::Blitz => self.blitz_rating.as_deref(),
            RatingCategory::OnlineRegular => self.online_regular_rating.as_deref(),
            RatingCategory::OnlineQuick => self.online_quick_rating.as_deref(),
            RatingCategory::OnlineBlitz => self.online_blitz_rating.as_deref(),
        }
    }

    fn slot_mut(&mut self, category: RatingCategory) -> &mut Option<String> {
        match category {
            RatingCategory::Regular => &mut self.regular_rating,
            RatingCategory::Quick => &mut self.quick_rating,
            RatingCategory::Blitz => &mut self.blitz_rating,
            RatingCategory::OnlineRegular => &mut self.online_regular_rating,
            RatingCategory::OnlineQuick => &mut self.online_quick_rating,
            RatingCategory::OnlineBlitz => &mut self.online_blitz_rating,
        }
    }

    /// Copy every category `newer` supplies over this row; leave the rest.
    pub fn overlay(&mut self, newer: &RatingAtPeriod) {
        for category in RatingCategory::ALL {
            if let Some(value) = newer.get(category) {
                self.set(category, value);
            }
        }
    }

    /// Keep only the listed categories, dropping everything else.
    pub fn retain(&mut self, categories: &[RatingCategory]) {
        for category in RatingCategory::ALL {
            if !categories.contains(&category) {
                *self.slot_mut(category) = None;
            }
        }
    }

    /// True when no category is supplied.
    pub fn is_empty(&self) -> bool {
        RatingCategory::ALL.iter().all(|c| self.get(*c).is_none())
    }
}

/// Historical supplement ratings for one member, keyed by period.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemberSupplementRating {
    pub member_id: String,
    pub supplement_ratings: BTreeMap<String, RatingAtPeriod>,
}

impl MemberSupplementRating {
    pub fn new(member_id: impl Into<String>) -> Self {
        Self {
            member_id: member_id.into(),
            supplement_ratings: BTreeMap::new(),
        }
    }

    /// Merge one period's row into the history.
    ///
    /// A new period is inserted as-is. For an existing period only the
    /// categories `rating` supplies are overwritten.
    pub fn merge_period(&mut self, period: &str, rating: &RatingAtPeriod) {
        self.supplement_ratings
            .entry(period.to_string())
            .and_modify(|existing| existing.overlay(rating))
            .or_insert_with(|| rating.clone());
    }

    /// Most recent period and its row, by key order.
    pub fn latest(&self) -> Option<(&str, &RatingAtPeriod)> {
        self.supplement_ratings
            .iter()
            .next_back()
            .map(|(k, v)| (k.as_str(), v))
    }
}

// ── Events ──────────────────────────────────────────────────────────────────

/// A rated event, keyed by its federation event id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Event {
    pub id: String,
    pub name: String,
    pub date: String,
    pub location: String,
    pub num_sections: String,
    pub num_players: String,
}

/// One rating change a member received in an event section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventRating {
    pub event_id: String,
    pub section: String,
    pub rating_type: String,
    pub old_rating: String,
    pub new_rating: String,
}

/// All rating changes for one member.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemberNewRating {
    pub member_id: String,
    pub event_ratings: Vec<EventRating>,
}

impl MemberNewRating {
    /// Insert or replace the entry for (event, section, rating type).
    pub fn upsert(&mut self, rating: EventRating) {
        match self.event_ratings.iter_mut().find(|r| {
            r.event_id == rating.event_id
                && r.section == rating.section
                && r.rating_type == rating.rating_type
        }) {
            Some(existing) => *existing = rating,
            None => self.event_ratings.push(rating),
        }
    }
}

/// One game result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WinLoss {
    pub round: String,
    pub result: String,
    pub opponent_id: String,
}

/// A member's game results in one event, keyed `<member>-<event>`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemberWinLoss {
    pub member_id: String,
    pub event_id: String,
    pub results: Vec<WinLoss>,
}

impl MemberWinLoss {
    /// Storage key for a member's results in an event.
    pub fn key(member_id: &str, event_id: &str) -> String {
        format!("{member_id}-{event_id}")
    }

    /// Insert or replace a result. Results are unique per round; without a
    /// round, an identical result is not added twice.
    pub fn upsert(&mut self, result: WinLoss) {
        let existing = if result.round.is_empty() {
            self.results.iter_mut().find(|r| **r == result)
        } else {
            self.results.iter_mut().find(|r| r.round == result.round)
        };
        match existing {
            Some(slot) => *slot = result,
            None => self.results.push(result),
        }
    }
}

#[cfg(test)]
#[path = "tests/types_tests.rs"]
mod tests;
