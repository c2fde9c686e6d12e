//! Domain types shared by the store, the importers and the CLI.
//!
//! Nothing here touches the filesystem: federations and rating categories,
//! the persisted record types, country and title normalization, and the
//! small text helpers the fixed-width parsers lean on.

pub mod country;
pub mod federation;
pub mod title;
pub mod types;
pub mod util;

pub use country::{lookup_alpha2, normalize_country};
pub use federation::{Federation, FederationParseError, RatingCategory};
pub use title::{TitleSet, expand_title};
pub use types::{
    Event, EventRating, Member, MemberNewRating, MemberSupplementRating, MemberWinLoss,
    RatingAtPeriod, WinLoss,
};
