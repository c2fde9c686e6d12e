/// Rating federations whose exports are ingested.
///
/// This enum centralizes federation identity (short names, display names,
/// aliases) so partition names and CLI arguments never rely on ad-hoc
/// string matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Federation {
    Fide,
    Uscf,
}

/// All federation variants in registration order.
const ALL_FEDERATIONS: &[Federation] = &[Federation::Fide, Federation::Uscf];

impl Federation {
    /// Canonical short name used for CLI arguments and partition names.
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::Fide => "fide",
            Self::Uscf => "uscf",
        }
    }

    /// Full display name for the federation.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Fide => "International Chess Federation",
            Self::Uscf => "US Chess Federation",
        }
    }

    /// Prefix used by member links on the serving side (`F12345`, `U12345`).
    pub fn link_prefix(&self) -> char {
        match self {
            Self::Fide => 'F',
            Self::Uscf => 'U',
        }
    }

    /// All accepted names for this federation (case-insensitive matching).
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::Fide => &["fide", "f", "international"],
            Self::Uscf => &["uscf", "u", "us chess", "uschess"],
        }
    }

    pub fn all() -> &'static [Federation] {
        ALL_FEDERATIONS
    }
}

impl std::fmt::Display for Federation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Error returned when a string cannot be parsed into a `Federation`.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown federation: '{0}'")]
pub struct FederationParseError(pub String);

impl std::str::FromStr for Federation {
    type Err = FederationParseError;

    /// Parse a federation from any recognized name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        ALL_FEDERATIONS
            .iter()
            .copied()
            .find(|fed| fed.aliases().contains(&lower.as_str()))
            .ok_or_else(|| FederationParseError(s.to_string()))
    }
}

/// Rating categories tracked per member and per supplement period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RatingCategory {
    Regular,
    Quick,
    Blitz,
    OnlineRegular,
    OnlineQuick,
    OnlineBlitz,
}

impl RatingCategory {
    /// The three over-the-board categories, in display order.
    pub const OVER_THE_BOARD: [RatingCategory; 3] = [Self::Regular, Self::Quick, Self::Blitz];

    /// All six categories, in display order.
    pub const ALL: [RatingCategory; 6] = [
        Self::Regular,
        Self::Quick,
        Self::Blitz,
        Self::OnlineRegular,
        Self::OnlineQuick,
        Self::OnlineBlitz,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Regular => "regular",
            Self::Quick => "quick",
            Self::Blitz => "blitz",
            Self::OnlineRegular => "online-regular",
            Self::OnlineQuick => "online-quick",
            Self::OnlineBlitz => "online-blitz",
        }
    }

    /// Category implied by a FIDE rating-list filename.
    ///
    /// `rapid` and `blitz` win over `standard`; anything else is a
    /// standard (regular) list.
    pub fn from_list_filename(filename: &str) -> Self {
        if filename.contains("blitz") {
            Self::Blitz
        } else if filename.contains("rapid") {
            Self::Quick
        } else {
            Self::Regular
        }
    }
}

impl std::fmt::Display for RatingCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
