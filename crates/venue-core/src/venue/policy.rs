use std::fmt;

use serde::{Deserialize, Serialize};

/// Smoking policy of a venue, as voted by reviewers.
///
/// `Unknown` is never a vote: it is the derived state when no policy
/// strictly leads the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SmokingPolicy {
    #[default]
    Unknown,
    Allowed,
    Prohibited,
    Partial,
}

impl SmokingPolicy {
    /// The policies a review may vote for.
    pub const VOTABLE: [SmokingPolicy; 3] = [Self::Allowed, Self::Prohibited, Self::Partial];

    pub fn is_votable(self) -> bool {
        !matches!(self, Self::Unknown)
    }

    /// Integer code used by the review form: 0 unknown, 1 allowed, 2 prohibited, 3 partial.
    pub fn code(self) -> i64 {
        match self {
            Self::Unknown => 0,
            Self::Allowed => 1,
            Self::Prohibited => 2,
            Self::Partial => 3,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::Unknown),
            1 => Some(Self::Allowed),
            2 => Some(Self::Prohibited),
            3 => Some(Self::Partial),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Allowed => "allowed",
            Self::Prohibited => "prohibited",
            Self::Partial => "partial",
        }
    }
}

impl fmt::Display for SmokingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
