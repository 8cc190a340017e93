//! Venue key parsing.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::constants::VENUE_KEY_PATTERN;
use crate::errors::{VenueError, VenueResult};

static KEY_REGEX: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(VENUE_KEY_PATTERN).ok());

/// External identity of a venue. Letters, digits and `-` only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VenueKey(String);

impl VenueKey {
    pub fn parse(raw: impl Into<String>) -> VenueResult<Self> {
        let raw = raw.into();
        let valid = match KEY_REGEX.as_ref() {
            Some(re) => re.is_match(&raw),
            None => !raw.is_empty() && raw.chars().all(|c| c.is_ascii_alphanumeric() || c == '-'),
        };
        if valid {
            Ok(Self(raw))
        } else {
            Err(VenueError::InvalidKey { key: raw })
        }
    }

    /// Parse a comma-separated list (`a,b,c`), skipping empty entries.
    pub fn parse_list(raw: &str) -> VenueResult<Vec<Self>> {
        raw.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(Self::parse)
            .collect()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for VenueKey {
    type Error = VenueError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<VenueKey> for String {
    fn from(key: VenueKey) -> Self {
        key.0
    }
}

impl AsRef<str> for VenueKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VenueKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
