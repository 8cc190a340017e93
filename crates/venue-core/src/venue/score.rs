//! Air-quality score with an explicit undefined state.

use std::fmt;

use serde::de::{self, Deserializer, Unexpected};
use serde::{Deserialize, Serialize, Serializer};

/// A normalized air-quality score in [0, 1], or undefined before any contribution.
///
/// Serializes as a number or the string `"undefined"`. The legacy sentinel
/// `-1` (any negative number) deserializes as undefined.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Score(Option<f64>);

impl Score {
    pub const UNDEFINED: Score = Score(None);

    pub fn new(value: Option<f64>) -> Self {
        Self(value)
    }

    /// Decode the legacy numeric form, where negatives mean undefined.
    pub fn from_sentinel(value: f64) -> Self {
        if value < 0.0 {
            Self::UNDEFINED
        } else {
            Self(Some(value))
        }
    }

    pub fn value(self) -> Option<f64> {
        self.0
    }

    pub fn is_defined(self) -> bool {
        self.0.is_some()
    }
}

impl From<Option<f64>> for Score {
    fn from(value: Option<f64>) -> Self {
        Self(value)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(v) => write!(f, "{v:.3}"),
            None => f.write_str("undefined"),
        }
    }
}

impl Serialize for Score {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            Some(v) => serializer.serialize_f64(v),
            None => serializer.serialize_str("undefined"),
        }
    }
}

impl<'de> Deserialize<'de> for Score {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(v) => Ok(Self::from_sentinel(v)),
            Raw::Text(s) if s == "undefined" => Ok(Self::UNDEFINED),
            Raw::Text(s) => Err(de::Error::invalid_value(
                Unexpected::Str(&s),
                &"a number or \"undefined\"",
            )),
        }
    }
}
