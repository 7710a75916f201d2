//! Message construction strategies.

use std::fmt;
use std::str::FromStr;

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::error::FormatError;

/// Policy for collapsing call-site arguments into a single message string.
///
/// The reducer matches this enum exhaustively, so there is no "unknown
/// strategy" branch at format time; that fault lives at the dynamic
/// boundary instead, in [`FromStr`] and the serde impls, where tags arrive
/// as text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Strategy {
    /// No message: the raw message is empty and every argument is left over.
    None,
    /// The first argument becomes the message; the rest are left over.
    First,
    /// All arguments are stringified and space-joined; nothing is left over.
    #[default]
    All,
}

impl Strategy {
    /// The lowercase tag of this strategy.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::None => "none",
            Strategy::First => "first",
            Strategy::All => "all",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(Strategy::None),
            "first" => Ok(Strategy::First),
            "all" => Ok(Strategy::All),
            _ => Err(FormatError::UnknownStrategy(s.to_owned())),
        }
    }
}

impl TryFrom<&str> for Strategy {
    type Error = FormatError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl Serialize for Strategy {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Strategy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        tag.parse().map_err(serde::de::Error::custom)
    }
}
