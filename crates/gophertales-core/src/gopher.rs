//! The gopher partition key.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StoryError;

/// A playable character whose storyline forms an independent partition of
/// the story graph.
///
/// Declaration order is the canonical order used wherever the engine needs
/// to pick "the first" gopher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gopher {
    /// The blue gopher.
    Blue,
    /// The cyan gopher.
    Cyan,
    /// The brown gopher.
    Brown,
    /// The green gopher.
    Green,
    /// The pink gopher.
    Pink,
    /// The purple gopher.
    Purple,
}

impl Gopher {
    /// Every recognised gopher, in canonical order.
    pub const ALL: [Self; 6] = [
        Self::Blue,
        Self::Cyan,
        Self::Brown,
        Self::Green,
        Self::Pink,
        Self::Purple,
    ];

    /// The key this gopher is stored under in story data.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Cyan => "cyan",
            Self::Brown => "brown",
            Self::Green => "green",
            Self::Pink => "pink",
            Self::Purple => "purple",
        }
    }

    /// Parses an optional gopher name, where the empty string means "none".
    ///
    /// # Errors
    ///
    /// Returns `StoryError::GopherNotFound` for a non-empty, unrecognised name.
    pub fn parse_optional(value: &str) -> Result<Option<Self>, StoryError> {
        if value.is_empty() {
            Ok(None)
        } else {
            value.parse().map(Some)
        }
    }
}

impl fmt::Display for Gopher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gopher {
    type Err = StoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|gopher| gopher.as_str() == s)
            .ok_or_else(|| StoryError::GopherNotFound(s.to_owned()))
    }
}
