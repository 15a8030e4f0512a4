//! Trivia categories - which SWAPI resource a question is about

use std::fmt;

use serde::{Deserialize, Serialize};

/// The closed set of dataset categories the game asks about
///
/// The category decides both the SWAPI resource path and the phrasing
/// templates used by the fallback generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    People,
    Planets,
    Starships,
}

impl Category {
    /// Every category, in the order the front end picks from
    pub const ALL: [Category; 3] = [Category::People, Category::Planets, Category::Starships];

    /// The plural resource name, as used in SWAPI URLs and request bodies
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::People => "people",
            Self::Planets => "planets",
            Self::Starships => "starships",
        }
    }

    /// Singular noun used when a question refers to "this <thing>"
    ///
    /// `people` reads as "character"; the other categories drop their
    /// trailing "s".
    pub fn singular_noun(&self) -> &'static str {
        match self {
            Self::People => "character",
            Self::Planets => "planet",
            Self::Starships => "starship",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
