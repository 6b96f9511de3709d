//! Display types for UI components
//!
//! These types contain only the fields needed for display. They enable
//! props-based components that work with either live service data or demo
//! fixtures.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Manga genre offered by the genre selector
///
/// Serializes to its display label, which is also what the recommendation
/// service expects in requests.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Genre {
    Action,
    Adventure,
    Comedy,
    Drama,
    Fantasy,
    Horror,
    Romance,
    #[serde(rename = "Sci-Fi")]
    SciFi,
    #[serde(rename = "Slice of Life")]
    SliceOfLife,
}

impl Genre {
    /// Every genre, in selector order
    pub const ALL: [Genre; 9] = [
        Genre::Action,
        Genre::Adventure,
        Genre::Comedy,
        Genre::Drama,
        Genre::Fantasy,
        Genre::Horror,
        Genre::Romance,
        Genre::SciFi,
        Genre::SliceOfLife,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Genre::Action => "Action",
            Genre::Adventure => "Adventure",
            Genre::Comedy => "Comedy",
            Genre::Drama => "Drama",
            Genre::Fantasy => "Fantasy",
            Genre::Horror => "Horror",
            Genre::Romance => "Romance",
            Genre::SciFi => "Sci-Fi",
            Genre::SliceOfLife => "Slice of Life",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A string that is not one of the genre labels
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownGenre(pub String);

impl fmt::Display for UnknownGenre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown genre: {:?}", self.0)
    }
}

impl std::error::Error for UnknownGenre {}

impl FromStr for Genre {
    type Err = UnknownGenre;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Genre::ALL
            .into_iter()
            .find(|genre| genre.label() == s)
            .ok_or_else(|| UnknownGenre(s.to_string()))
    }
}

/// Manga recommendation display info
#[derive(Clone, Debug, PartialEq)]
pub struct Manga {
    /// Title, also used as the card key
    pub name: String,
    /// Genre text as reported by the service (may list several genres)
    pub genre: String,
    pub rating: f64,
}
