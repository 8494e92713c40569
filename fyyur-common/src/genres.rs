//! Genre list codec
//!
//! The genres column holds a serialized list in the braced literal form
//! `{"Jazz","Rock n Roll"}`. Older rows may hold a JSON array instead;
//! both decode to the same list.

use serde::{Deserialize, Serialize};

/// Genres offered by the venue and artist forms
pub const GENRE_CHOICES: &[&str] = &[
    "Alternative",
    "Blues",
    "Classical",
    "Country",
    "Electronic",
    "Folk",
    "Funk",
    "Hip-Hop",
    "Heavy Metal",
    "Instrumental",
    "Jazz",
    "Musical Theatre",
    "Pop",
    "Punk",
    "R&B",
    "Reggae",
    "Rock n Roll",
    "Soul",
    "Other",
];

/// Check whether a genre is one of the form choices
pub fn is_known_genre(genre: &str) -> bool {
    GENRE_CHOICES.contains(&genre)
}

/// Ordered list of genre names
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Genres(Vec<String>);

impl Genres {
    pub fn new(items: Vec<String>) -> Self {
        Self(items)
    }

    /// Decode a stored genres value
    ///
    /// Never fails: anything that is not a JSON array is treated as the
    /// braced form, and empty items are dropped.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();

        if raw.starts_with('[') {
            if let Ok(items) = serde_json::from_str::<Vec<String>>(raw) {
                return Self::from_items(items);
            }
        }

        let inner = raw.strip_prefix('{').unwrap_or(raw);
        let inner = inner.strip_suffix('}').unwrap_or(inner);

        Self(
            inner
                .replace('"', "")
                .split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    /// Encode to the braced storage form
    pub fn serialize(&self) -> String {
        let quoted: Vec<String> = self.0.iter().map(|g| format!("\"{}\"", g)).collect();
        format!("{{{}}}", quoted.join(","))
    }

    fn from_items(items: Vec<String>) -> Self {
        Self(
            items
                .into_iter()
                .map(|item| item.trim().to_string())
                .filter(|item| !item.is_empty())
                .collect(),
        )
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl From<Vec<String>> for Genres {
    fn from(items: Vec<String>) -> Self {
        Self::from_items(items)
    }
}
