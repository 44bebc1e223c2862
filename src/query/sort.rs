//! Listing order

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::content::Post;

/// How a listing is ordered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Newest first
    #[default]
    Date,
    /// Highest views + likes first
    Popularity,
    /// Title, A to Z
    Title,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort key {0:?}, expected date, popularity or title")]
pub struct ParseSortKeyError(pub String);

impl FromStr for SortKey {
    type Err = ParseSortKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "date" | "by-date-descending" => Ok(SortKey::Date),
            "popularity" | "popular" | "by-popularity-descending" => Ok(SortKey::Popularity),
            "title" | "by-title-alphabetical" => Ok(SortKey::Title),
            _ => Err(ParseSortKeyError(s.to_string())),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortKey::Date => "date",
            SortKey::Popularity => "popularity",
            SortKey::Title => "title",
        };
        f.write_str(name)
    }
}

/// Return the posts in `key` order. Equal posts keep their input order.
pub fn sort<'a>(posts: &[&'a Post], key: SortKey) -> Vec<&'a Post> {
    let mut sorted = posts.to_vec();
    match key {
        SortKey::Date => sorted.sort_by(|a, b| b.published_at.cmp(&a.published_at)),
        SortKey::Popularity => sorted.sort_by(|a, b| b.popularity().cmp(&a.popularity())),
        SortKey::Title => sorted.sort_by(|a, b| compare_titles(&a.title, &b.title)),
    }
    sorted
}

/// Collation-style title comparison. Letters compare by base letter first,
/// so "Été" sorts with the "E"s; accents break ties next and case last,
/// with lowercase first.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    let base = |s: &str| -> String {
        s.nfd()
            .filter(|c| !is_combining_mark(*c))
            .flat_map(char::to_lowercase)
            .collect()
    };
    let accented = |s: &str| -> String { s.nfd().flat_map(char::to_lowercase).collect() };

    base(a)
        .cmp(&base(b))
        .then_with(|| accented(a).cmp(&accented(b)))
        .then_with(|| b.cmp(a))
}
