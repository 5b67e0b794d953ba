//! Sort keys and their comparators

use crate::core::Record;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Ordering rule applied to the filtered collection
///
/// Exactly one key is active at a time. All sorts are stable, so records
/// with equal keys keep their source order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Keep filtered order
    #[default]
    None,
    /// Cheapest first
    PriceAsc,
    /// Best rated first
    RatingDesc,
    /// Alphabetical by name / model
    NameAsc,
}

impl SortKey {
    /// Compare two records under this key
    pub fn compare<R: Record>(&self, a: &R, b: &R) -> Ordering {
        match self {
            SortKey::None => Ordering::Equal,
            SortKey::PriceAsc => a.price().total_cmp(&b.price()),
            SortKey::RatingDesc => b.rating().total_cmp(&a.rating()),
            SortKey::NameAsc => natord::compare_ignore_case(a.label(), b.label()),
        }
    }

    /// Stable in-place sort
    pub fn sort<R: Record>(&self, records: &mut [&R]) {
        if *self == SortKey::None {
            return;
        }
        records.sort_by(|a, b| self.compare(*a, *b));
    }

    /// Dropdown value for this key
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::None => "",
            SortKey::PriceAsc => "price",
            SortKey::RatingDesc => "rating",
            SortKey::NameAsc => "name",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = std::convert::Infallible;

    /// Parse a dropdown value; anything unrecognised keeps source order
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "price" | "price_asc" => SortKey::PriceAsc,
            "rating" | "rating_desc" => SortKey::RatingDesc,
            "name" | "model" | "name_asc" => SortKey::NameAsc,
            _ => SortKey::None,
        })
    }
}
