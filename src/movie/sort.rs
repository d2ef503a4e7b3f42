use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::record::MovieRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Year,
    Rating,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort key: {0}")]
pub struct ParseSortKeyError(pub String);

impl FromStr for SortKey {
    type Err = ParseSortKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "year" => Ok(SortKey::Year),
            "rating" | "imdbrating" => Ok(SortKey::Rating),
            other => Err(ParseSortKeyError(other.to_string())),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::Year => write!(f, "year"),
            SortKey::Rating => write!(f, "rating"),
        }
    }
}

/// Return a new sequence ordered descending by `key`.
///
/// The sort is stable. Records without a rating sort after every rated
/// record. `None` keeps the input order.
pub fn sort_descending(records: &[MovieRecord], key: Option<SortKey>) -> Vec<MovieRecord> {
    let mut sorted = records.to_vec();

    match key {
        None => {}
        Some(SortKey::Year) => sorted.sort_by(|a, b| b.year.cmp(&a.year)),
        Some(SortKey::Rating) => sorted.sort_by(|a, b| rating_descending(a.rating, b.rating)),
    }

    sorted
}

fn rating_descending(a: Option<f32>, b: Option<f32>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
