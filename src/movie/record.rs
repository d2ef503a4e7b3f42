use once_cell::sync::Lazy;
use regex::Regex;

use crate::omdb::types::{available, DetailResponse, SearchItem};

static LEADING_YEAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(\d{4})").expect("leading year regex should compile"));

/// Lightweight search result, discarded after hydration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub id: String,
    pub title: String,
}

impl From<SearchItem> for SearchHit {
    fn from(item: SearchItem) -> Self {
        Self {
            id: item.imdb_id,
            title: item.title,
        }
    }
}

/// A fully hydrated movie. Identity is the `id`.
#[derive(Debug, Clone)]
pub struct MovieRecord {
    pub id: String,
    pub title: String,
    pub year: i32,
    /// Ordered; the first entry is the primary genre.
    pub genres: Vec<String>,
    pub plot: String,
    /// `None` when the remote has no rating.
    pub rating: Option<f32>,
    /// `None` when the remote has no poster.
    pub poster_url: Option<String>,
}

impl PartialEq for MovieRecord {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for MovieRecord {}

impl MovieRecord {
    pub fn primary_genre(&self) -> Option<&str> {
        self.genres.first().map(String::as_str)
    }

    /// Genres joined the way the remote sends them, primary first.
    pub fn genre_line(&self) -> String {
        self.genres.join(", ")
    }

    /// Build a record from a positive detail answer.
    ///
    /// Fails on the first field that keeps the body from being a movie.
    pub fn from_detail(detail: DetailResponse) -> Result<Self, RecordError> {
        let id = available(detail.imdb_id.as_deref())
            .ok_or(RecordError::MissingId)?
            .to_string();
        let title = available(detail.title.as_deref())
            .ok_or(RecordError::MissingTitle)?
            .to_string();
        let year = available(detail.year.as_deref())
            .and_then(parse_year)
            .ok_or_else(|| RecordError::BadYear(detail.year.clone()))?;

        Ok(Self {
            id,
            title,
            year,
            genres: parse_genres(detail.genre.as_deref()),
            plot: available(detail.plot.as_deref()).unwrap_or_default().to_string(),
            rating: available(detail.imdb_rating.as_deref()).and_then(parse_rating),
            poster_url: available(detail.poster.as_deref()).map(str::to_string),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("missing imdbID")]
    MissingId,
    #[error("missing Title")]
    MissingTitle,
    #[error("unparseable Year {0:?}")]
    BadYear(Option<String>),
}

/// Leading four digits; series years look like `2011–2019`.
pub fn parse_year(value: &str) -> Option<i32> {
    LEADING_YEAR
        .captures(value)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

pub fn parse_rating(value: &str) -> Option<f32> {
    value.trim().parse::<f32>().ok().filter(|r| r.is_finite())
}

pub fn parse_genres(value: Option<&str>) -> Vec<String> {
    available(value)
        .map(|line| {
            line.split(',')
                .map(str::trim)
                .filter(|g| !g.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// First comma-separated token of a genre string.
pub fn primary_token(genre: &str) -> Option<&str> {
    genre
        .split(',')
        .next()
        .map(str::trim)
        .filter(|g| !g.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail() -> DetailResponse {
        DetailResponse {
            imdb_id: Some("tt0133093".to_string()),
            title: Some("The Matrix".to_string()),
            year: Some("1999".to_string()),
            genre: Some("Action, Sci-Fi".to_string()),
            plot: Some("A hacker learns the truth.".to_string()),
            imdb_rating: Some("8.7".to_string()),
            poster: Some("https://img.example/matrix.jpg".to_string()),
            response: "True".to_string(),
            error: None,
        }
    }

    #[test]
    fn test_from_detail() {
        let record = MovieRecord::from_detail(detail()).unwrap();
        assert_eq!(record.id, "tt0133093");
        assert_eq!(record.year, 1999);
        assert_eq!(record.genres, vec!["Action", "Sci-Fi"]);
        assert_eq!(record.primary_genre(), Some("Action"));
        assert_eq!(record.genre_line(), "Action, Sci-Fi");
        assert_eq!(record.rating, Some(8.7));
        assert_eq!(record.poster_url.as_deref(), Some("https://img.example/matrix.jpg"));
    }

    #[test]
    fn test_from_detail_placeholders() {
        let mut d = detail();
        d.imdb_rating = Some("N/A".to_string());
        d.poster = Some("N/A".to_string());
        d.genre = Some("N/A".to_string());
        d.plot = None;

        let record = MovieRecord::from_detail(d).unwrap();
        assert_eq!(record.rating, None);
        assert_eq!(record.poster_url, None);
        assert!(record.genres.is_empty());
        assert_eq!(record.primary_genre(), None);
        assert_eq!(record.plot, "");
    }

    #[test]
    fn test_from_detail_rejects_bad_shape() {
        let mut d = detail();
        d.year = Some("N/A".to_string());
        assert_eq!(
            MovieRecord::from_detail(d).unwrap_err(),
            RecordError::BadYear(Some("N/A".to_string()))
        );

        let mut d = detail();
        d.imdb_id = None;
        assert_eq!(MovieRecord::from_detail(d).unwrap_err(), RecordError::MissingId);

        let mut d = detail();
        d.title = Some("N/A".to_string());
        assert_eq!(MovieRecord::from_detail(d).unwrap_err(), RecordError::MissingTitle);
    }

    #[test]
    fn test_parse_year() {
        assert_eq!(parse_year("2010"), Some(2010));
        assert_eq!(parse_year("2011–2019"), Some(2011));
        assert_eq!(parse_year("2020–"), Some(2020));
        assert_eq!(parse_year("N/A"), None);
    }

    #[test]
    fn test_parse_rating() {
        assert_eq!(parse_rating("7.5"), Some(7.5));
        assert_eq!(parse_rating("N/A"), None);
        assert_eq!(parse_rating("NaN"), None);
    }

    #[test]
    fn test_primary_token() {
        assert_eq!(primary_token("Action, Adventure"), Some("Action"));
        assert_eq!(primary_token("Drama"), Some("Drama"));
        assert_eq!(primary_token(" , Drama"), None);
        assert_eq!(primary_token(""), None);
    }

    #[test]
    fn test_identity_is_id() {
        let a = MovieRecord::from_detail(detail()).unwrap();
        let mut b = a.clone();
        b.title = "Different".to_string();
        assert_eq!(a, b);
    }
}
