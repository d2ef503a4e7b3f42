use crate::movie::MovieRecord;
use crate::omdb::types::NOT_AVAILABLE;

/// Display-ready projection of a `MovieRecord`.
///
/// Built fresh on every render; nothing ever reads a card back into a record.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieCard {
    pub id: String,
    pub title: String,
    pub year: String,
    pub genres: String,
    pub plot: String,
    pub rating: String,
    pub poster_url: String,
}

impl MovieCard {
    pub fn project(record: &MovieRecord, placeholder_poster: &str) -> Self {
        Self {
            id: record.id.clone(),
            title: record.title.clone(),
            year: record.year.to_string(),
            genres: record.genre_line(),
            plot: record.plot.clone(),
            rating: record
                .rating
                .map(|r| format!("{:.1}", r))
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            poster_url: record
                .poster_url
                .clone()
                .unwrap_or_else(|| placeholder_poster.to_string()),
        }
    }
}
