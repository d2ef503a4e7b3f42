use serde::{Deserialize, Serialize};

/// Marker OMDb uses for "no value" in any string field.
pub const NOT_AVAILABLE: &str = "N/A";

/// Body of `?s=<term>`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchResponse {
    #[serde(default)]
    pub search: Vec<SearchItem>,
    #[serde(rename = "totalResults", default)]
    pub total_results: Option<String>,
    pub response: String,
    #[serde(default)]
    pub error: Option<String>,
}

impl SearchResponse {
    pub fn is_success(&self) -> bool {
        is_true(&self.response)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchItem {
    pub title: String,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    #[serde(rename = "Type", default)]
    pub item_type: Option<String>,
    #[serde(default)]
    pub poster: Option<String>,
}

/// Body of `?i=<id>` and `?t=<title>`.
///
/// Every field is optional because a negative answer only carries
/// `Response` and `Error`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DetailResponse {
    #[serde(rename = "imdbID", default)]
    pub imdb_id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub plot: Option<String>,
    #[serde(rename = "imdbRating", default)]
    pub imdb_rating: Option<String>,
    #[serde(default)]
    pub poster: Option<String>,
    pub response: String,
    #[serde(default)]
    pub error: Option<String>,
}

impl DetailResponse {
    pub fn is_success(&self) -> bool {
        is_true(&self.response)
    }
}

fn is_true(flag: &str) -> bool {
    flag.eq_ignore_ascii_case("true")
}

/// Strip the `N/A` marker and surrounding whitespace.
pub fn available(value: Option<&str>) -> Option<&str> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty() && *v != NOT_AVAILABLE)
}
