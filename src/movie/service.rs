use std::sync::Arc;
use tracing::debug;

use super::record::{MovieRecord, RecordError, SearchHit};
use crate::omdb::{ApiError, DetailResponse, MovieApi};

/// Wraps the remote API and turns its answers into the
/// `InvalidInput` / `NotFound` / `Transport` taxonomy.
#[derive(Clone)]
pub struct MovieService {
    api: Arc<dyn MovieApi>,
}

impl MovieService {
    pub fn new(api: Arc<dyn MovieApi>) -> Self {
        Self { api }
    }

    /// Trimmed term, or `InvalidInput` for an empty or blank one.
    pub fn validate_term(term: &str) -> Result<&str, SearchError> {
        let term = term.trim();
        if term.is_empty() {
            return Err(SearchError::InvalidInput);
        }
        Ok(term)
    }

    pub async fn search_by_title(&self, term: &str) -> Result<Vec<SearchHit>, SearchError> {
        let term = Self::validate_term(term)?;

        let response = self.api.search(term).await?;
        if !response.is_success() {
            debug!(term = term, error = ?response.error, "Search returned no matches");
            return Err(SearchError::NotFound(term.to_string()));
        }

        Ok(response.search.into_iter().map(SearchHit::from).collect())
    }

    pub async fn fetch_by_id(&self, id: &str) -> Result<MovieRecord, FetchError> {
        let response = self.api.by_id(id).await?;
        to_record(id, response)
    }

    pub async fn fetch_by_exact_title(&self, title: &str) -> Result<MovieRecord, FetchError> {
        let response = self.api.by_title(title).await?;
        to_record(title, response)
    }
}

fn to_record(key: &str, response: DetailResponse) -> Result<MovieRecord, FetchError> {
    if !response.is_success() {
        debug!(key = key, error = ?response.error, "Lookup returned no record");
        return Err(FetchError::NotFound(key.to_string()));
    }
    MovieRecord::from_detail(response).map_err(|e| FetchError::Transport(e.into()))
}

/// Underlying cause of a transport failure. Logged, never shown to the user.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("Unexpected response shape: {0}")]
    Shape(#[from] RecordError),
}

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("Search term is empty")]
    InvalidInput,
    #[error("No matches for {0:?}")]
    NotFound(String),
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),
}

impl From<ApiError> for SearchError {
    fn from(e: ApiError) -> Self {
        SearchError::Transport(e.into())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("No record for {0:?}")]
    NotFound(String),
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),
}

impl From<ApiError> for FetchError {
    fn from(e: ApiError) -> Self {
        FetchError::Transport(e.into())
    }
}
