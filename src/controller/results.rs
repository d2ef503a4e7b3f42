use tracing::{debug, error, info};

use super::recommend::RecommendationController;
use crate::movie::{sort_descending, DetailHydrator, MovieRecord, MovieService, SearchError, SortKey};
use crate::render::{Notice, Panel, Screen};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    Idle,
    Validating,
    Fetching,
    Hydrating,
    Ready,
    Error(SearchFailure),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFailure {
    NotFound,
    Transport,
}

/// Owns the current result set and drives a user search end to end.
pub struct ResultsController {
    service: MovieService,
    hydrator: DetailHydrator,
    recommendations: RecommendationController,
    screen: Screen,
    state: SearchState,
    results: Vec<MovieRecord>,
    sort_key: Option<SortKey>,
}

impl ResultsController {
    pub fn new(service: MovieService, recommendations: RecommendationController, screen: Screen) -> Self {
        Self {
            hydrator: DetailHydrator::new(service.clone()),
            service,
            recommendations,
            screen,
            state: SearchState::Idle,
            results: Vec::new(),
            sort_key: None,
        }
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    pub fn results(&self) -> &[MovieRecord] {
        &self.results
    }

    pub fn sort_key(&self) -> Option<SortKey> {
        self.sort_key
    }

    fn transition(&mut self, next: SearchState) {
        debug!(from = ?self.state, to = ?next, "Search state");
        self.state = next;
    }

    /// Run a search for `term`.
    ///
    /// A blank term only shows the validation message: the state, the held
    /// result set and its sort key are left as they were.
    pub async fn search(&mut self, term: &str) {
        let previous = self.state;
        self.transition(SearchState::Validating);

        let term = match MovieService::validate_term(term) {
            Ok(term) => term,
            Err(_) => {
                self.screen.notify(Notice::EmptyTerm);
                self.transition(previous);
                return;
            }
        };

        self.transition(SearchState::Fetching);
        self.screen.clear(Panel::Featured);
        self.screen.clear(Panel::Results);
        self.screen.clear(Panel::Recommendations);

        let hits = match self.service.search_by_title(term).await {
            Ok(hits) => hits,
            Err(e) => {
                self.fail(term, e);
                return;
            }
        };

        self.transition(SearchState::Hydrating);
        let records = self.hydrator.hydrate_all(&hits).await;

        info!(term = term, hits = hits.len(), shown = records.len(), "Search complete");
        self.results = records;
        self.sort_key = None;
        self.transition(SearchState::Ready);

        if self.results.is_empty() {
            self.screen.notify(Notice::NoDisplayableResults);
        }
        self.screen.show(Panel::Results, &self.results);

        let genre = self.results.first().map(MovieRecord::genre_line);
        self.recommendations.fetch(genre.as_deref()).await;
    }

    fn fail(&mut self, term: &str, e: SearchError) {
        self.results.clear();
        self.sort_key = None;

        match e {
            SearchError::NotFound(_) => {
                debug!(term = term, "Movie not found");
                self.transition(SearchState::Error(SearchFailure::NotFound));
                self.screen.notify(Notice::NotFound);
            }
            SearchError::Transport(cause) => {
                error!(term = term, "Error fetching data: {}", cause);
                self.transition(SearchState::Error(SearchFailure::Transport));
                self.screen.notify(Notice::TryAgainLater);
            }
            SearchError::InvalidInput => {
                self.transition(SearchState::Idle);
                self.screen.notify(Notice::EmptyTerm);
            }
        }
    }

    /// Repaint the held result set under `key`. Never touches the network.
    pub fn reorder(&mut self, key: Option<SortKey>) {
        self.sort_key = key;
        let sorted = sort_descending(&self.results, key);
        self.screen.show(Panel::Results, &sorted);
    }

    /// Drop the current search and go back to `Idle`.
    pub fn reset(&mut self) {
        self.results.clear();
        self.sort_key = None;
        self.transition(SearchState::Idle);
    }
}
