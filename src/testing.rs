//! In-memory collaborators shared by the unit tests.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use tokio::sync::Barrier;

use crate::movie::SearchHit;
use crate::omdb::{ApiError, DetailResponse, MovieApi, SearchItem, SearchResponse};
use crate::render::{MovieCard, Notice, Panel, Renderer};

pub fn movie(id: &str, title: &str, year: i32, genre: &str, rating: Option<&str>) -> DetailResponse {
    DetailResponse {
        imdb_id: Some(id.to_string()),
        title: Some(title.to_string()),
        year: Some(year.to_string()),
        genre: Some(genre.to_string()),
        plot: Some(format!("Plot of {}", title)),
        imdb_rating: Some(rating.unwrap_or("N/A").to_string()),
        poster: Some("N/A".to_string()),
        response: "True".to_string(),
        error: None,
    }
}

pub fn hits(ids: &[&str]) -> Vec<SearchHit> {
    ids.iter()
        .map(|id| SearchHit {
            id: id.to_string(),
            title: format!("Title {}", id),
        })
        .collect()
}

/// Fake OMDb that records every call as `search:<term>`, `id:<id>` or `title:<title>`.
#[derive(Default)]
pub struct FakeApi {
    searches: HashMap<String, Vec<(String, String)>>,
    search_failures: HashSet<String>,
    movies: HashMap<String, DetailResponse>,
    id_failures: HashSet<String>,
    malformed_ids: HashSet<String>,
    barrier: Option<Arc<Barrier>>,
    calls: Mutex<Vec<String>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, term: &str, results: &[(&str, &str)]) -> Self {
        let results = results
            .iter()
            .map(|(id, title)| (id.to_string(), title.to_string()))
            .collect();
        self.searches.insert(term.to_string(), results);
        self
    }

    pub fn with_search_failure(mut self, term: &str) -> Self {
        self.search_failures.insert(term.to_string());
        self
    }

    pub fn with_movie(mut self, detail: DetailResponse) -> Self {
        let id = detail.imdb_id.clone().unwrap_or_default();
        self.movies.insert(id, detail);
        self
    }

    pub fn with_id_failure(mut self, id: &str) -> Self {
        self.id_failures.insert(id.to_string());
        self
    }

    pub fn with_malformed_id(mut self, id: &str) -> Self {
        self.malformed_ids.insert(id.to_string());
        self
    }

    /// Make every id lookup wait on `barrier` before answering.
    pub fn with_barrier(mut self, barrier: Arc<Barrier>) -> Self {
        self.barrier = Some(barrier);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn search_calls(&self) -> Vec<String> {
        self.calls_with_prefix("search:")
    }

    pub fn id_calls(&self) -> Vec<String> {
        self.calls_with_prefix("id:")
    }

    fn calls_with_prefix(&self, prefix: &str) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| c.strip_prefix(prefix).map(str::to_string))
            .collect()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn negative(error: &str) -> DetailResponse {
        DetailResponse {
            response: "False".to_string(),
            error: Some(error.to_string()),
            ..Default::default()
        }
    }
}

#[async_trait]
impl MovieApi for FakeApi {
    async fn search(&self, term: &str) -> Result<SearchResponse, ApiError> {
        self.record(format!("search:{}", term));

        if self.search_failures.contains(term) {
            return Err(ApiError::Status(503));
        }

        Ok(match self.searches.get(term) {
            Some(results) => SearchResponse {
                search: results
                    .iter()
                    .map(|(id, title)| SearchItem {
                        title: title.clone(),
                        year: None,
                        imdb_id: id.clone(),
                        item_type: Some("movie".to_string()),
                        poster: None,
                    })
                    .collect(),
                total_results: Some(results.len().to_string()),
                response: "True".to_string(),
                error: None,
            },
            None => SearchResponse {
                response: "False".to_string(),
                error: Some("Movie not found!".to_string()),
                ..Default::default()
            },
        })
    }

    async fn by_id(&self, id: &str) -> Result<DetailResponse, ApiError> {
        self.record(format!("id:{}", id));

        if let Some(barrier) = &self.barrier {
            barrier.wait().await;
        }
        if self.id_failures.contains(id) {
            return Err(ApiError::Status(500));
        }
        if self.malformed_ids.contains(id) {
            return Ok(DetailResponse {
                response: "True".to_string(),
                ..Default::default()
            });
        }

        Ok(self
            .movies
            .get(id)
            .cloned()
            .unwrap_or_else(|| Self::negative("Incorrect IMDb ID.")))
    }

    async fn by_title(&self, title: &str) -> Result<DetailResponse, ApiError> {
        self.record(format!("title:{}", title));

        Ok(self
            .movies
            .values()
            .find(|m| m.title.as_deref() == Some(title))
            .cloned()
            .unwrap_or_else(|| Self::negative("Movie not found!")))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RenderEvent {
    Show(Panel, Vec<String>),
    Clear(Panel),
    Notice(Notice),
}

/// Renderer that keeps everything it was asked to paint.
#[derive(Default)]
pub struct RecordingRenderer {
    events: Mutex<Vec<RenderEvent>>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<RenderEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                RenderEvent::Notice(n) => Some(n),
                _ => None,
            })
            .collect()
    }

    /// Ids of the most recent `show` on `panel`.
    pub fn last_shown(&self, panel: Panel) -> Option<Vec<String>> {
        self.events().into_iter().rev().find_map(|e| match e {
            RenderEvent::Show(p, ids) if p == panel => Some(ids),
            _ => None,
        })
    }

    pub fn show_count(&self, panel: Panel) -> usize {
        self.events()
            .iter()
            .filter(|e| matches!(e, RenderEvent::Show(p, _) if *p == panel))
            .count()
    }
}

impl Renderer for RecordingRenderer {
    fn show(&self, panel: Panel, cards: &[MovieCard]) {
        let ids = cards.iter().map(|c| c.id.clone()).collect();
        self.events.lock().unwrap().push(RenderEvent::Show(panel, ids));
    }

    fn clear(&self, panel: Panel) {
        self.events.lock().unwrap().push(RenderEvent::Clear(panel));
    }

    fn notify(&self, notice: Notice) {
        self.events.lock().unwrap().push(RenderEvent::Notice(notice));
    }
}
