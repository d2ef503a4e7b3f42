use tracing::debug;

use crate::controller::{FeaturedController, RecommendationController, ResultsController};
use crate::movie::{MovieService, SortKey};
use crate::render::Screen;

/// Which view currently occupies the main area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Featured,
    Search,
}

/// Wires the controllers together and tracks the active view.
pub struct Session {
    featured: FeaturedController,
    results: ResultsController,
    view: View,
}

impl Session {
    pub fn new(service: MovieService, screen: Screen, recommendation_limit: usize) -> Self {
        let recommendations =
            RecommendationController::new(service.clone(), screen.clone(), recommendation_limit);

        Self {
            featured: FeaturedController::new(service.clone(), screen.clone()),
            results: ResultsController::new(service, recommendations, screen),
            view: View::Featured,
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn results(&self) -> &ResultsController {
        &self.results
    }

    pub async fn load_featured(&mut self, titles: &[String]) {
        self.view = View::Featured;
        self.featured.load_defaults(titles).await;
    }

    pub async fn search(&mut self, term: &str) {
        // A blank term leaves whatever view was showing.
        if MovieService::validate_term(term).is_ok() {
            self.view = View::Search;
        }
        self.results.search(term).await;
    }

    /// Returns false when there is no result view to reorder.
    pub fn sort(&mut self, key: Option<SortKey>) -> bool {
        if self.view != View::Search {
            debug!("Sort ignored outside the search view");
            return false;
        }
        self.results.reorder(key);
        true
    }

    /// Back to the featured view; the search state is discarded.
    pub fn home(&mut self) {
        self.results.reset();
        self.view = View::Featured;
        self.featured.show();
    }
}
