use tracing::{debug, warn};

use crate::movie::record::primary_token;
use crate::movie::{DetailHydrator, MovieService};
use crate::render::{Panel, Screen};

/// Secondary feed keyed on the primary genre of the top search result.
#[derive(Clone)]
pub struct RecommendationController {
    service: MovieService,
    hydrator: DetailHydrator,
    screen: Screen,
    limit: usize,
}

impl RecommendationController {
    pub fn new(service: MovieService, screen: Screen, limit: usize) -> Self {
        Self {
            hydrator: DetailHydrator::new(service.clone()),
            service,
            screen,
            limit,
        }
    }

    /// Search on the first token of `genre` and show up to `limit` hydrated hits.
    ///
    /// Failures are logged only; the panel stays empty.
    pub async fn fetch(&self, genre: Option<&str>) {
        let Some(term) = genre.and_then(primary_token) else {
            debug!("No genre, skipping recommendations");
            return;
        };

        self.screen.clear(Panel::Recommendations);

        let hits = match self.service.search_by_title(term).await {
            Ok(hits) => hits,
            Err(e) => {
                warn!(genre = term, "Recommendation search failed: {}", e);
                return;
            }
        };

        let capped: Vec<_> = hits.into_iter().take(self.limit).collect();
        let records = self.hydrator.hydrate_all(&capped).await;

        debug!(genre = term, count = records.len(), "Showing recommendations");
        self.screen.show(Panel::Recommendations, &records);
    }
}
