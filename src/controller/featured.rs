use futures::future::join_all;
use tracing::{info, warn};

use crate::movie::{MovieRecord, MovieService};
use crate::render::{Panel, Screen};

/// Landing view built from a fixed list of titles.
pub struct FeaturedController {
    service: MovieService,
    screen: Screen,
    records: Vec<MovieRecord>,
}

impl FeaturedController {
    pub fn new(service: MovieService, screen: Screen) -> Self {
        Self {
            service,
            screen,
            records: Vec::new(),
        }
    }

    /// Fetch every title concurrently, keep the successes in title order and show them.
    pub async fn load_defaults(&mut self, titles: &[String]) {
        let results = join_all(titles.iter().map(|t| self.service.fetch_by_exact_title(t))).await;

        self.records = titles
            .iter()
            .zip(results)
            .filter_map(|(title, result)| match result {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!(title = %title, "Dropping featured title: {}", e);
                    None
                }
            })
            .collect();

        info!("Loaded {} of {} featured movies", self.records.len(), titles.len());
        self.show();
    }

    /// Repaint the featured view from memory.
    pub fn show(&self) {
        self.screen.clear(Panel::Results);
        self.screen.clear(Panel::Recommendations);
        self.screen.show(Panel::Featured, &self.records);
    }

    pub fn records(&self) -> &[MovieRecord] {
        &self.records
    }
}
