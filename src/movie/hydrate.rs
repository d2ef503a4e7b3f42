use futures::future::join_all;
use std::collections::HashSet;
use tracing::{debug, warn};

use super::record::{MovieRecord, SearchHit};
use super::service::MovieService;

/// Turns search hits into full records.
#[derive(Clone)]
pub struct DetailHydrator {
    service: MovieService,
}

impl DetailHydrator {
    pub fn new(service: MovieService) -> Self {
        Self { service }
    }

    /// Fetch every distinct hit concurrently and keep the successes in hit order.
    ///
    /// Failed lookups are logged and dropped. The result may be empty.
    pub async fn hydrate_all(&self, hits: &[SearchHit]) -> Vec<MovieRecord> {
        let mut seen = HashSet::new();
        let distinct: Vec<&SearchHit> = hits.iter().filter(|h| seen.insert(h.id.as_str())).collect();

        let results = join_all(distinct.iter().map(|hit| self.service.fetch_by_id(&hit.id))).await;

        let records: Vec<MovieRecord> = distinct
            .iter()
            .zip(results)
            .filter_map(|(hit, result)| match result {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!(id = %hit.id, title = %hit.title, "Dropping hit: {}", e);
                    None
                }
            })
            .collect();

        debug!(hits = hits.len(), hydrated = records.len(), "Hydration settled");
        records
    }
}
