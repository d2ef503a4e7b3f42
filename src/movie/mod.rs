pub mod hydrate;
pub mod record;
pub mod service;
pub mod sort;

pub use hydrate::DetailHydrator;
pub use record::{MovieRecord, RecordError, SearchHit};
pub use service::{FetchError, MovieService, SearchError, TransportError};
pub use sort::{sort_descending, ParseSortKeyError, SortKey};
