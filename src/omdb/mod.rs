pub mod client;
pub mod types;

pub use client::{ApiError, MovieApi, OmdbClient};
pub use types::{DetailResponse, SearchItem, SearchResponse};
