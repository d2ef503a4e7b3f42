pub mod featured;
pub mod recommend;
pub mod results;

pub use featured::FeaturedController;
pub use recommend::RecommendationController;
pub use results::{ResultsController, SearchFailure, SearchState};
