use std::sync::Arc;

use crate::services::{providers::PosterProvider, Recommender};

/// Shared application state
///
/// Everything here is immutable after startup; handlers only read. Swapping
/// artifacts means building a whole new `Recommender` and a new state, never
/// mutating in place.
#[derive(Clone)]
pub struct AppState {
    pub recommender: Arc<Recommender>,
    pub posters: Arc<dyn PosterProvider>,
    pub placeholder_poster_url: Arc<str>,
}

impl AppState {
    pub fn new(
        recommender: Arc<Recommender>,
        posters: Arc<dyn PosterProvider>,
        placeholder_poster_url: String,
    ) -> Self {
        Self {
            recommender,
            posters,
            placeholder_poster_url: placeholder_poster_url.into(),
        }
    }
}
