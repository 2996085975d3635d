use serde::{Deserialize, Serialize};

/// A catalog entry for a single movie
///
/// `movie_id` is the stable TMDB identifier used for poster lookups; the
/// position of the record within the catalog artifact is the row/column
/// coordinate into the similarity matrix.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    pub movie_id: u64,
    pub title: String,
}

/// A ranked candidate produced by the recommender
///
/// The score is kept alongside the movie even though clients may discard it.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScoredMovie {
    pub movie: Movie,
    pub score: f64,
}

/// A fully enriched recommendation returned to the client
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendationCard {
    pub movie_id: u64,
    pub title: String,
    pub poster_url: String,
    pub score: f64,
}

// ============================================================================
// TMDB API Types
// ============================================================================

/// Movie details response from GET /movie/{id}
///
/// Only the poster path is consumed; TMDB's other fields are ignored.
/// `poster_path` may be absent or explicitly null, both mean "no poster".
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbMovieDetails {
    #[serde(default)]
    pub poster_path: Option<String>,
}
