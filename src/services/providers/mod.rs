/// Poster metadata provider abstraction
///
/// The external catalog service (TMDB) sits behind this trait so the
/// enrichment step can be tested against deterministic fixtures instead of
/// the network. Providers are keyed by the stable `movie_id`, never by the
/// similarity-matrix row index.
use crate::error::AppResult;

pub mod tmdb;

#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait PosterProvider: Send + Sync {
    /// Fetch the poster image URL for a movie
    ///
    /// Any failure (transport error, non-success status, missing poster
    /// field) is returned as an error; the enrichment layer decides how to
    /// absorb it.
    async fn fetch_poster(&self, movie_id: u64) -> AppResult<String>;
}
