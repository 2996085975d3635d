use std::sync::Arc;

use crate::{
    models::{RecommendationCard, ScoredMovie},
    services::providers::PosterProvider,
};

/// Attach poster URLs to a ranked candidate list
///
/// Fetches are issued in parallel, one task per candidate, and joined back
/// in ranked order. Enrichment is best-effort: any fetch failure is absorbed
/// into the placeholder URL with the locally-known title, never propagated,
/// so a flaky metadata service cannot drop a candidate or fail the response.
pub async fn enrich(
    provider: Arc<dyn PosterProvider>,
    ranked: Vec<ScoredMovie>,
    placeholder_url: &str,
) -> Vec<RecommendationCard> {
    let mut tasks = Vec::with_capacity(ranked.len());

    for scored in &ranked {
        let provider = Arc::clone(&provider);
        let movie_id = scored.movie.movie_id;
        tasks.push(tokio::spawn(
            async move { provider.fetch_poster(movie_id).await },
        ));
    }

    let mut cards = Vec::with_capacity(ranked.len());

    for (scored, task) in ranked.into_iter().zip(tasks) {
        let poster_url = match task.await {
            Ok(Ok(url)) => url,
            Ok(Err(e)) => {
                tracing::warn!(
                    error = %e,
                    movie_id = scored.movie.movie_id,
                    "Poster fetch failed, using placeholder"
                );
                placeholder_url.to_string()
            }
            Err(e) => {
                tracing::error!(error = %e, "Poster fetch task join error");
                placeholder_url.to_string()
            }
        };

        cards.push(RecommendationCard {
            movie_id: scored.movie.movie_id,
            title: scored.movie.title,
            poster_url,
            score: scored.score,
        });
    }

    cards
}
