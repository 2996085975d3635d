use std::cmp::Ordering;
use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::ScoredMovie,
    store::{CatalogStore, SimilarityMatrix},
};

/// Default number of recommendations per query
pub const DEFAULT_K: usize = 8;

/// Content-based recommender over a precomputed similarity matrix
///
/// Wraps the immutable catalog + matrix pair loaded at startup. Construction
/// validates that the two artifacts come from the same offline pipeline run
/// (matrix dimension == catalog size); after that every lookup is a pure
/// read-only transform, safe to share across requests behind an `Arc`.
#[derive(Debug)]
pub struct Recommender {
    catalog: Arc<CatalogStore>,
    matrix: Arc<SimilarityMatrix>,
}

impl Recommender {
    /// Wire the catalog and similarity matrix together
    pub fn new(catalog: Arc<CatalogStore>, matrix: Arc<SimilarityMatrix>) -> AppResult<Self> {
        if matrix.dim() != catalog.len() {
            return Err(AppError::Load(format!(
                "similarity matrix dimension {} does not match catalog size {}",
                matrix.dim(),
                catalog.len()
            )));
        }

        Ok(Self { catalog, matrix })
    }

    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    /// Top-k most similar movies to the given title, best first
    ///
    /// Ties on score rank the lower row index first, matching a stable
    /// descending sort over the row's natural order. The query movie is
    /// excluded by row index, not by score, so a candidate that happens to
    /// share the maximal score still survives. Returns fewer than `k`
    /// entries when the catalog is small, never an error.
    pub fn recommend(&self, title: &str, k: usize) -> AppResult<Vec<ScoredMovie>> {
        let query_index = self.catalog.resolve_index(title)?;
        let row = self.matrix.row(query_index)?;

        if row.len() != self.catalog.len() {
            return Err(AppError::Consistency(format!(
                "similarity row {} has {} entries, expected {}",
                query_index,
                row.len(),
                self.catalog.len()
            )));
        }

        let mut ranked: Vec<(usize, f64)> = row.iter().copied().enumerate().collect();
        ranked.sort_unstable_by(|(left_index, left_score), (right_index, right_score)| {
            right_score
                .total_cmp(left_score)
                .then_with(|| left_index.cmp(right_index))
        });

        let results = ranked
            .into_iter()
            .filter(|&(index, _)| index != query_index)
            .take(k)
            .map(|(index, score)| {
                self.catalog.get(index).map(|movie| ScoredMovie {
                    movie: movie.clone(),
                    score,
                })
            })
            .collect::<AppResult<Vec<_>>>()?;

        tracing::debug!(
            query = %title,
            query_index,
            results = results.len(),
            "Recommendation query completed"
        );

        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Movie;

    fn movie(id: u64, title: &str) -> Movie {
        Movie {
            movie_id: id,
            title: title.to_string(),
        }
    }

    /// Catalog and matrix from spec-style fixtures: row per movie, square.
    fn recommender(titles: &[&str], rows: Vec<Vec<f64>>) -> Recommender {
        let movies = titles
            .iter()
            .enumerate()
            .map(|(i, t)| movie(i as u64, t))
            .collect();
        Recommender::new(
            Arc::new(CatalogStore::from_records(movies)),
            Arc::new(SimilarityMatrix::from_rows(rows).unwrap()),
        )
        .unwrap()
    }

    fn four_movie_recommender() -> Recommender {
        recommender(
            &["A", "B", "C", "D"],
            vec![
                vec![1.0, 0.9, 0.9, 0.1],
                vec![0.9, 1.0, 0.3, 0.2],
                vec![0.9, 0.3, 1.0, 0.4],
                vec![0.1, 0.2, 0.4, 1.0],
            ],
        )
    }

    #[test]
    fn test_dimension_mismatch_rejected_at_wiring() {
        let catalog = Arc::new(CatalogStore::from_records(vec![
            movie(1, "A"),
            movie(2, "B"),
        ]));
        let matrix = Arc::new(SimilarityMatrix::from_rows(vec![vec![1.0]]).unwrap());

        let err = Recommender::new(catalog, matrix).unwrap_err();
        assert!(matches!(err, AppError::Load(_)));
    }

    #[test]
    fn test_tied_scores_rank_lower_index_first() {
        // B (index 1) and C (index 2) both score 0.9 against A.
        let engine = four_movie_recommender();
        let results = engine.recommend("A", 2).unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].movie.title, "B");
        assert_eq!(results[0].score, 0.9);
        assert_eq!(results[1].movie.title, "C");
        assert_eq!(results[1].score, 0.9);
    }

    #[test]
    fn test_query_movie_is_excluded() {
        let engine = four_movie_recommender();
        for title in ["A", "B", "C", "D"] {
            let results = engine.recommend(title, 10).unwrap();
            assert!(
                results.iter().all(|r| r.movie.title != title),
                "query {} appeared in its own results",
                title
            );
        }
    }

    #[test]
    fn test_exclusion_survives_tied_maximal_scores() {
        // C ties with the query's self-similarity; it must still be returned.
        let engine = recommender(
            &["A", "B", "C"],
            vec![
                vec![1.0, 0.2, 1.0],
                vec![0.2, 1.0, 0.5],
                vec![1.0, 0.5, 1.0],
            ],
        );

        let results = engine.recommend("A", 2).unwrap();
        assert_eq!(results[0].movie.title, "C");
        assert_eq!(results[0].score, 1.0);
        assert_eq!(results[1].movie.title, "B");
    }

    #[test]
    fn test_k_larger_than_catalog_returns_all_others() {
        let engine = four_movie_recommender();
        let results = engine.recommend("A", 10).unwrap();
        assert_eq!(results.len(), 3);
    }

    #[test]
    fn test_result_size_bound() {
        let engine = four_movie_recommender();
        for k in 0..6 {
            let results = engine.recommend("B", k).unwrap();
            assert_eq!(results.len(), k.min(3));
        }
    }

    #[test]
    fn test_scores_are_descending() {
        let engine = four_movie_recommender();
        let results = engine.recommend("D", 3).unwrap();
        for pair in results.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn test_deterministic_across_calls() {
        let engine = four_movie_recommender();
        let first = engine.recommend("C", 3).unwrap();
        let second = engine.recommend("C", 3).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_unknown_title_is_not_found() {
        let engine = four_movie_recommender();
        let err = engine.recommend("no-such-title", 8).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_single_movie_catalog_returns_empty() {
        let engine = recommender(&["Only"], vec![vec![1.0]]);
        let results = engine.recommend("Only", 8).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_results_carry_movie_ids() {
        let engine = four_movie_recommender();
        let results = engine.recommend("A", 2).unwrap();
        assert_eq!(results[0].movie.movie_id, 1);
        assert_eq!(results[1].movie.movie_id, 2);
    }
}
