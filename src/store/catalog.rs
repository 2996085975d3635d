use std::collections::HashMap;
use std::path::Path;

use crate::{
    error::{AppError, AppResult},
    models::Movie,
};

/// Immutable movie catalog loaded once at startup
///
/// Holds the ordered list of movies from the catalog artifact. The position
/// of each movie in that list is its row index into the similarity matrix,
/// so insertion order is preserved and never re-sorted.
#[derive(Debug)]
pub struct CatalogStore {
    movies: Vec<Movie>,
    /// Title → lowest row index. Duplicate titles resolve to the first record.
    by_title: HashMap<String, usize>,
}

impl CatalogStore {
    /// Load the catalog artifact (JSON array of ordered movie records)
    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .map_err(|e| AppError::Load(format!("catalog {}: {}", path.display(), e)))?;

        let movies: Vec<Movie> = serde_json::from_slice(&bytes)
            .map_err(|e| AppError::Load(format!("catalog {}: {}", path.display(), e)))?;

        tracing::info!(
            path = %path.display(),
            movies = movies.len(),
            "Loaded movie catalog"
        );

        Ok(Self::from_records(movies))
    }

    /// Build a catalog from already-ordered records
    ///
    /// Record order defines row indices; callers must pass the artifact order.
    pub fn from_records(movies: Vec<Movie>) -> Self {
        let mut by_title = HashMap::with_capacity(movies.len());
        for (index, movie) in movies.iter().enumerate() {
            by_title.entry(movie.title.clone()).or_insert(index);
        }

        Self { movies, by_title }
    }

    /// Resolve a title to its row index
    ///
    /// An unmatched title is a normal outcome (free text from the client),
    /// reported as `NotFound` rather than a load failure.
    pub fn resolve_index(&self, title: &str) -> AppResult<usize> {
        self.by_title
            .get(title)
            .copied()
            .ok_or_else(|| AppError::NotFound(format!("no movie titled \"{}\" in catalog", title)))
    }

    /// Get the movie at a row index
    pub fn get(&self, index: usize) -> AppResult<&Movie> {
        self.movies.get(index).ok_or(AppError::IndexOutOfBounds {
            index,
            len: self.movies.len(),
        })
    }

    /// All titles in catalog order
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.movies.iter().map(|m| m.title.as_str())
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: u64, title: &str) -> Movie {
        Movie {
            movie_id: id,
            title: title.to_string(),
        }
    }

    fn test_catalog() -> CatalogStore {
        CatalogStore::from_records(vec![
            movie(10, "Alien"),
            movie(11, "Blade Runner"),
            movie(12, "Contact"),
            movie(13, "Dune"),
        ])
    }

    #[test]
    fn test_resolve_index_found() {
        let catalog = test_catalog();
        assert_eq!(catalog.resolve_index("Alien").unwrap(), 0);
        assert_eq!(catalog.resolve_index("Dune").unwrap(), 3);
    }

    #[test]
    fn test_resolve_index_not_found() {
        let catalog = test_catalog();
        let err = catalog.resolve_index("Solaris").unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_resolve_index_is_exact_match() {
        let catalog = test_catalog();
        assert!(matches!(
            catalog.resolve_index("alien"),
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            catalog.resolve_index("Alien "),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_duplicate_titles_resolve_to_first_index() {
        let catalog = CatalogStore::from_records(vec![
            movie(1, "Alien"),
            movie(2, "Remake"),
            movie(3, "Remake"),
        ]);
        assert_eq!(catalog.resolve_index("Remake").unwrap(), 1);
    }

    #[test]
    fn test_get_out_of_bounds() {
        let catalog = test_catalog();
        let err = catalog.get(4).unwrap_err();
        assert!(matches!(
            err,
            AppError::IndexOutOfBounds { index: 4, len: 4 }
        ));
    }

    #[test]
    fn test_titles_preserve_catalog_order() {
        let catalog = CatalogStore::from_records(vec![
            movie(1, "Zodiac"),
            movie(2, "Alien"),
            movie(3, "Memento"),
        ]);
        let titles: Vec<&str> = catalog.titles().collect();
        assert_eq!(titles, vec!["Zodiac", "Alien", "Memento"]);
    }

    #[test]
    fn test_load_missing_file() {
        let err = CatalogStore::load("/nonexistent/catalog.json").unwrap_err();
        assert!(matches!(err, AppError::Load(_)));
    }

    #[test]
    fn test_load_rejects_malformed_records() {
        let dir = std::env::temp_dir().join("marquee-catalog-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad.json");
        std::fs::write(&path, r#"[{"title": "No Id"}]"#).unwrap();

        let err = CatalogStore::load(&path).unwrap_err();
        assert!(matches!(err, AppError::Load(_)));
    }
}
