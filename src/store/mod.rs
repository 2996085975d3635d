pub mod catalog;
pub mod similarity;

pub use catalog::CatalogStore;
pub use similarity::SimilarityMatrix;
