use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Path to the movie catalog artifact (JSON, ordered records)
    #[serde(default = "default_catalog_path")]
    pub catalog_path: String,

    /// Path to the precomputed similarity matrix artifact (JSON, N rows of N scores)
    #[serde(default = "default_similarity_path")]
    pub similarity_path: String,

    /// TMDB API key
    pub tmdb_api_key: String,

    /// TMDB API base URL
    #[serde(default = "default_tmdb_api_url")]
    pub tmdb_api_url: String,

    /// Base URL for poster images
    #[serde(default = "default_image_base_url")]
    pub image_base_url: String,

    /// Fallback image URL used when a poster cannot be fetched
    #[serde(default = "default_placeholder_poster_url")]
    pub placeholder_poster_url: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_catalog_path() -> String {
    "artifacts/catalog.json".to_string()
}

fn default_similarity_path() -> String {
    "artifacts/similarity.json".to_string()
}

fn default_tmdb_api_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}

fn default_image_base_url() -> String {
    "https://image.tmdb.org/t/p/w500".to_string()
}

fn default_placeholder_poster_url() -> String {
    "https://via.placeholder.com/500x750?text=No+Image".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}
