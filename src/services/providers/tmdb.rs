/// TMDB poster provider
///
/// Fetches movie details from `GET /movie/{id}` and turns the returned
/// `poster_path` into a full image URL. A missing or null `poster_path` is
/// reported as an error so the caller can fall back to its placeholder.
use reqwest::Client as HttpClient;

use crate::{
    error::{AppError, AppResult},
    models::TmdbMovieDetails,
    services::providers::PosterProvider,
};

#[derive(Clone)]
pub struct TmdbProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    image_base_url: String,
}

impl TmdbProvider {
    pub fn new(api_key: String, api_url: String, image_base_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url,
            image_base_url,
        }
    }

    fn details_url(&self, movie_id: u64) -> String {
        format!("{}/movie/{}", self.api_url, movie_id)
    }

    /// Join the image base with TMDB's poster path, which starts with '/'
    fn poster_url(&self, poster_path: &str) -> String {
        format!(
            "{}/{}",
            self.image_base_url.trim_end_matches('/'),
            poster_path.trim_start_matches('/')
        )
    }
}

#[async_trait::async_trait]
impl PosterProvider for TmdbProvider {
    async fn fetch_poster(&self, movie_id: u64) -> AppResult<String> {
        let response = self
            .http_client
            .get(self.details_url(movie_id))
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("language", "en-US"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "TMDB API returned status {}: {}",
                status, body
            )));
        }

        let details: TmdbMovieDetails = response.json().await?;

        let poster_path = details.poster_path.ok_or_else(|| {
            AppError::ExternalApi(format!("No poster_path for movie {}", movie_id))
        })?;

        tracing::debug!(movie_id, provider = "tmdb", "Poster fetched");

        Ok(self.poster_url(&poster_path))
    }
}
