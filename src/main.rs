use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use marquee_api::{
    api::{create_router, AppState},
    config::Config,
    services::{providers::tmdb::TmdbProvider, Recommender},
    store::{CatalogStore, SimilarityMatrix},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let catalog = Arc::new(CatalogStore::load(&config.catalog_path)?);
    let matrix = Arc::new(SimilarityMatrix::load(&config.similarity_path)?);
    let recommender = Arc::new(Recommender::new(catalog, matrix)?);

    let posters = Arc::new(TmdbProvider::new(
        config.tmdb_api_key.clone(),
        config.tmdb_api_url.clone(),
        config.image_base_url.clone(),
    ));

    let state = AppState::new(recommender, posters, config.placeholder_poster_url.clone());
    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
