use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::{
    error::{AppError, AppResult},
    models::RecommendationCard,
    services::{enrichment, recommendations::DEFAULT_K},
};

use super::AppState;

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct RecommendQuery {
    pub title: String,
    pub k: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub query: String,
    pub results: Vec<RecommendationCard>,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// All movie titles in catalog order, for populating the client's selector
pub async fn list_titles(State(state): State<AppState>) -> Json<Vec<String>> {
    let titles: Vec<String> = state
        .recommender
        .catalog()
        .titles()
        .map(str::to_owned)
        .collect();
    Json(titles)
}

/// Ranked recommendations for a movie title, enriched with poster URLs
pub async fn recommend(
    State(state): State<AppState>,
    Query(params): Query<RecommendQuery>,
) -> AppResult<Json<RecommendationResponse>> {
    if params.title.trim().is_empty() {
        return Err(AppError::InvalidInput(
            "Query title cannot be empty".to_string(),
        ));
    }

    let k = params.k.unwrap_or(DEFAULT_K);
    let ranked = state.recommender.recommend(&params.title, k)?;

    let results = enrichment::enrich(
        Arc::clone(&state.posters),
        ranked,
        &state.placeholder_poster_url,
    )
    .await;

    tracing::info!(
        query = %params.title,
        k,
        results = results.len(),
        "Recommendations served"
    );

    Ok(Json(RecommendationResponse {
        query: params.title,
        results,
    }))
}
