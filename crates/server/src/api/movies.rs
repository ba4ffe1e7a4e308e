//! Movie listing, detail and recommendation API handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use vidora_core::{genre_id, CatalogError, ListingQuery, Movie};

use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ListingParams {
    /// Free-text search query.
    #[serde(default)]
    pub search: Option<String>,
    /// Human-readable genre label, resolved through the genre table.
    #[serde(default)]
    pub genre: Option<String>,
    /// Page to fetch (1-based, default 1).
    #[serde(default = "default_page")]
    pub page: u32,
}

fn default_page() -> u32 {
    1
}

#[derive(Debug, Deserialize)]
pub struct RecommendationParams {
    #[serde(default)]
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn unconfigured() -> ApiError {
    (
        StatusCode::SERVICE_UNAVAILABLE,
        Json(ErrorResponse {
            error: "TMDB catalog not configured".to_string(),
        }),
    )
}

fn map_catalog_error(e: CatalogError) -> ApiError {
    let status = match e {
        CatalogError::NotFound(_) => StatusCode::NOT_FOUND,
        CatalogError::NotConfigured(_) => StatusCode::SERVICE_UNAVAILABLE,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (
        status,
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
}

/// GET /api/v1/movies
///
/// One page of listing results: a search when `search` is present,
/// otherwise discovery, optionally filtered by genre label.
pub async fn list_movies(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListingParams>,
) -> Result<Json<Vec<Movie>>, impl IntoResponse> {
    let Some(catalog) = state.catalog() else {
        return Err(unconfigured());
    };

    let query = ListingQuery {
        query: params.search,
        genre_id: params.genre.as_deref().and_then(genre_id),
        page: params.page,
    };

    match catalog.list_movies(&query).await {
        Ok(movies) => Ok(Json(movies)),
        Err(e) => Err(map_catalog_error(e)),
    }
}

/// GET /api/v1/movies/{id}
///
/// Full movie record with cast, videos and similar movies appended.
pub async fn get_movie(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<Json<Movie>, impl IntoResponse> {
    let Some(catalog) = state.catalog() else {
        return Err(unconfigured());
    };

    match catalog.movie_details(id).await {
        Ok(movie) => Ok(Json(movie)),
        Err(e) => Err(map_catalog_error(e)),
    }
}

/// GET /api/v1/movies/{id}/recommendations
///
/// Popular movies sharing the movie's genres, released in or after the
/// configured minimum year. Empty when the movie has no genres or the
/// upstream query fails; recommendations never fail the detail view.
pub async fn get_recommendations(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
    Query(params): Query<RecommendationParams>,
) -> Result<Json<Vec<Movie>>, impl IntoResponse> {
    let Some(catalog) = state.catalog() else {
        return Err(unconfigured());
    };

    let config = &state.config().recommendations;
    let limit = params.limit.unwrap_or(config.limit);

    let movie = match catalog.movie_details(id).await {
        Ok(movie) => movie,
        Err(e) => return Err(map_catalog_error(e)),
    };

    match catalog.recommendations(&movie, config.min_year, limit).await {
        Ok(movies) => Ok(Json(movies)),
        Err(e) => Err(map_catalog_error(e)),
    }
}
