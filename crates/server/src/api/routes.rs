use axum::{middleware::from_fn, routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::{handlers, middleware, movies, proxy};
use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    // API routes
    let api_routes = Router::new()
        // Health and config
        .route("/health", get(handlers::health))
        .route("/config", get(handlers::get_config))
        // Movies
        .route("/movies", get(movies::list_movies))
        .route("/movies/proxy", get(proxy::proxy))
        .route("/movies/{id}", get(movies::get_movie))
        .route(
            "/movies/{id}/recommendations",
            get(movies::get_recommendations),
        )
        .with_state(state);

    Router::new()
        .nest("/api/v1", api_routes)
        .route("/metrics", get(handlers::metrics))
        .layer(from_fn(middleware::metrics_middleware))
        .layer(TraceLayer::new_for_http())
}
