//! Server-side TMDB proxy route.
//!
//! Forwards a generic "endpoint + parameters" request upstream so the
//! access token never leaves the server, and stamps successful responses
//! with a shared-cache directive.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;
use tracing::error;

use crate::metrics::PROXY_UPSTREAM_RESPONSES;
use crate::state::AppState;

/// Fresh for one hour in shared caches, servable-stale for a day while
/// revalidating.
const CACHE_CONTROL: &str = "public, s-maxage=3600, stale-while-revalidate=86400";

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
        .into_response()
}

/// GET /api/v1/movies/proxy
///
/// Requires an `endpoint` query parameter naming the upstream relative
/// path; every other parameter is forwarded as-is. The `endpoint` key
/// itself is never part of the forwarded query string.
pub async fn proxy(
    State(state): State<Arc<AppState>>,
    Query(mut params): Query<HashMap<String, String>>,
) -> Response {
    let endpoint = match params.remove("endpoint") {
        Some(endpoint) if !endpoint.is_empty() => endpoint,
        _ => {
            return error_response(StatusCode::BAD_REQUEST, "Missing endpoint parameter");
        }
    };

    let Some(catalog) = state.catalog() else {
        return error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "TMDB token not configured",
        );
    };

    let forwarded: Vec<(String, String)> = params.into_iter().collect();

    match catalog.forward(&endpoint, &forwarded).await {
        Ok(upstream) => {
            PROXY_UPSTREAM_RESPONSES
                .with_label_values(&[&upstream.status.to_string()])
                .inc();

            if upstream.is_success() {
                let body = upstream.body.unwrap_or(Value::Null);
                ([(header::CACHE_CONTROL, CACHE_CONTROL)], Json(body)).into_response()
            } else {
                // Propagate the upstream status without leaking its body.
                let status = StatusCode::from_u16(upstream.status)
                    .unwrap_or(StatusCode::BAD_GATEWAY);
                error_response(status, "TMDB API error")
            }
        }
        Err(e) => {
            error!("Proxy fetch for '{}' failed: {}", endpoint, e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }
    }
}
