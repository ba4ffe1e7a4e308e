//! TMDB catalog integration.
//!
//! This module provides the client used to query the upstream movie
//! metadata provider for listings, details and recommendations, plus the
//! raw passthrough used by the server-side proxy route.

mod tmdb;
mod types;

pub use tmdb::{TmdbClient, TmdbConfig};
pub use types::*;

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur when querying the movie catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Resource not found (404).
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// API returned an error.
    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    /// Failed to parse response.
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Client not configured (missing access token, etc.).
    #[error("Client not configured: {0}")]
    NotConfigured(String),
}

/// An upstream response relayed verbatim by the proxy route.
#[derive(Debug, Clone)]
pub struct ForwardedResponse {
    /// Upstream HTTP status code.
    pub status: u16,
    /// Parsed JSON body, present only on success. The proxy never relays
    /// upstream error bodies to callers.
    pub body: Option<serde_json::Value>,
}

impl ForwardedResponse {
    /// True when the upstream status is a 2xx.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Trait for movie catalog clients.
///
/// Implemented by [`TmdbClient`] and by the test mock, so API handlers can
/// be exercised without real upstream calls.
#[async_trait]
pub trait MovieCatalog: Send + Sync {
    /// Fetch one page of listing results (search or discovery).
    ///
    /// Returns the `results` array of the listing envelope; an absent field
    /// parses as an empty page.
    async fn list_movies(&self, query: &ListingQuery) -> Result<Vec<Movie>, CatalogError>;

    /// Fetch a movie's full record with cast, videos and similar movies
    /// appended in a single call.
    async fn movie_details(&self, id: u64) -> Result<Movie, CatalogError>;

    /// Fetch recommendations sharing the movie's genres, released in or
    /// after `min_year`, sorted by popularity and truncated to `limit`.
    ///
    /// A movie with no genres short-circuits to an empty list without
    /// issuing a request. Upstream failures also degrade to an empty list;
    /// recommendations are non-critical.
    async fn recommendations(
        &self,
        movie: &Movie,
        min_year: i32,
        limit: usize,
    ) -> Result<Vec<Movie>, CatalogError>;

    /// Forward an arbitrary endpoint + parameter set upstream and relay the
    /// status and JSON body. Used by the proxy route.
    async fn forward(
        &self,
        endpoint: &str,
        params: &[(String, String)],
    ) -> Result<ForwardedResponse, CatalogError>;
}
