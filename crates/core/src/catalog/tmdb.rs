//! TMDB (The Movie Database) API client.
//!
//! All requests carry the v4 read access token as a bearer credential.
//! Bodies are parsed fully before returning; nothing is streamed.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::types::{ListingQuery, Movie};
use super::{CatalogError, ForwardedResponse, MovieCatalog};

/// Sub-resources appended to a detail fetch in a single call.
const DETAIL_APPEND: &str = "credits,videos,similar";

/// Quality thresholds applied to recommendation queries.
const RECOMMENDATION_MIN_VOTE_AVERAGE: &str = "6.0";
const RECOMMENDATION_MIN_VOTE_COUNT: &str = "100";

/// TMDB API client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TmdbConfig {
    /// TMDB v4 read access token. An empty token is the misconfiguration
    /// signal; it is usually supplied via `VIDORA_TMDB_ACCESS_TOKEN`.
    #[serde(default)]
    pub access_token: String,
    /// Base URL (default: https://api.themoviedb.org/3).
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Image base URL for posters/backdrops.
    #[serde(default = "default_image_base_url")]
    pub image_base_url: String,
    /// Request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for TmdbConfig {
    fn default() -> Self {
        Self {
            access_token: String::new(),
            base_url: default_base_url(),
            image_base_url: default_image_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_base_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}

fn default_image_base_url() -> String {
    "https://image.tmdb.org/t/p".to_string()
}

fn default_timeout() -> u64 {
    30
}

/// TMDB API client.
pub struct TmdbClient {
    client: Client,
    base_url: String,
    access_token: String,
    image_base_url: String,
}

impl TmdbClient {
    /// Create a new TMDB client.
    pub fn new(config: TmdbConfig) -> Result<Self, CatalogError> {
        if config.access_token.is_empty() {
            return Err(CatalogError::NotConfigured(
                "TMDB access token is required".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url,
            access_token: config.access_token,
            image_base_url: config.image_base_url,
        })
    }

    /// Image base URL for resolving poster/backdrop path fragments.
    pub fn image_base_url(&self) -> &str {
        &self.image_base_url
    }

    fn get(&self, endpoint: &str) -> reqwest::RequestBuilder {
        self.client
            .get(format!("{}/{}", self.base_url, endpoint))
            .bearer_auth(&self.access_token)
            .header(reqwest::header::ACCEPT, "application/json")
    }
}

#[async_trait]
impl MovieCatalog for TmdbClient {
    async fn list_movies(&self, query: &ListingQuery) -> Result<Vec<Movie>, CatalogError> {
        let endpoint = query.endpoint();

        debug!("TMDB listing: endpoint={}, page={}", endpoint, query.page);

        let response = self.get(endpoint).query(&query.params()).send().await?;

        let status = response.status();
        if status == 401 {
            return Err(CatalogError::NotConfigured(
                "Invalid TMDB access token".to_string(),
            ));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CatalogError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let envelope: ListingEnvelope = response.json().await.map_err(|e| {
            CatalogError::ParseError(format!("Failed to parse listing response: {}", e))
        })?;

        Ok(envelope.results)
    }

    async fn movie_details(&self, id: u64) -> Result<Movie, CatalogError> {
        debug!("TMDB movie details: id={}", id);

        let response = self
            .get(&format!("movie/{}", id))
            .query(&[("append_to_response", DETAIL_APPEND)])
            .send()
            .await?;

        let status = response.status();
        if status == 404 {
            return Err(CatalogError::NotFound(format!("Movie ID {}", id)));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CatalogError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let movie: Movie = response.json().await.map_err(|e| {
            CatalogError::ParseError(format!("Failed to parse movie details: {}", e))
        })?;

        Ok(movie)
    }

    async fn recommendations(
        &self,
        movie: &Movie,
        min_year: i32,
        limit: usize,
    ) -> Result<Vec<Movie>, CatalogError> {
        let genre_ids = movie
            .genres
            .iter()
            .map(|g| g.id.to_string())
            .collect::<Vec<_>>()
            .join(",");

        // A genre-less movie would yield an unfiltered discovery query.
        if genre_ids.is_empty() {
            return Ok(Vec::new());
        }

        debug!(
            "TMDB recommendations: movie={}, genres={}, min_year={}",
            movie.id, genre_ids, min_year
        );

        let min_release_date = format!("{}-01-01", min_year);
        let response = self
            .get("discover/movie")
            .query(&[
                ("with_genres", genre_ids.as_str()),
                ("primary_release_date.gte", min_release_date.as_str()),
                ("sort_by", "popularity.desc"),
                ("vote_average.gte", RECOMMENDATION_MIN_VOTE_AVERAGE),
                ("vote_count.gte", RECOMMENDATION_MIN_VOTE_COUNT),
                ("page", "1"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // Recommendations are non-critical; degrade to an empty list.
            let body = response.text().await.unwrap_or_default();
            warn!(
                "TMDB recommendations fetch failed: status={}, body={}",
                status, body
            );
            return Ok(Vec::new());
        }

        let envelope: ListingEnvelope = response.json().await.map_err(|e| {
            CatalogError::ParseError(format!("Failed to parse recommendations: {}", e))
        })?;

        let mut movies = envelope.results;
        movies.truncate(limit);
        Ok(movies)
    }

    async fn forward(
        &self,
        endpoint: &str,
        params: &[(String, String)],
    ) -> Result<ForwardedResponse, CatalogError> {
        debug!("TMDB passthrough: endpoint={}", endpoint);

        let response = self.get(endpoint).query(params).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Ok(ForwardedResponse {
                status: status.as_u16(),
                body: None,
            });
        }

        let body: serde_json::Value = response.json().await.map_err(|e| {
            CatalogError::ParseError(format!("Failed to parse upstream response: {}", e))
        })?;

        Ok(ForwardedResponse {
            status: status.as_u16(),
            body: Some(body),
        })
    }
}

#[derive(Debug, Deserialize)]
struct ListingEnvelope {
    #[serde(default)]
    results: Vec<Movie>,
}
