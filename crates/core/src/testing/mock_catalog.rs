//! Mock movie catalog for testing.

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::catalog::{
    CatalogError, ForwardedResponse, ListingQuery, Movie, MovieCatalog,
};

/// A recorded catalog query for test assertions.
#[derive(Debug, Clone)]
pub enum RecordedQuery {
    ListMovies {
        query: ListingQuery,
    },
    MovieDetails {
        id: u64,
    },
    Recommendations {
        movie_id: u64,
        min_year: i32,
        limit: usize,
    },
    Forward {
        endpoint: String,
        params: Vec<(String, String)>,
    },
}

/// Mock implementation of the MovieCatalog trait.
///
/// Provides controllable behavior for testing:
/// - Queue listing pages and recommendation results
/// - Register movies retrievable by id
/// - Track queries for assertions
/// - Simulate failures
#[derive(Debug)]
pub struct MockMovieCatalog {
    /// Movies by id, served by `movie_details`.
    movies: Arc<RwLock<HashMap<u64, Movie>>>,
    /// Queued listing pages, consumed front-to-back by `list_movies`.
    listing_pages: Arc<RwLock<VecDeque<Vec<Movie>>>>,
    /// Canned recommendation results.
    recommendations: Arc<RwLock<Vec<Movie>>>,
    /// Canned passthrough response.
    forward_response: Arc<RwLock<Option<ForwardedResponse>>>,
    /// Recorded queries.
    queries: Arc<RwLock<Vec<RecordedQuery>>>,
    /// If set, the next operation will fail with this error.
    next_error: Arc<RwLock<Option<CatalogError>>>,
}

impl Default for MockMovieCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl MockMovieCatalog {
    /// Create a new empty mock catalog.
    pub fn new() -> Self {
        Self {
            movies: Arc::new(RwLock::new(HashMap::new())),
            listing_pages: Arc::new(RwLock::new(VecDeque::new())),
            recommendations: Arc::new(RwLock::new(Vec::new())),
            forward_response: Arc::new(RwLock::new(None)),
            queries: Arc::new(RwLock::new(Vec::new())),
            next_error: Arc::new(RwLock::new(None)),
        }
    }

    /// Register a movie retrievable via `movie_details`.
    pub async fn add_movie(&self, movie: Movie) {
        self.movies.write().await.insert(movie.id, movie);
    }

    /// Queue a listing page. Pages are served in FIFO order; once the queue
    /// is empty, listings return an empty page.
    pub async fn push_listing_page(&self, page: Vec<Movie>) {
        self.listing_pages.write().await.push_back(page);
    }

    /// Set the canned recommendation results.
    pub async fn set_recommendations(&self, movies: Vec<Movie>) {
        *self.recommendations.write().await = movies;
    }

    /// Set the canned passthrough response.
    pub async fn set_forward_response(&self, response: ForwardedResponse) {
        *self.forward_response.write().await = Some(response);
    }

    /// Make the next operation fail with the given error.
    pub async fn fail_next(&self, error: CatalogError) {
        *self.next_error.write().await = Some(error);
    }

    /// All recorded queries, in order.
    pub async fn recorded_queries(&self) -> Vec<RecordedQuery> {
        self.queries.read().await.clone()
    }

    async fn record(&self, query: RecordedQuery) {
        self.queries.write().await.push(query);
    }

    async fn take_error(&self) -> Option<CatalogError> {
        self.next_error.write().await.take()
    }
}

#[async_trait]
impl MovieCatalog for MockMovieCatalog {
    async fn list_movies(&self, query: &ListingQuery) -> Result<Vec<Movie>, CatalogError> {
        self.record(RecordedQuery::ListMovies {
            query: query.clone(),
        })
        .await;

        if let Some(error) = self.take_error().await {
            return Err(error);
        }

        Ok(self
            .listing_pages
            .write()
            .await
            .pop_front()
            .unwrap_or_default())
    }

    async fn movie_details(&self, id: u64) -> Result<Movie, CatalogError> {
        self.record(RecordedQuery::MovieDetails { id }).await;

        if let Some(error) = self.take_error().await {
            return Err(error);
        }

        self.movies
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(format!("Movie ID {}", id)))
    }

    async fn recommendations(
        &self,
        movie: &Movie,
        min_year: i32,
        limit: usize,
    ) -> Result<Vec<Movie>, CatalogError> {
        self.record(RecordedQuery::Recommendations {
            movie_id: movie.id,
            min_year,
            limit,
        })
        .await;

        if let Some(error) = self.take_error().await {
            return Err(error);
        }

        // Mirror the real client's genre short-circuit.
        if movie.genres.is_empty() {
            return Ok(Vec::new());
        }

        let mut movies = self.recommendations.read().await.clone();
        movies.truncate(limit);
        Ok(movies)
    }

    async fn forward(
        &self,
        endpoint: &str,
        params: &[(String, String)],
    ) -> Result<ForwardedResponse, CatalogError> {
        self.record(RecordedQuery::Forward {
            endpoint: endpoint.to_string(),
            params: params.to_vec(),
        })
        .await;

        if let Some(error) = self.take_error().await {
            return Err(error);
        }

        Ok(self
            .forward_response
            .read()
            .await
            .clone()
            .unwrap_or(ForwardedResponse {
                status: 200,
                body: Some(serde_json::json!({})),
            }))
    }
}
