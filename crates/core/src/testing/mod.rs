//! Testing utilities and mock implementations.
//!
//! This module provides a mock catalog plus movie fixtures so API handlers
//! and pagination logic can be exercised without real TMDB calls.

mod mock_catalog;

pub use mock_catalog::{MockMovieCatalog, RecordedQuery};

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::catalog::{Genre, Movie};

    /// A bare movie with just an id and title, as a listing would return it.
    pub fn movie(id: u64, title: &str) -> Movie {
        Movie {
            id,
            title: title.to_string(),
            poster_path: None,
            backdrop_path: None,
            release_date: None,
            vote_average: None,
            overview: None,
            genres: vec![],
            runtime: None,
            credits: None,
            videos: None,
            similar: None,
        }
    }

    /// A movie carrying genre tags, as a detail fetch would return it.
    pub fn movie_with_genres(id: u64, title: &str, genres: &[(u64, &str)]) -> Movie {
        Movie {
            genres: genres
                .iter()
                .map(|(id, name)| Genre {
                    id: *id,
                    name: name.to_string(),
                })
                .collect(),
            ..movie(id, title)
        }
    }

    /// A full listing page of `count` sequentially-numbered movies.
    pub fn listing_page(start_id: u64, count: usize) -> Vec<Movie> {
        (start_id..start_id + count as u64)
            .map(|id| movie(id, &format!("Movie {}", id)))
            .collect()
    }
}
