//! Types for TMDB catalog responses.

use serde::{Deserialize, Serialize};

/// Genre label to TMDB genre id mapping used by the browse UI.
///
/// Id 0 is the "no filter" sentinel for the catch-all category.
pub const GENRE_FILTERS: &[(&str, u64)] = &[
    ("All Popular", 0),
    ("Action", 28),
    ("Adventure", 12),
    ("Animation", 16),
    ("Comedy", 35),
    ("Horror", 27),
    ("Romance", 10749),
    ("Kids", 10751),
];

/// Resolve a human-readable genre label to a TMDB genre id.
///
/// Returns `None` for the "All Popular" sentinel and for unknown labels,
/// both of which mean "no genre filter".
pub fn genre_id(label: &str) -> Option<u64> {
    GENRE_FILTERS
        .iter()
        .find(|(name, _)| *name == label)
        .map(|(_, id)| *id)
        .filter(|id| *id != 0)
}

/// A TMDB movie record.
///
/// The `credits`, `videos` and `similar` sub-resources are only present when
/// explicitly requested with `append_to_response`; `None` means "not
/// requested", never "empty".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    /// TMDB movie id.
    pub id: u64,
    /// Movie title.
    pub title: String,
    /// Poster path (relative to the TMDB image base URL).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster_path: Option<String>,
    /// Backdrop path (relative to the TMDB image base URL).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backdrop_path: Option<String>,
    /// Release date (YYYY-MM-DD).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    /// Average vote (0-10).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vote_average: Option<f32>,
    /// Overview/synopsis.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    /// Genre tags. Listing responses omit these, so absence parses as empty.
    #[serde(default)]
    pub genres: Vec<Genre>,
    /// Runtime in minutes (details only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime: Option<u32>,
    /// Cast list, present only when requested via `append_to_response`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credits: Option<Credits>,
    /// Trailers/videos, present only when requested via `append_to_response`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub videos: Option<VideoResults>,
    /// Similar movies, present only when requested via `append_to_response`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub similar: Option<SimilarResults>,
}

impl Movie {
    /// Get the release year from the release date.
    pub fn year(&self) -> Option<u32> {
        self.release_date
            .as_ref()
            .and_then(|d| d.split('-').next())
            .and_then(|y| y.parse().ok())
    }

    /// Resolve the poster path against an image base URL.
    pub fn poster_url(&self, image_base: &str, size: &str) -> Option<String> {
        self.poster_path
            .as_ref()
            .map(|p| format!("{}/{}{}", image_base, size, p))
    }

    /// Resolve the backdrop path against an image base URL.
    pub fn backdrop_url(&self, image_base: &str, size: &str) -> Option<String> {
        self.backdrop_path
            .as_ref()
            .map(|p| format!("{}/{}{}", image_base, size, p))
    }

    /// First YouTube trailer in the video list, if videos were requested.
    pub fn trailer(&self) -> Option<&Video> {
        self.videos
            .as_ref()?
            .results
            .iter()
            .find(|v| v.site == "YouTube" && v.kind == "Trailer")
    }
}

/// A TMDB genre tag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Genre {
    /// TMDB genre id.
    pub id: u64,
    /// Genre name.
    pub name: String,
}

/// Cast sub-resource from `append_to_response=credits`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Credits {
    #[serde(default)]
    pub cast: Vec<CastMember>,
}

/// A cast member.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CastMember {
    pub name: String,
}

/// Video sub-resource from `append_to_response=videos`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VideoResults {
    #[serde(default)]
    pub results: Vec<Video>,
}

/// A trailer/teaser video entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Video {
    /// Key used to build the playback URL on the hosting site.
    pub key: String,
    /// Hosting site (e.g. "YouTube").
    pub site: String,
    /// Video type tag (e.g. "Trailer", "Teaser").
    #[serde(rename = "type")]
    pub kind: String,
}

impl Video {
    /// Playback URL for the video. Only YouTube keys are resolvable.
    pub fn watch_url(&self) -> Option<String> {
        if self.site == "YouTube" {
            Some(format!("https://www.youtube.com/watch?v={}", self.key))
        } else {
            None
        }
    }
}

/// Similar-movies sub-resource from `append_to_response=similar`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimilarResults {
    #[serde(default)]
    pub results: Vec<Movie>,
}

/// A listing query: search or discovery, with optional genre filter.
///
/// Page numbers are 1-based. Genre id 0 is the "no filter" sentinel and is
/// treated the same as no genre id at all.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListingQuery {
    /// Free-text search query. Empty or absent means discovery mode.
    pub query: Option<String>,
    /// TMDB genre id filter.
    pub genre_id: Option<u64>,
    /// Page to fetch (1-based).
    pub page: u32,
}

impl ListingQuery {
    /// Discovery listing with no filters, starting at page 1.
    pub fn discover() -> Self {
        Self {
            query: None,
            genre_id: None,
            page: 1,
        }
    }

    /// Search listing for the given query text, starting at page 1.
    pub fn search(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            genre_id: None,
            page: 1,
        }
    }

    /// Set the genre filter.
    pub fn with_genre(mut self, genre_id: u64) -> Self {
        self.genre_id = Some(genre_id);
        self
    }

    /// Set the page to fetch.
    pub fn at_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// True when this is a text search rather than a discovery listing.
    pub fn is_search(&self) -> bool {
        self.query.as_deref().is_some_and(|q| !q.trim().is_empty())
    }

    /// TMDB endpoint for this query.
    pub fn endpoint(&self) -> &'static str {
        if self.is_search() {
            "search/movie"
        } else {
            "discover/movie"
        }
    }

    /// Render the query parameters for the TMDB request.
    pub fn params(&self) -> Vec<(String, String)> {
        let mut params = vec![("page".to_string(), self.page.to_string())];
        if let Some(query) = self.query.as_deref().filter(|q| !q.trim().is_empty()) {
            params.push(("query".to_string(), query.to_string()));
        }
        if let Some(genre_id) = self.genre_id.filter(|id| *id != 0) {
            params.push(("with_genres".to_string(), genre_id.to_string()));
        }
        params
    }
}
