//! Pagination state machine for the movie grid.
//!
//! The pager owns the accumulated listing results for one view and decides
//! when a fetch may be issued. It performs no I/O itself: callers take a
//! [`PageRequest`] from it, run the fetch, and report the outcome back with
//! the request's generation. Responses from a superseded generation (a
//! filter changed while the fetch was in flight) are dropped instead of
//! being applied to state they no longer belong to.

use crate::catalog::{ListingQuery, Movie};

/// The filter inputs of a grid view, without the page number.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GridFilter {
    /// Free-text search query.
    pub query: Option<String>,
    /// TMDB genre id filter.
    pub genre_id: Option<u64>,
}

impl GridFilter {
    fn listing_query(&self, page: u32) -> ListingQuery {
        ListingQuery {
            query: self.query.clone(),
            genre_id: self.genre_id,
            page,
        }
    }
}

/// A fetch the pager has authorized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// The listing query to issue, page included.
    pub query: ListingQuery,
    /// Generation the result must be reported back with.
    pub generation: u64,
}

/// Lifecycle phase of the pager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerPhase {
    /// No fetch issued yet.
    Idle,
    /// A fetch is in flight; further triggers are no-ops.
    Loading,
    /// Last page landed full; more pages are expected.
    Loaded,
    /// A short or empty page landed; no further pages until a reset.
    Exhausted,
    /// Last fetch failed; retryable via `load_more`.
    Errored,
}

/// Client-side pagination controller.
///
/// The accumulated movie list only ever grows by appending; duplicates from
/// upstream are kept as-is. A page shorter than `page_size` is taken to mean
/// the listing is exhausted. That trades one false exhaustion on an
/// undersized non-final page for not needing a total count from upstream.
#[derive(Debug)]
pub struct MovieGridPager {
    filter: GridFilter,
    movies: Vec<Movie>,
    page: u32,
    phase: PagerPhase,
    error: Option<String>,
    page_size: usize,
    generation: u64,
}

impl MovieGridPager {
    /// Create an idle pager expecting full pages of `page_size` items.
    pub fn new(page_size: usize) -> Self {
        Self {
            filter: GridFilter::default(),
            movies: Vec::new(),
            page: 1,
            phase: PagerPhase::Idle,
            error: None,
            page_size,
            generation: 0,
        }
    }

    /// Apply a filter/query change: discard accumulated state, start a new
    /// generation and authorize a fetch of page 1.
    pub fn reset(&mut self, filter: GridFilter) -> PageRequest {
        self.filter = filter;
        self.movies.clear();
        self.page = 1;
        self.error = None;
        self.generation += 1;
        self.phase = PagerPhase::Loading;
        PageRequest {
            query: self.filter.listing_query(self.page),
            generation: self.generation,
        }
    }

    /// Explicit "load more" trigger.
    ///
    /// Authorizes a fetch of the next page only from `Loaded` or `Errored`
    /// (errors are retryable); a no-op while `Loading` or once `Exhausted`.
    pub fn load_more(&mut self) -> Option<PageRequest> {
        match self.phase {
            PagerPhase::Loaded | PagerPhase::Errored => {
                self.error = None;
                self.phase = PagerPhase::Loading;
                Some(PageRequest {
                    query: self.filter.listing_query(self.page),
                    generation: self.generation,
                })
            }
            PagerPhase::Idle | PagerPhase::Loading | PagerPhase::Exhausted => None,
        }
    }

    /// Report a successful fetch. Results from a stale generation are
    /// dropped without touching state.
    pub fn complete(&mut self, generation: u64, page: Vec<Movie>) {
        if generation != self.generation || self.phase != PagerPhase::Loading {
            return;
        }

        let count = page.len();
        self.movies.extend(page);

        if count >= self.page_size {
            self.page += 1;
            self.phase = PagerPhase::Loaded;
        } else {
            self.phase = PagerPhase::Exhausted;
        }
    }

    /// Report a failed fetch. Accumulated movies and the page counter are
    /// left untouched; stale generations are dropped.
    pub fn fail(&mut self, generation: u64, message: impl Into<String>) {
        if generation != self.generation || self.phase != PagerPhase::Loading {
            return;
        }
        self.error = Some(message.into());
        self.phase = PagerPhase::Errored;
    }

    /// Accumulated movies, in arrival order.
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// Current phase.
    pub fn phase(&self) -> PagerPhase {
        self.phase
    }

    /// Next page the pager would fetch.
    pub fn next_page(&self) -> u32 {
        self.page
    }

    /// User-visible error message from the last failed fetch.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// True once a short or empty page has been seen for this filter.
    pub fn is_exhausted(&self) -> bool {
        self.phase == PagerPhase::Exhausted
    }
}
