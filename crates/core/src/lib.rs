pub mod browse;
pub mod catalog;
pub mod config;
pub mod testing;

pub use browse::{Debouncer, GridFilter, MovieGridPager, PageRequest, PagerPhase};
pub use catalog::{
    genre_id, CastMember, CatalogError, Credits, ForwardedResponse, Genre, ListingQuery, Movie,
    MovieCatalog, SimilarResults, TmdbClient, TmdbConfig, Video, VideoResults, GENRE_FILTERS,
};
pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, ListingConfig,
    RecommendationConfig, SanitizedConfig, SearchConfig, ServerConfig, TMDB_TOKEN_ENV,
};
