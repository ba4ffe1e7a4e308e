use serde::{Deserialize, Serialize};
use std::net::IpAddr;

use crate::catalog::TmdbConfig;

/// Root configuration
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub tmdb: TmdbConfig,
    #[serde(default)]
    pub listing: ListingConfig,
    #[serde(default)]
    pub recommendations: RecommendationConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> IpAddr {
    "0.0.0.0".parse().unwrap()
}

fn default_port() -> u16 {
    8080
}

/// Listing/pagination configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ListingConfig {
    /// Expected full-page size; a shorter page marks the listing exhausted.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

fn default_page_size() -> u32 {
    20
}

/// Recommendation query configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RecommendationConfig {
    /// Minimum release year (recommendations are filtered to Jan 1 of this
    /// year or later).
    #[serde(default = "default_min_year")]
    pub min_year: i32,
    /// Maximum number of recommendations returned.
    #[serde(default = "default_recommendation_limit")]
    pub limit: usize,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            min_year: default_min_year(),
            limit: default_recommendation_limit(),
        }
    }
}

fn default_min_year() -> i32 {
    2000
}

fn default_recommendation_limit() -> usize {
    12
}

/// Search input configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Quiet period for debounced search input, in milliseconds.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
        }
    }
}

fn default_debounce_ms() -> u64 {
    500
}

/// Sanitized config for API responses (access token redacted)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedConfig {
    pub server: ServerConfig,
    pub tmdb: SanitizedTmdbConfig,
    pub listing: ListingConfig,
    pub recommendations: RecommendationConfig,
    pub search: SearchConfig,
}

/// Sanitized TMDB config (access token hidden)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedTmdbConfig {
    pub base_url: String,
    pub image_base_url: String,
    pub access_token_configured: bool,
    pub timeout_secs: u64,
}

impl From<&Config> for SanitizedConfig {
    fn from(config: &Config) -> Self {
        Self {
            server: config.server.clone(),
            tmdb: SanitizedTmdbConfig {
                base_url: config.tmdb.base_url.clone(),
                image_base_url: config.tmdb.image_base_url.clone(),
                access_token_configured: !config.tmdb.access_token.is_empty(),
                timeout_secs: config.tmdb.timeout_secs,
            },
            listing: config.listing.clone(),
            recommendations: config.recommendations.clone(),
            search: config.search.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host.to_string(), "0.0.0.0");
        assert_eq!(config.listing.page_size, 20);
        assert_eq!(config.recommendations.min_year, 2000);
        assert_eq!(config.recommendations.limit, 12);
        assert_eq!(config.search.debounce_ms, 500);
        assert!(config.tmdb.access_token.is_empty());
    }

    #[test]
    fn test_deserialize_full_config() {
        let toml = r#"
[server]
host = "127.0.0.1"
port = 9000

[tmdb]
access_token = "abc"
base_url = "http://localhost:1234/3"

[listing]
page_size = 10

[recommendations]
min_year = 2010
limit = 6

[search]
debounce_ms = 250
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.tmdb.access_token, "abc");
        assert_eq!(config.tmdb.base_url, "http://localhost:1234/3");
        assert_eq!(config.tmdb.image_base_url, "https://image.tmdb.org/t/p");
        assert_eq!(config.listing.page_size, 10);
        assert_eq!(config.recommendations.min_year, 2010);
        assert_eq!(config.search.debounce_ms, 250);
    }

    #[test]
    fn test_sanitized_config_redacts_token() {
        let mut config = Config::default();
        config.tmdb.access_token = "secret".to_string();

        let sanitized = SanitizedConfig::from(&config);
        assert!(sanitized.tmdb.access_token_configured);

        let json = serde_json::to_string(&sanitized).unwrap();
        assert!(!json.contains("secret"));
    }

    #[test]
    fn test_sanitized_config_reports_missing_token() {
        let config = Config::default();
        let sanitized = SanitizedConfig::from(&config);
        assert!(!sanitized.tmdb.access_token_configured);
    }
}
