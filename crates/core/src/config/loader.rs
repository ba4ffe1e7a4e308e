use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use std::path::Path;

use super::{types::Config, ConfigError};

/// Environment variable holding the TMDB access token.
///
/// The token is the one secret in the configuration; keeping it out of the
/// config file and in the environment is the expected deployment shape.
pub const TMDB_TOKEN_ENV: &str = "VIDORA_TMDB_ACCESS_TOKEN";

/// Load configuration from file with environment variable overrides
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.display().to_string()));
    }

    let mut config: Config = Figment::new()
        .merge(Toml::file(path))
        .merge(Env::prefixed("VIDORA_").split("__"))
        .extract()
        .map_err(|e| ConfigError::ParseError(e.to_string()))?;

    apply_token_env(&mut config);

    Ok(config)
}

/// Load configuration from TOML string (useful for testing)
pub fn load_config_from_str(toml_str: &str) -> Result<Config, ConfigError> {
    toml::from_str(toml_str).map_err(|e| ConfigError::ParseError(e.to_string()))
}

fn apply_token_env(config: &mut Config) {
    if let Ok(token) = std::env::var(TMDB_TOKEN_ENV) {
        if !token.is_empty() {
            config.tmdb.access_token = token;
        }
    }
}
