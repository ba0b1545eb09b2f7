//! Application configuration loaded from environment variables.
//!
//! The data API key is the only secret; on the hosting platform it is
//! injected as an environment variable, so no secret-manager client is
//! needed here.

use std::env;

/// Default search radius around the origin, in meters.
pub const DEFAULT_SEARCH_RADIUS_M: f64 = 50_000.0;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the hosted data API (REST + RPC endpoints)
    pub data_api_url: String,
    /// API key sent with every data API request
    pub data_api_key: String,
    /// Mobile/web app origin allowed by CORS
    pub app_origin: String,
    /// Server port
    pub port: u16,
    /// Search radius used when a request doesn't specify one
    pub search_radius_m: f64,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            data_api_url: env::var("DATA_API_URL")
                .map(|v| v.trim_end_matches('/').to_string())
                .map_err(|_| ConfigError::Missing("DATA_API_URL"))?,
            data_api_key: env::var("DATA_API_KEY")
                .map(|v| v.trim().to_string())
                .map_err(|_| ConfigError::Missing("DATA_API_KEY"))?,
            app_origin: env::var("APP_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:19006".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            search_radius_m: env::var("SEARCH_RADIUS_M")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SEARCH_RADIUS_M),
        })
    }

    /// Default config for tests only.
    pub fn test_default() -> Self {
        Self {
            data_api_url: "http://localhost:9999".to_string(),
            data_api_key: "test_api_key".to_string(),
            app_origin: "http://localhost:19006".to_string(),
            port: 8080,
            search_radius_m: DEFAULT_SEARCH_RADIUS_M,
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env() {
        env::set_var("DATA_API_URL", "https://data.example.com/");
        env::set_var("DATA_API_KEY", " test_key ");

        let config = Config::from_env().expect("Config should load");

        // Trailing slash and key whitespace are trimmed
        assert_eq!(config.data_api_url, "https://data.example.com");
        assert_eq!(config.data_api_key, "test_key");
        assert_eq!(config.port, 8080);
        assert_eq!(config.search_radius_m, DEFAULT_SEARCH_RADIUS_M);
    }
}
