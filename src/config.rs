//! Configuration Module
//!
//! Handles loading the Pokedex configuration from environment variables.

use std::env;
use std::time::Duration;

/// Default cache interval: five minutes
pub const DEFAULT_CACHE_INTERVAL_SECS: u64 = 300;

/// Default catalog API root
pub const DEFAULT_CATALOG_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Default per-request HTTP timeout
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

/// Pokedex configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Cache interval in seconds, used both as entry TTL and sweep period
    pub cache_interval_secs: u64,
    /// Root URL of the catalog API, without a trailing slash
    pub catalog_base_url: String,
    /// Timeout in seconds for each catalog request
    pub http_timeout_secs: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_INTERVAL_SECS` - Cache TTL and sweep period (default: 300)
    /// - `CATALOG_BASE_URL` - Catalog API root (default: https://pokeapi.co/api/v2)
    /// - `HTTP_TIMEOUT_SECS` - Per-request timeout (default: 10)
    pub fn from_env() -> Self {
        Self {
            cache_interval_secs: env::var("CACHE_INTERVAL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_CACHE_INTERVAL_SECS),
            catalog_base_url: env::var("CATALOG_BASE_URL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_CATALOG_BASE_URL.to_string()),
            http_timeout_secs: env::var("HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS),
        }
    }

    /// Cache interval as a Duration.
    pub fn cache_interval(&self) -> Duration {
        Duration::from_secs(self.cache_interval_secs)
    }

    /// HTTP timeout as a Duration.
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_interval_secs: DEFAULT_CACHE_INTERVAL_SECS,
            catalog_base_url: DEFAULT_CATALOG_BASE_URL.to_string(),
            http_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.cache_interval_secs, 300);
        assert_eq!(config.catalog_base_url, "https://pokeapi.co/api/v2");
        assert_eq!(config.http_timeout_secs, 10);
        assert_eq!(config.cache_interval(), Duration::from_secs(300));
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("CACHE_INTERVAL_SECS");
        env::remove_var("CATALOG_BASE_URL");
        env::remove_var("HTTP_TIMEOUT_SECS");

        let config = Config::from_env();
        assert_eq!(config.cache_interval_secs, DEFAULT_CACHE_INTERVAL_SECS);
        assert_eq!(config.catalog_base_url, DEFAULT_CATALOG_BASE_URL);
        assert_eq!(config.http_timeout(), Duration::from_secs(10));
    }
}
