//! Catalog Client
//!
//! Cached HTTP access to the catalog API.

use std::time::Duration;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::cache::Cache;
use crate::config::Config;
use crate::error::{PokedexError, Result};
use crate::models::{LocationArea, LocationPage, Pokemon};

/// HTTP client for the catalog API, backed by a [`Cache`].
///
/// A cached payload is consulted before every request. Only successful,
/// decodable responses are inserted; errors are never cached.
#[derive(Debug)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
    cache: Cache,
}

impl CatalogClient {
    /// Creates a client rooted at `base_url` that stores responses in `cache`.
    pub fn new(base_url: impl Into<String>, cache: Cache, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self {
            http,
            base_url,
            cache,
        })
    }

    /// Creates a client and its cache from configuration.
    ///
    /// Must be called inside a tokio runtime, since the cache starts its reaper.
    pub fn from_config(config: &Config) -> Result<Self> {
        let cache = Cache::new(config.cache_interval())?;
        Self::new(
            config.catalog_base_url.clone(),
            cache,
            config.http_timeout(),
        )
    }

    // == Accessors ==
    /// Returns the catalog root, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the response cache backing this client.
    pub fn cache(&self) -> &Cache {
        &self.cache
    }

    /// Releases the client, handing back its cache for shutdown.
    pub fn into_cache(self) -> Cache {
        self.cache
    }

    // == Location Pages ==
    /// Fetches a page of location areas.
    ///
    /// `None` requests the first page; otherwise `url` is a `next`/`previous`
    /// link taken from an earlier page.
    pub async fn location_page(&self, url: Option<&str>) -> Result<LocationPage> {
        match url {
            Some(url) => self.fetch_json(url).await,
            None => {
                let url = format!("{}/location-area/", self.base_url);
                self.fetch_json(&url).await
            }
        }
    }

    // == Location Area ==
    /// Fetches the encounter list for one location area.
    pub async fn location_area(&self, name: &str) -> Result<LocationArea> {
        let url = format!("{}/location-area/{}", self.base_url, name);
        self.fetch_json(&url).await
    }

    // == Pokemon ==
    /// Fetches one Pokemon by name.
    pub async fn pokemon(&self, name: &str) -> Result<Pokemon> {
        let url = format!("{}/pokemon/{}", self.base_url, name);
        self.fetch_json(&url).await
    }

    // == Fetch ==
    /// Decodes the response for `url`, from cache when possible.
    ///
    /// A cached payload that no longer decodes as `T` is treated as a miss.
    pub async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        if let Some(cached) = self.cache.lookup(url).await {
            match serde_json::from_slice(&cached) {
                Ok(decoded) => {
                    debug!(url, "Cache hit");
                    return Ok(decoded);
                }
                Err(err) => warn!(url, error = %err, "Cached payload did not decode, refetching"),
            }
        }

        debug!(url, "Cache miss, fetching from catalog");
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(PokedexError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        let decoded = serde_json::from_slice(&body)?;
        self.cache.insert(url, body.to_vec()).await;

        Ok(decoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_base_url_trailing_slash_trimmed() {
        let cache = Cache::new(Duration::from_secs(60)).unwrap();
        let client =
            CatalogClient::new("http://catalog.test/api/v2/", cache, Duration::from_secs(1)).unwrap();

        assert_eq!(client.base_url(), "http://catalog.test/api/v2");
        client.into_cache().shutdown().await;
    }

    #[tokio::test]
    async fn test_cached_payload_served_without_network() {
        let cache = Cache::new(Duration::from_secs(60)).unwrap();
        // Unroutable base: any real request would fail
        let client = CatalogClient::new("http://127.0.0.1:9", cache, Duration::from_millis(200))
            .unwrap();
        let url = "http://127.0.0.1:9/pokemon/pidgey";
        client
            .cache()
            .insert(url, br#"{"name":"pidgey","base_experience":50}"#.to_vec())
            .await;

        let pokemon = client.pokemon("pidgey").await.unwrap();

        assert_eq!(pokemon.name, "pidgey");
        assert_eq!(client.cache().stats().await.hits, 1);
        client.into_cache().shutdown().await;
    }

    #[tokio::test]
    async fn test_undecodable_cache_entry_falls_through() {
        let cache = Cache::new(Duration::from_secs(60)).unwrap();
        let client = CatalogClient::new("http://127.0.0.1:9", cache, Duration::from_millis(200))
            .unwrap();
        client
            .cache()
            .insert("http://127.0.0.1:9/pokemon/pidgey", b"not json".to_vec())
            .await;

        // Falls through to the network, which is unreachable
        let result = client.pokemon("pidgey").await;
        assert!(matches!(result, Err(PokedexError::Http(_))));
        client.into_cache().shutdown().await;
    }
}
