//! HTTP client for the station directory backend.

use futures::future::try_join_all;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use tracing::debug;

use super::error::DirectoryError;
use super::types::{StationDto, StationsPage};

/// Default base URL for the station directory API.
const DEFAULT_BASE_URL: &str = "https://api.chargefinder.example.com/v1";

/// Stations fetched per page.
const PAGE_SIZE: usize = 100;

/// Configuration for the directory client.
#[derive(Debug, Clone)]
pub struct DirectoryClientConfig {
    /// API key for x-api-key header authentication
    pub api_key: String,
    /// Base URL for the API
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl DirectoryClientConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing or self-hosted backends).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

/// Client for the station directory API.
#[derive(Debug, Clone)]
pub struct DirectoryClient {
    http: reqwest::Client,
    base_url: String,
}

impl DirectoryClient {
    /// Create a new directory client.
    pub fn new(config: DirectoryClientConfig) -> Result<Self, DirectoryError> {
        let mut headers = HeaderMap::new();

        let api_key_header =
            HeaderValue::from_str(&config.api_key).map_err(|_| DirectoryError::Api {
                status: 0,
                message: "Invalid API key format".to_string(),
            })?;
        headers.insert(HeaderName::from_static("x-api-key"), api_key_header);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Fetch the complete station list.
    ///
    /// The listing is paginated; the first page tells us the total,
    /// and any remaining pages are fetched concurrently.
    pub async fn fetch_all(&self) -> Result<Vec<StationDto>, DirectoryError> {
        let first = self.fetch_page(0).await?;
        let total = first.total;
        let mut stations = first.stations;

        if total > PAGE_SIZE {
            let page_count = total.div_ceil(PAGE_SIZE);
            debug!(total, page_count, "fetching remaining station pages");

            let rest = try_join_all((1..page_count).map(|page| self.fetch_page(page))).await?;
            for page in rest {
                stations.extend(page.stations);
            }
        }

        Ok(stations)
    }

    /// Fetch one page of the station listing.
    async fn fetch_page(&self, page: usize) -> Result<StationsPage, DirectoryError> {
        let url = format!(
            "{}/stations?page={}&page_size={}",
            self.base_url, page, PAGE_SIZE
        );

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(DirectoryError::Unauthorized);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DirectoryError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| DirectoryError::Json {
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = DirectoryClientConfig::new("key");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn config_custom_base_url() {
        let config = DirectoryClientConfig::new("key").with_base_url("http://localhost:9000");
        assert_eq!(config.base_url, "http://localhost:9000");
    }

    #[test]
    fn client_rejects_bad_api_key() {
        let config = DirectoryClientConfig::new("bad\nkey");
        assert!(DirectoryClient::new(config).is_err());
    }
}
