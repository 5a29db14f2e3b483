//! oEmbed HTTP client
//!
//! Implements [`MetadataFetcher`] over reqwest. Successful, non-empty
//! responses are cached by request URL; errors and empty responses are not.

use async_trait::async_trait;
use embed_core::{MetadataError, MetadataFetcher, OEmbed};
use parking_lot::Mutex;
use reqwest::Client as ReqwestClient;
use std::time::Duration;

use crate::cache::{OEmbedCache, DEFAULT_CAPACITY, DEFAULT_TTL};

/// Configuration for the oEmbed client
#[derive(Debug, Clone)]
pub struct OEmbedClientConfig {
    /// Request timeout
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
    /// How long responses stay cached
    pub cache_ttl: Duration,
    /// Maximum number of cached responses
    pub cache_capacity: usize,
}

impl Default for OEmbedClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            user_agent: format!("forum-embeds/{}", env!("CARGO_PKG_VERSION")),
            cache_ttl: DEFAULT_TTL,
            cache_capacity: DEFAULT_CAPACITY,
        }
    }
}

impl OEmbedClientConfig {
    /// Create a config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the cache TTL
    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    /// Set the cache capacity
    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity;
        self
    }
}

/// Client for provider oEmbed endpoints
#[derive(Debug)]
pub struct OEmbedClient {
    client: ReqwestClient,
    cache: Mutex<OEmbedCache>,
    config: OEmbedClientConfig,
}

impl OEmbedClient {
    /// Create a new client
    pub fn new(config: OEmbedClientConfig) -> Result<Self, MetadataError> {
        let client = ReqwestClient::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| MetadataError::Http(format!("Failed to build HTTP client: {}", e)))?;

        let cache = Mutex::new(OEmbedCache::new(config.cache_capacity, config.cache_ttl));

        Ok(Self {
            client,
            cache,
            config,
        })
    }

    /// Get the client configuration
    pub fn config(&self) -> &OEmbedClientConfig {
        &self.config
    }

    /// Number of cached responses
    pub fn cached_len(&self) -> usize {
        self.cache.lock().len()
    }

    /// Drop every cached response
    pub fn clear_cache(&self) {
        self.cache.lock().clear();
    }

    /// Perform the request without consulting the cache
    async fn request(&self, request_url: &str) -> Result<Option<OEmbed>, MetadataError> {
        let response = self
            .client
            .get(request_url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(MetadataError::Status(status.as_u16()));
        }

        let body = response.text().await.map_err(map_transport_error)?;
        if body.trim().is_empty() {
            return Ok(None);
        }

        let oembed: OEmbed = serde_json::from_str(&body)
            .map_err(|e| MetadataError::Parse(format!("Failed to parse oEmbed JSON: {}", e)))?;

        Ok((!oembed.is_empty()).then_some(oembed))
    }
}

#[async_trait]
impl MetadataFetcher for OEmbedClient {
    async fn fetch(&self, request_url: &str) -> Result<Option<OEmbed>, MetadataError> {
        let cached = self.cache.lock().get(request_url);
        if let Some(oembed) = cached {
            tracing::debug!("oEmbed cache hit: {}", request_url);
            return Ok(Some(oembed));
        }

        let result = self.request(request_url).await?;
        if let Some(oembed) = &result {
            self.cache.lock().insert(request_url, oembed.clone());
        }

        Ok(result)
    }
}

fn map_transport_error(error: reqwest::Error) -> MetadataError {
    if error.is_timeout() {
        MetadataError::Timeout
    } else {
        MetadataError::Http(error.to_string())
    }
}
