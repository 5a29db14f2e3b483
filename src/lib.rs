//! Forum embeds
//!
//! Turns media URLs pasted into forum posts into sanitized embed markup.
//! [`EmbedService`] wires the embed providers from `embed-core` to the
//! oEmbed client from `networking`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub use embed_core::{
    markup, Embed, EmbedAttributes, EmbedConfig, EmbedData, EmbedError, EmbedKind, EmbedManager,
    MetadataError, MetadataFetcher, OEmbed, YouTubeEmbed,
};
pub use networking::{OEmbedClient, OEmbedClientConfig};

use std::sync::Arc;

/// Result type for service setup
pub type Result<T> = std::result::Result<T, ServiceError>;

/// Errors that can occur while building the service
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// The oEmbed client could not be created
    #[error("Metadata client error: {0}")]
    Metadata(#[from] MetadataError),

    /// An embed operation failed
    #[error("Embed error: {0}")]
    Embed(#[from] EmbedError),
}

/// Configuration for [`EmbedService`]
#[derive(Debug, Clone, Default)]
pub struct ServiceConfig {
    /// Settings shared by all embeds
    pub embed: EmbedConfig,
    /// oEmbed HTTP client settings
    pub client: OEmbedClientConfig,
    /// Replacement for the YouTube oEmbed endpoint
    pub youtube_oembed_endpoint: Option<String>,
}

impl ServiceConfig {
    /// Create a config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the embed settings
    pub fn with_embed(mut self, embed: EmbedConfig) -> Self {
        self.embed = embed;
        self
    }

    /// Set the oEmbed client settings
    pub fn with_client(mut self, client: OEmbedClientConfig) -> Self {
        self.client = client;
        self
    }

    /// Point YouTube oEmbed lookups at another endpoint
    pub fn with_youtube_oembed_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.youtube_oembed_endpoint = Some(endpoint.into());
        self
    }
}

/// Matches and renders embeds using the built-in providers
#[derive(Debug)]
pub struct EmbedService {
    manager: EmbedManager,
}

impl EmbedService {
    /// Build the service; the HTTP client is only created when the network is enabled
    pub fn new(config: ServiceConfig) -> Result<Self> {
        let fetcher: Option<Arc<dyn MetadataFetcher>> = if config.embed.network_enabled {
            Some(Arc::new(OEmbedClient::new(config.client)?))
        } else {
            None
        };

        let manager =
            EmbedManager::with_defaults(config.embed, fetcher, config.youtube_oembed_endpoint);

        tracing::debug!("Embed service ready: {:?}", manager);
        Ok(Self { manager })
    }

    /// Get the underlying manager
    pub fn manager(&self) -> &EmbedManager {
        &self.manager
    }

    /// Match a URL into embed data, if any provider handles it
    pub async fn match_url(&self, url: &str) -> Option<EmbedData> {
        self.manager.match_url(url).await
    }

    /// Render embed data
    pub fn render_data(&self, data: &EmbedData) -> Result<String> {
        Ok(self.manager.render_data(data)?)
    }

    /// Render a URL as embed markup, or as a plain link when it cannot be embedded
    pub async fn render_url(&self, url: &str) -> String {
        self.manager.render_url(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_config_builder() {
        let config = ServiceConfig::new()
            .with_embed(EmbedConfig::offline())
            .with_youtube_oembed_endpoint("http://localhost/oembed");

        assert!(!config.embed.network_enabled);
        assert_eq!(
            config.youtube_oembed_endpoint.as_deref(),
            Some("http://localhost/oembed")
        );
    }

    #[tokio::test]
    async fn test_offline_service() {
        let service = EmbedService::new(ServiceConfig::new().with_embed(EmbedConfig::offline()))
            .unwrap();
        assert_eq!(service.manager().len(), 1);

        let data = service.match_url("https://youtu.be/dQw4w9WgXcQ").await.unwrap();
        assert_eq!(data.attributes.video_id.as_deref(), Some("dQw4w9WgXcQ"));

        let html = service.render_data(&data).unwrap();
        assert!(html.contains("embedVideo-ratio"));
    }

    #[test]
    fn test_service_error_display() {
        let err: ServiceError = MetadataError::Timeout.into();
        assert!(err.to_string().contains("timeout"));

        let err: ServiceError = EmbedError::UnsupportedProvider("vimeo".to_string()).into();
        assert!(err.to_string().contains("vimeo"));
    }
}
