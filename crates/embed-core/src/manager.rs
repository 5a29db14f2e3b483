//! Embed registry and dispatch
//!
//! The manager picks the embed responsible for a URL by domain, and renders
//! stored [`EmbedData`] by provider. When nothing can be embedded the URL is
//! rendered as a plain link.

use std::sync::Arc;

use crate::config::EmbedConfig;
use crate::data::EmbedData;
use crate::embed::Embed;
use crate::markup;
use crate::oembed::MetadataFetcher;
use crate::youtube::YouTubeEmbed;
use crate::{EmbedError, Result};

/// Registry of embed providers
#[derive(Default)]
pub struct EmbedManager {
    embeds: Vec<Box<dyn Embed>>,
}

impl EmbedManager {
    /// Create an empty manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a manager with every built-in provider registered
    ///
    /// `youtube_oembed_endpoint` replaces the public YouTube oEmbed endpoint
    /// when set.
    pub fn with_defaults(
        config: EmbedConfig,
        fetcher: Option<Arc<dyn MetadataFetcher>>,
        youtube_oembed_endpoint: Option<String>,
    ) -> Self {
        let mut youtube = YouTubeEmbed::new(config);
        if let Some(fetcher) = fetcher {
            youtube = youtube.with_fetcher(fetcher);
        }
        if let Some(endpoint) = youtube_oembed_endpoint {
            youtube = youtube.with_oembed_endpoint(endpoint);
        }

        let mut manager = Self::new();
        manager.register(youtube);
        manager
    }

    /// Register an embed provider
    pub fn register(&mut self, embed: impl Embed + 'static) {
        self.embeds.push(Box::new(embed));
    }

    /// Number of registered providers
    pub fn len(&self) -> usize {
        self.embeds.len()
    }

    /// Check if no provider is registered
    pub fn is_empty(&self) -> bool {
        self.embeds.is_empty()
    }

    /// Find the provider whose domains cover the URL
    pub fn find_for_url(&self, url: &str) -> Option<&dyn Embed> {
        self.embeds
            .iter()
            .find(|embed| embed.can_handle(url))
            .map(|embed| embed.as_ref())
    }

    /// Find a provider by identifier
    pub fn find_for_provider(&self, provider: &str) -> Option<&dyn Embed> {
        self.embeds
            .iter()
            .find(|embed| embed.provider() == provider)
            .map(|embed| embed.as_ref())
    }

    /// Match a URL against the registered providers
    pub async fn match_url(&self, url: &str) -> Option<EmbedData> {
        match self.find_for_url(url) {
            Some(embed) => Some(embed.match_url(url).await),
            None => {
                tracing::debug!("No embed provider for URL: {}", url);
                None
            }
        }
    }

    /// Render embed data with the provider named in it
    pub fn render_data(&self, data: &EmbedData) -> Result<String> {
        let embed = self
            .find_for_provider(&data.provider)
            .ok_or_else(|| EmbedError::UnsupportedProvider(data.provider.clone()))?;
        embed.render_data(data)
    }

    /// Match and render a URL, falling back to a plain link
    pub async fn render_url(&self, url: &str) -> String {
        let Some(data) = self.match_url(url).await else {
            return markup::link_code(url);
        };

        match self.render_data(&data) {
            Ok(html) => html,
            Err(e) => {
                tracing::debug!("Rendering {} as a link: {}", url, e);
                markup::link_code(url)
            }
        }
    }
}

impl std::fmt::Debug for EmbedManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let providers: Vec<&str> = self.embeds.iter().map(|embed| embed.provider()).collect();
        f.debug_struct("EmbedManager")
            .field("providers", &providers)
            .finish()
    }
}
