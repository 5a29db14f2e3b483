//! The [`Embed`] trait implemented by every provider

use async_trait::async_trait;
use url::Url;

use crate::data::{EmbedData, EmbedKind};
use crate::Result;

/// A provider that can match URLs and render embed markup
#[async_trait]
pub trait Embed: Send + Sync {
    /// Provider identifier stored in [`EmbedData::provider`]
    fn provider(&self) -> &'static str;

    /// Kind of content this provider embeds
    fn embed_type(&self) -> EmbedKind;

    /// Domains (and their subdomains) this provider handles
    fn domains(&self) -> &[&'static str];

    /// Check whether the URL's host belongs to one of [`Embed::domains`]
    fn can_handle(&self, url: &str) -> bool {
        host_of(url)
            .map(|host| self.domains().iter().any(|domain| host_matches(&host, domain)))
            .unwrap_or(false)
    }

    /// Normalize a URL into embed data
    ///
    /// This never fails: URLs the provider does not understand produce data
    /// with empty attributes, and rendering that data reports the problem.
    async fn match_url(&self, url: &str) -> EmbedData;

    /// Render embed data into HTML
    fn render_data(&self, data: &EmbedData) -> Result<String>;
}

fn host_of(url: &str) -> Option<String> {
    Url::parse(url)
        .ok()
        .and_then(|parsed| parsed.host_str().map(|host| host.to_ascii_lowercase()))
}

fn host_matches(host: &str, domain: &str) -> bool {
    host == domain
        || host
            .strip_suffix(domain)
            .map(|prefix| prefix.ends_with('.'))
            .unwrap_or(false)
}
