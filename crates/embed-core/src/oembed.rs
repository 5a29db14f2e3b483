//! oEmbed metadata and the fetcher seam
//!
//! Providers publish title and thumbnail metadata through oEmbed endpoints.
//! Embeds only see the [`MetadataFetcher`] trait; the HTTP implementation
//! lives in the `networking` crate.

use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::data::{EmbedAttributes, EmbedData, EmbedKind};

/// Errors that can occur while fetching oEmbed metadata
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetadataError {
    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(String),

    /// Non-success response status
    #[error("Unexpected status: {0}")]
    Status(u16),

    /// Response body was not valid oEmbed JSON
    #[error("Parsing error: {0}")]
    Parse(String),

    /// Request timeout
    #[error("Request timeout")]
    Timeout,
}

/// Fetches oEmbed metadata for a fully-built endpoint URL
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MetadataFetcher: Send + Sync {
    /// Fetch metadata, returning `Ok(None)` when the provider sent nothing useful
    async fn fetch(&self, request_url: &str) -> Result<Option<OEmbed>, MetadataError>;
}

/// oEmbed response body
///
/// Every field is optional; providers differ in what they send and the
/// numeric fields are sometimes encoded as strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OEmbed {
    /// Resource type (video, photo, rich, link)
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// oEmbed version
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Resource title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Author name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    /// Author URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_url: Option<String>,
    /// Provider name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_name: Option<String>,
    /// Provider URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_url: Option<String>,
    /// Thumbnail URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    /// Thumbnail width
    #[serde(
        default,
        deserialize_with = "lenient_dimension",
        skip_serializing_if = "Option::is_none"
    )]
    pub thumbnail_width: Option<u32>,
    /// Thumbnail height
    #[serde(
        default,
        deserialize_with = "lenient_dimension",
        skip_serializing_if = "Option::is_none"
    )]
    pub thumbnail_height: Option<u32>,
    /// Player width
    #[serde(
        default,
        deserialize_with = "lenient_dimension",
        skip_serializing_if = "Option::is_none"
    )]
    pub width: Option<u32>,
    /// Player height
    #[serde(
        default,
        deserialize_with = "lenient_dimension",
        skip_serializing_if = "Option::is_none"
    )]
    pub height: Option<u32>,
    /// Provider-supplied embed HTML
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
}

impl OEmbed {
    /// Check if the response carries no fields at all
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Convert into embed data for a provider
    pub fn normalize(&self, provider: impl Into<String>) -> EmbedData {
        let embed_type = self
            .kind
            .as_deref()
            .map(EmbedKind::from_oembed_type)
            .unwrap_or_default();

        EmbedData {
            url: None,
            provider: provider.into(),
            embed_type,
            name: self.title.clone(),
            photo_url: self.thumbnail_url.clone(),
            height: self.height,
            width: self.width,
            attributes: EmbedAttributes {
                author_name: self.author_name.clone(),
                thumbnail_width: self.thumbnail_width,
                thumbnail_height: self.thumbnail_height,
                ..Default::default()
            },
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Dimension {
    Integer(u64),
    Float(f64),
    Text(String),
}

fn lenient_dimension<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Dimension> = Option::deserialize(deserializer)?;
    Ok(value.and_then(|dimension| match dimension {
        Dimension::Integer(n) => u32::try_from(n).ok(),
        Dimension::Float(f) if f.is_finite() && f >= 0.0 && f <= f64::from(u32::MAX) => {
            Some(f.round() as u32)
        }
        Dimension::Float(_) => None,
        Dimension::Text(s) => s.trim().parse::<u32>().ok(),
    }))
}
