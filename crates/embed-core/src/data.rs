//! Normalized embed data
//!
//! [`EmbedData`] is the intermediate record passed from URL matching to markup
//! rendering. It is built by an embed's matcher, optionally enriched from
//! oEmbed metadata, and only read by the renderer.

use serde::{Deserialize, Serialize};

use crate::Result;

/// Kind of content an embed represents
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmbedKind {
    /// Playable video
    Video,
    /// Static image
    Photo,
    /// Arbitrary rich HTML
    Rich,
    /// Plain link
    #[default]
    Link,
}

impl EmbedKind {
    /// Get the kind as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            EmbedKind::Video => "video",
            EmbedKind::Photo => "photo",
            EmbedKind::Rich => "rich",
            EmbedKind::Link => "link",
        }
    }

    /// Parse an oEmbed `type` value, treating unknown values as links
    pub fn from_oembed_type(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "video" => EmbedKind::Video,
            "photo" => EmbedKind::Photo,
            "rich" => EmbedKind::Rich,
            _ => EmbedKind::Link,
        }
    }
}

/// Provider-specific attributes of an embed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbedAttributes {
    /// Video identifier
    #[serde(rename = "videoID", skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
    /// Playlist identifier
    #[serde(rename = "listID", skip_serializing_if = "Option::is_none")]
    pub list_id: Option<String>,
    /// Start offset in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<u32>,
    /// Whether related videos are shown after playback
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rel: Option<bool>,
    /// Author or channel name from oEmbed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    /// Thumbnail width from oEmbed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_width: Option<u32>,
    /// Thumbnail height from oEmbed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_height: Option<u32>,
}

impl EmbedAttributes {
    /// Check if no attribute is set
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Normalized description of what to render
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbedData {
    /// Source URL that was matched
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Provider identifier (e.g., "youtube")
    pub provider: String,
    /// Kind of embed
    pub embed_type: EmbedKind,
    /// Display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Preview image URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    /// Height in pixels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    /// Width in pixels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// Provider-specific attributes
    #[serde(default)]
    pub attributes: EmbedAttributes,
}

impl EmbedData {
    /// Create empty embed data for a provider
    pub fn new(provider: impl Into<String>, embed_type: EmbedKind) -> Self {
        Self {
            provider: provider.into(),
            embed_type,
            ..Default::default()
        }
    }

    /// Set the source URL
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Set the dimensions
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Set the attributes
    pub fn with_attributes(mut self, attributes: EmbedAttributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserialize from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
