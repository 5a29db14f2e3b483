//! Core embed logic for forum posts
//!
//! This crate turns third-party media URLs into normalized [`EmbedData`] and
//! renders that data into sanitized HTML markup. Network access is isolated
//! behind the [`MetadataFetcher`] trait so the matching and rendering logic
//! stays pure and testable.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod data;
pub mod embed;
pub mod manager;
pub mod markup;
pub mod oembed;
pub mod youtube;

pub use config::EmbedConfig;
pub use data::{EmbedAttributes, EmbedData, EmbedKind};
pub use embed::Embed;
pub use manager::EmbedManager;
pub use oembed::{MetadataError, MetadataFetcher, OEmbed};
pub use youtube::YouTubeEmbed;

/// Result type for embed operations
pub type Result<T> = std::result::Result<T, EmbedError>;

/// Errors that can occur while matching or rendering embeds
#[derive(Debug, thiserror::Error)]
pub enum EmbedError {
    /// The embed data cannot produce markup
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// No registered embed handles this provider
    #[error("Unsupported embed provider: {0}")]
    UnsupportedProvider(String),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
