//! Networking utilities for forum embeds
//!
//! This crate provides the HTTP side of embedding: an oEmbed client with
//! timeout handling and an in-memory response cache.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cache;
pub mod client;

pub use cache::OEmbedCache;
pub use client::{OEmbedClient, OEmbedClientConfig};
