//! oEmbed response cache
//!
//! LRU-bounded cache keyed by request URL, with a single TTL for all entries.

use embed_core::OEmbed;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::time::{Duration, Instant};

/// Default time-to-live for cached responses (1 hour)
pub const DEFAULT_TTL: Duration = Duration::from_secs(3600);

/// Default maximum number of cached responses
pub const DEFAULT_CAPACITY: usize = 256;

#[derive(Debug, Clone)]
struct CachedResponse {
    oembed: OEmbed,
    cached_at: Instant,
}

impl CachedResponse {
    fn new(oembed: OEmbed) -> Self {
        Self {
            oembed,
            cached_at: Instant::now(),
        }
    }

    fn is_expired(&self, ttl: Duration) -> bool {
        self.cached_at.elapsed() > ttl
    }
}

/// Cache of oEmbed responses
#[derive(Debug)]
pub struct OEmbedCache {
    entries: LruCache<String, CachedResponse>,
    ttl: Duration,
}

impl Default for OEmbedCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY, DEFAULT_TTL)
    }
}

impl OEmbedCache {
    /// Create a cache holding at most `capacity` responses (minimum 1)
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(capacity),
            ttl,
        }
    }

    /// Get a response, dropping it if it has expired
    pub fn get(&mut self, request_url: &str) -> Option<OEmbed> {
        let expired = self
            .entries
            .peek(request_url)
            .map(|entry| entry.is_expired(self.ttl))
            .unwrap_or(false);

        if expired {
            self.entries.pop(request_url);
            return None;
        }

        self.entries.get(request_url).map(|entry| entry.oembed.clone())
    }

    /// Store a response
    pub fn insert(&mut self, request_url: impl Into<String>, oembed: OEmbed) {
        self.entries.put(request_url.into(), CachedResponse::new(oembed));
    }

    /// Remove all responses
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of cached responses, including expired ones not yet evicted
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the TTL
    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}
