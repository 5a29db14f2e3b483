//! YouTube embed
//!
//! Matches `youtube.com`, `youtube.ca` and `youtu.be` URLs, optionally
//! enriches them with oEmbed metadata, and renders either a playlist iframe
//! or a click-to-play video preview.

use async_trait::async_trait;
use regex::Regex;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};
use url::Url;

use crate::config::EmbedConfig;
use crate::data::{EmbedData, EmbedKind};
use crate::embed::Embed;
use crate::markup;
use crate::oembed::MetadataFetcher;
use crate::{EmbedError, Result};

/// Provider identifier
pub const PROVIDER: &str = "youtube";

/// Height used when the embed data carries none
pub const DEFAULT_HEIGHT: u32 = 270;

/// Width used when the embed data carries none
pub const DEFAULT_WIDTH: u32 = 480;

/// YouTube's public oEmbed endpoint
pub const OEMBED_ENDPOINT: &str = "https://www.youtube.com/oembed";

const DOMAINS: &[&str] = &["youtube.com", "youtube.ca", "youtu.be"];

/// YouTube embed provider
#[derive(Clone)]
pub struct YouTubeEmbed {
    config: EmbedConfig,
    fetcher: Option<Arc<dyn MetadataFetcher>>,
    oembed_endpoint: String,
}

impl std::fmt::Debug for YouTubeEmbed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("YouTubeEmbed")
            .field("config", &self.config)
            .field("has_fetcher", &self.fetcher.is_some())
            .field("oembed_endpoint", &self.oembed_endpoint)
            .finish()
    }
}

impl Default for YouTubeEmbed {
    fn default() -> Self {
        Self::new(EmbedConfig::default())
    }
}

impl YouTubeEmbed {
    /// Create a YouTube embed without a metadata fetcher
    pub fn new(config: EmbedConfig) -> Self {
        Self {
            config,
            fetcher: None,
            oembed_endpoint: OEMBED_ENDPOINT.to_string(),
        }
    }

    /// Attach the fetcher used for oEmbed lookups
    pub fn with_fetcher(mut self, fetcher: Arc<dyn MetadataFetcher>) -> Self {
        self.fetcher = Some(fetcher);
        self
    }

    /// Override the oEmbed endpoint
    pub fn with_oembed_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.oembed_endpoint = endpoint.into();
        self
    }

    /// Get the configuration
    pub fn config(&self) -> &EmbedConfig {
        &self.config
    }

    /// Build the oEmbed request URL for a video
    pub fn oembed_request_url(&self, video_id: &str) -> String {
        let watch_url = format!("https://www.youtube.com/watch?v={}", video_id);
        format!(
            "{}?url={}",
            self.oembed_endpoint,
            urlencoding::encode(&watch_url)
        )
    }

    /// Look up oEmbed metadata, treating every failure as "no metadata"
    async fn fetch_metadata(&self, video_id: &str) -> Option<EmbedData> {
        if !self.config.network_enabled {
            return None;
        }
        let fetcher = self.fetcher.as_ref()?;
        let request_url = self.oembed_request_url(video_id);

        tracing::debug!("Fetching YouTube oEmbed: {}", request_url);
        match fetcher.fetch(&request_url).await {
            Ok(Some(oembed)) if !oembed.is_empty() => Some(oembed.normalize(PROVIDER)),
            Ok(_) => {
                tracing::debug!("Empty oEmbed response for video {}", video_id);
                None
            }
            Err(e) => {
                tracing::warn!("Failed to fetch oEmbed for video {}: {}", video_id, e);
                None
            }
        }
    }
}

#[async_trait]
impl Embed for YouTubeEmbed {
    fn provider(&self) -> &'static str {
        PROVIDER
    }

    fn embed_type(&self) -> EmbedKind {
        EmbedKind::Video
    }

    fn domains(&self) -> &[&'static str] {
        DOMAINS
    }

    async fn match_url(&self, url: &str) -> EmbedData {
        let parts = UrlParts::parse(url);
        let video_id = parts.video_id();
        let start = parts.start_time();

        let metadata = match video_id.as_deref() {
            Some(id) => self.fetch_metadata(id).await,
            None => None,
        };

        let mut data = metadata.unwrap_or_default();
        data.url = Some(url.to_string());
        data.provider = PROVIDER.to_string();
        data.embed_type = EmbedKind::Video;

        let attributes = &mut data.attributes;
        if video_id.is_some() {
            attributes.video_id = video_id;
        }
        if start.is_some() {
            attributes.start = start;
        }
        if let Some(list_id) = parts.list_id() {
            attributes.list_id = Some(list_id);
        }
        if let Some(rel) = parts.rel() {
            attributes.rel = Some(rel);
        }

        data
    }

    fn render_data(&self, data: &EmbedData) -> Result<String> {
        let height = data.height.unwrap_or(DEFAULT_HEIGHT);
        let width = data.width.unwrap_or(DEFAULT_WIDTH);
        let name = data.name.as_deref().unwrap_or("");

        let attributes = &data.attributes;
        let list_id = non_empty(&attributes.list_id);
        let video_id = non_empty(&attributes.video_id);

        if let Some(list_id) = list_id {
            let list_id = urlencoding::encode(list_id);
            let embed_url = match video_id {
                Some(video_id) => format!(
                    "https://www.youtube.com/embed/{}?list={}",
                    urlencoding::encode(video_id),
                    list_id
                ),
                None => format!("https://www.youtube.com/embed/videoseries?list={}", list_id),
            };

            Ok(markup::iframe_code(&embed_url, width, height))
        } else if let Some(video_id) = video_id {
            let video_id = urlencoding::encode(video_id);

            let mut params = String::from("feature=oembed&autoplay=1");
            if let Some(rel) = attributes.rel {
                params.push_str(&format!("&rel={}", u8::from(rel)));
            }
            if let Some(start) = attributes.start.filter(|start| *start > 0) {
                params.push_str(&format!("&start={}", start));
            }

            let embed_url = format!("https://www.youtube.com/embed/{}?{}", video_id, params);
            let photo_url = format!("https://img.youtube.com/vi/{}/0.jpg", video_id);

            Ok(markup::video_code(&embed_url, name, &photo_url, width, height))
        } else {
            Err(EmbedError::InvalidArgument(
                "Unable to generate YouTube markup.".to_string(),
            ))
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// The pieces of a URL the matcher looks at
#[derive(Debug, Default)]
struct UrlParts {
    path: String,
    query: HashMap<String, String>,
    fragment: String,
}

impl UrlParts {
    /// Split a URL; unparseable input yields empty parts
    ///
    /// Schemeless (`www.youtube.com/watch?v=...`) and protocol-relative
    /// (`//youtu.be/...`) input is resolved against an `https:` base so its
    /// path, query and fragment are still available.
    fn parse(url: &str) -> Self {
        static RELATIVE_BASE: OnceLock<Url> = OnceLock::new();

        let url = url.trim();
        let parsed = Url::parse(url).or_else(|_| {
            let base = RELATIVE_BASE.get_or_init(|| Url::parse("https://localhost/").unwrap());
            Url::options().base_url(Some(base)).parse(url)
        });
        let Ok(parsed) = parsed else {
            tracing::debug!("Could not parse URL for YouTube embed: {}", url);
            return Self::default();
        };

        // Later duplicates win
        let query = parsed
            .query_pairs()
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();

        Self {
            path: parsed.path().to_string(),
            query,
            fragment: parsed.fragment().unwrap_or_default().to_string(),
        }
    }

    /// Video ID from an 11-character path, falling back to the `v` parameter
    fn video_id(&self) -> Option<String> {
        static PATH_ID_REGEX: OnceLock<Regex> = OnceLock::new();
        let re = PATH_ID_REGEX.get_or_init(|| {
            Regex::new(r"^/?(?P<video_id>[A-Za-z0-9_-]{11})$").unwrap()
        });

        re.captures(&self.path)
            .and_then(|caps| caps.name("video_id"))
            .map(|m| m.as_str().to_string())
            .or_else(|| self.query.get("v").cloned())
            .filter(|id| !id.is_empty())
    }

    /// Start offset from `#t=45` or `?t=1m30s`; zero counts as no offset
    fn start_time(&self) -> Option<u32> {
        static FRAGMENT_REGEX: OnceLock<Regex> = OnceLock::new();
        static QUERY_REGEX: OnceLock<Regex> = OnceLock::new();

        let fragment_re =
            FRAGMENT_REGEX.get_or_init(|| Regex::new(r"t=(?P<start>\d+)").unwrap());

        let start = if let Some(caps) = fragment_re.captures(&self.fragment) {
            caps.name("start").map(|m| parse_digits(m.as_str())).unwrap_or(0)
        } else if let Some(t) = self.query.get("t") {
            let query_re = QUERY_REGEX.get_or_init(|| {
                Regex::new(r"^(?:(?P<minutes>\d*)m)?(?:(?P<seconds>\d*)s)?").unwrap()
            });
            match query_re.captures(t) {
                Some(caps) => {
                    let minutes = caps.name("minutes").map(|m| parse_digits(m.as_str())).unwrap_or(0);
                    let seconds = caps.name("seconds").map(|m| parse_digits(m.as_str())).unwrap_or(0);
                    minutes.saturating_mul(60).saturating_add(seconds)
                }
                None => 0,
            }
        } else {
            0
        };

        (start > 0).then_some(start)
    }

    /// Playlist ID from `listID`, or YouTube's own `list` parameter
    fn list_id(&self) -> Option<String> {
        self.query
            .get("listID")
            .or_else(|| self.query.get("list"))
            .cloned()
    }

    /// Related-videos flag; empty and `0` are false
    fn rel(&self) -> Option<bool> {
        self.query
            .get("rel")
            .map(|value| !(value.is_empty() || value == "0"))
    }
}

/// Parse a run of ASCII digits, saturating on overflow
fn parse_digits(digits: &str) -> u32 {
    if digits.is_empty() {
        0
    } else {
        digits.parse().unwrap_or(u32::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oembed::{MetadataError, MockMetadataFetcher, OEmbed};

    fn offline() -> YouTubeEmbed {
        YouTubeEmbed::new(EmbedConfig::offline())
    }

    fn video_data(video_id: &str) -> EmbedData {
        let mut data = EmbedData::new(PROVIDER, EmbedKind::Video);
        data.attributes.video_id = Some(video_id.to_string());
        data
    }

    fn sample_oembed() -> OEmbed {
        OEmbed {
            kind: Some("video".to_string()),
            title: Some("Never Gonna Give You Up".to_string()),
            author_name: Some("Rick Astley".to_string()),
            thumbnail_url: Some("https://i.ytimg.com/vi/dQw4w9WgXcQ/hqdefault.jpg".to_string()),
            width: Some(200),
            height: Some(113),
            ..Default::default()
        }
    }

    // Matching

    #[tokio::test]
    async fn test_match_short_url() {
        let data = offline().match_url("https://youtu.be/dQw4w9WgXcQ").await;
        assert_eq!(data.provider, "youtube");
        assert_eq!(data.embed_type, EmbedKind::Video);
        assert_eq!(data.url.as_deref(), Some("https://youtu.be/dQw4w9WgXcQ"));
        assert_eq!(data.attributes.video_id.as_deref(), Some("dQw4w9WgXcQ"));
        assert_eq!(data.attributes.start, None);
    }

    #[tokio::test]
    async fn test_match_watch_url() {
        let data = offline()
            .match_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ")
            .await;
        assert_eq!(data.attributes.video_id.as_deref(), Some("dQw4w9WgXcQ"));
    }

    #[tokio::test]
    async fn test_path_id_takes_precedence_over_query() {
        let data = offline()
            .match_url("https://youtu.be/dQw4w9WgXcQ?v=aaaaaaaaaaa")
            .await;
        assert_eq!(data.attributes.video_id.as_deref(), Some("dQw4w9WgXcQ"));
    }

    #[tokio::test]
    async fn test_path_must_be_exactly_eleven_characters() {
        let data = offline().match_url("https://youtu.be/dQw4w9WgXcQx").await;
        assert_eq!(data.attributes.video_id, None);

        let data = offline().match_url("https://youtu.be/short").await;
        assert_eq!(data.attributes.video_id, None);
    }

    #[tokio::test]
    async fn test_match_query_start_minutes_seconds() {
        let data = offline()
            .match_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=1m30s")
            .await;
        assert_eq!(data.attributes.start, Some(90));
    }

    #[tokio::test]
    async fn test_match_query_start_partial() {
        let data = offline()
            .match_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=2m")
            .await;
        assert_eq!(data.attributes.start, Some(120));

        let data = offline()
            .match_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=45s")
            .await;
        assert_eq!(data.attributes.start, Some(45));
    }

    #[tokio::test]
    async fn test_match_query_bare_seconds_is_ignored() {
        let data = offline()
            .match_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=90")
            .await;
        assert_eq!(data.attributes.start, None);
    }

    #[tokio::test]
    async fn test_match_fragment_start() {
        let data = offline()
            .match_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ#t=45")
            .await;
        assert_eq!(data.attributes.start, Some(45));
    }

    #[tokio::test]
    async fn test_fragment_start_wins_over_query() {
        let data = offline()
            .match_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=1m#t=5")
            .await;
        assert_eq!(data.attributes.start, Some(5));
    }

    #[tokio::test]
    async fn test_zero_start_is_absent() {
        let data = offline()
            .match_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ#t=0")
            .await;
        assert_eq!(data.attributes.start, None);
    }

    #[tokio::test]
    async fn test_match_list_and_rel() {
        let data = offline()
            .match_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ&listID=PL123&rel=0")
            .await;
        assert_eq!(data.attributes.list_id.as_deref(), Some("PL123"));
        assert_eq!(data.attributes.rel, Some(false));

        let data = offline()
            .match_url("https://www.youtube.com/playlist?list=PL456&rel=1")
            .await;
        assert_eq!(data.attributes.list_id.as_deref(), Some("PL456"));
        assert_eq!(data.attributes.rel, Some(true));
        assert_eq!(data.attributes.video_id, None);
    }

    #[tokio::test]
    async fn test_match_rel_uses_truthiness() {
        let data = offline()
            .match_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ&rel=false")
            .await;
        assert_eq!(data.attributes.rel, Some(true));

        let data = offline()
            .match_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ&rel=")
            .await;
        assert_eq!(data.attributes.rel, Some(false));
    }

    #[tokio::test]
    async fn test_match_schemeless_url() {
        let data = offline()
            .match_url("www.youtube.com/watch?v=dQw4w9WgXcQ&t=1m30s")
            .await;
        assert_eq!(data.attributes.video_id.as_deref(), Some("dQw4w9WgXcQ"));
        assert_eq!(data.attributes.start, Some(90));
        assert_eq!(
            data.url.as_deref(),
            Some("www.youtube.com/watch?v=dQw4w9WgXcQ&t=1m30s")
        );
    }

    #[tokio::test]
    async fn test_match_protocol_relative_url() {
        let data = offline()
            .match_url("//www.youtube.com/watch?v=dQw4w9WgXcQ#t=45")
            .await;
        assert_eq!(data.attributes.video_id.as_deref(), Some("dQw4w9WgXcQ"));
        assert_eq!(data.attributes.start, Some(45));

        let data = offline().match_url("//youtu.be/dQw4w9WgXcQ").await;
        assert_eq!(data.attributes.video_id.as_deref(), Some("dQw4w9WgXcQ"));
    }

    #[tokio::test]
    async fn test_match_bare_video_id_path() {
        let data = offline().match_url("dQw4w9WgXcQ").await;
        assert_eq!(data.attributes.video_id.as_deref(), Some("dQw4w9WgXcQ"));
    }

    #[tokio::test]
    async fn test_match_malformed_url() {
        let data = offline().match_url("not a url at all").await;
        assert_eq!(data.provider, "youtube");
        assert!(data.attributes.is_empty());

        let data = offline().match_url("https://[not-a-host/watch?v=dQw4w9WgXcQ").await;
        assert!(data.attributes.is_empty());
    }

    // Fetch and merge

    #[tokio::test]
    async fn test_match_merges_oembed_metadata() {
        let mut fetcher = MockMetadataFetcher::new();
        fetcher
            .expect_fetch()
            .withf(|url| {
                url.to_string()
                    == "https://www.youtube.com/oembed?url=https%3A%2F%2Fwww.youtube.com%2Fwatch%3Fv%3DdQw4w9WgXcQ"
            })
            .times(1)
            .returning(|_| Ok(Some(sample_oembed())));

        let embed = YouTubeEmbed::new(EmbedConfig::default()).with_fetcher(Arc::new(fetcher));
        let data = embed.match_url("https://youtu.be/dQw4w9WgXcQ#t=45").await;

        assert_eq!(data.name.as_deref(), Some("Never Gonna Give You Up"));
        assert_eq!(data.width, Some(200));
        assert_eq!(data.height, Some(113));
        assert_eq!(data.attributes.author_name.as_deref(), Some("Rick Astley"));
        assert_eq!(data.attributes.video_id.as_deref(), Some("dQw4w9WgXcQ"));
        assert_eq!(data.attributes.start, Some(45));
        assert_eq!(data.provider, "youtube");
    }

    #[tokio::test]
    async fn test_fetch_error_is_ignored() {
        let mut fetcher = MockMetadataFetcher::new();
        fetcher
            .expect_fetch()
            .times(1)
            .returning(|_| Err(MetadataError::Status(500)));

        let embed = YouTubeEmbed::default().with_fetcher(Arc::new(fetcher));
        let data = embed.match_url("https://youtu.be/dQw4w9WgXcQ").await;

        assert_eq!(data.name, None);
        assert_eq!(data.attributes.video_id.as_deref(), Some("dQw4w9WgXcQ"));
    }

    #[tokio::test]
    async fn test_empty_oembed_is_ignored() {
        let mut fetcher = MockMetadataFetcher::new();
        fetcher
            .expect_fetch()
            .times(1)
            .returning(|_| Ok(Some(OEmbed::default())));

        let embed = YouTubeEmbed::default().with_fetcher(Arc::new(fetcher));
        let data = embed.match_url("https://youtu.be/dQw4w9WgXcQ").await;

        assert_eq!(data.name, None);
        assert_eq!(data.width, None);
    }

    #[tokio::test]
    async fn test_network_disabled_skips_fetch() {
        let mut fetcher = MockMetadataFetcher::new();
        fetcher.expect_fetch().never();

        let embed = offline().with_fetcher(Arc::new(fetcher));
        let data = embed.match_url("https://youtu.be/dQw4w9WgXcQ").await;
        assert_eq!(data.attributes.video_id.as_deref(), Some("dQw4w9WgXcQ"));
    }

    #[tokio::test]
    async fn test_missing_video_id_skips_fetch() {
        let mut fetcher = MockMetadataFetcher::new();
        fetcher.expect_fetch().never();

        let embed = YouTubeEmbed::default().with_fetcher(Arc::new(fetcher));
        let data = embed.match_url("https://www.youtube.com/playlist?list=PL1").await;
        assert_eq!(data.attributes.list_id.as_deref(), Some("PL1"));
    }

    #[test]
    fn test_oembed_request_url_with_custom_endpoint() {
        let embed = offline().with_oembed_endpoint("http://127.0.0.1:9999/oembed");
        assert_eq!(
            embed.oembed_request_url("abc"),
            "http://127.0.0.1:9999/oembed?url=https%3A%2F%2Fwww.youtube.com%2Fwatch%3Fv%3Dabc"
        );
    }

    // Rendering

    #[test]
    fn test_render_playlist_only() {
        let mut data = EmbedData::new(PROVIDER, EmbedKind::Video);
        data.attributes.list_id = Some("PL123".to_string());

        let html = offline().render_data(&data).unwrap();
        assert_eq!(
            html,
            r#"<iframe width="480" height="270" src="https://www.youtube.com/embed/videoseries?list=PL123" frameborder="0" allowfullscreen></iframe>"#
        );
    }

    #[test]
    fn test_render_video_in_playlist() {
        let mut data = video_data("dQw4w9WgXcQ").with_size(640, 360);
        data.attributes.list_id = Some("PL123".to_string());

        let html = offline().render_data(&data).unwrap();
        assert!(html.contains(r#"src="https://www.youtube.com/embed/dQw4w9WgXcQ?list=PL123""#));
        assert!(html.contains(r#"width="640" height="360""#));
    }

    #[test]
    fn test_render_video_preview() {
        let mut data = video_data("dQw4w9WgXcQ");
        data.name = Some("Never Gonna Give You Up".to_string());
        data.attributes.rel = Some(false);
        data.attributes.start = Some(90);

        let html = offline().render_data(&data).unwrap();
        assert!(html.contains(
            r#"data-url="https://www.youtube.com/embed/dQw4w9WgXcQ?feature=oembed&amp;autoplay=1&amp;rel=0&amp;start=90""#
        ));
        assert!(html.contains("https://img.youtube.com/vi/dQw4w9WgXcQ/0.jpg"));
        assert!(html.contains(r#"title="Never Gonna Give You Up""#));
        assert!(html.contains("padding-top: 56.25%;"));
    }

    #[test]
    fn test_render_video_with_related_videos() {
        let mut data = video_data("dQw4w9WgXcQ");
        data.attributes.rel = Some(true);

        let html = offline().render_data(&data).unwrap();
        assert!(html.contains(
            r#"data-url="https://www.youtube.com/embed/dQw4w9WgXcQ?feature=oembed&amp;autoplay=1&amp;rel=1""#
        ));
    }

    #[test]
    fn test_render_video_without_optional_params() {
        let html = offline().render_data(&video_data("dQw4w9WgXcQ")).unwrap();
        assert!(html.contains(
            r#"data-url="https://www.youtube.com/embed/dQw4w9WgXcQ?feature=oembed&amp;autoplay=1""#
        ));
        assert!(!html.contains("rel="));
        assert!(!html.contains("start="));
        assert!(html.contains(r#"aria-label="""#));
    }

    #[test]
    fn test_render_without_identifiers_fails() {
        let data = EmbedData::new(PROVIDER, EmbedKind::Video);
        let err = offline().render_data(&data).unwrap_err();
        assert!(matches!(err, EmbedError::InvalidArgument(_)));
        assert!(err.to_string().contains("Unable to generate YouTube markup"));
    }

    #[test]
    fn test_render_empty_identifiers_fails() {
        let mut data = EmbedData::new(PROVIDER, EmbedKind::Video);
        data.attributes.video_id = Some(String::new());
        data.attributes.list_id = Some(String::new());
        assert!(offline().render_data(&data).is_err());
    }

    #[test]
    fn test_render_escapes_interpolated_values() {
        let mut data = video_data(r#""><script>alert(1)</script>"#);
        data.name = Some(r#""><img src=x onerror=alert(1)>"#.to_string());

        let html = offline().render_data(&data).unwrap();
        assert!(!html.contains("<script>"));
        assert!(!html.contains("<img"));
        assert!(html.contains(r#"aria-label="&quot;&gt;&lt;img src=x onerror=alert(1)&gt;""#));

        let mut data = EmbedData::new(PROVIDER, EmbedKind::Video);
        data.attributes.list_id = Some(r#"PL"><b>bold</b>"#.to_string());
        let html = offline().render_data(&data).unwrap();
        assert!(!html.contains("<b>"));
        assert_eq!(html.matches('"').count(), 6);
    }

    #[test]
    fn test_domains() {
        let embed = offline();
        assert!(embed.can_handle("https://youtu.be/dQw4w9WgXcQ"));
        assert!(embed.can_handle("https://www.youtube.com/watch?v=dQw4w9WgXcQ"));
        assert!(embed.can_handle("https://m.youtube.ca/watch?v=dQw4w9WgXcQ"));
        assert!(!embed.can_handle("https://vimeo.com/123"));
    }

    #[test]
    fn test_parse_digits() {
        assert_eq!(parse_digits(""), 0);
        assert_eq!(parse_digits("42"), 42);
        assert_eq!(parse_digits("99999999999999"), u32::MAX);
    }
}
