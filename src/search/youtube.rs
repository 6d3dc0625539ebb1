//! YouTube Video Search
//!
//! Tutorial-video lookup with the same failure policy as the repository
//! source: errors are absorbed and logged, an empty list comes back.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::YoutubeConfig;
use crate::constants::network;
use crate::types::{ForgeError, Result, VideoSummary};

const DEFAULT_API_BASE: &str = "https://www.googleapis.com/youtube/v3";
const WATCH_URL_BASE: &str = "https://www.youtube.com/watch?v=";

/// Video search seam; the pipeline depends on this, not on YouTube.
#[async_trait]
pub trait VideoSearch: Send + Sync {
    /// Search videos by normalized query.
    /// Returns an empty list on any transport or upstream failure.
    async fn search(&self, query: &str) -> Vec<VideoSummary>;
}

pub type SharedVideoSearch = Arc<dyn VideoSearch>;

/// YouTube Data API search backend
pub struct YoutubeSearch {
    api_key: SecretString,
    api_base: String,
    max_results: u8,
    client: reqwest::Client,
}

impl std::fmt::Debug for YoutubeSearch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("YoutubeSearch")
            .field("api_key", &"[REDACTED]")
            .field("api_base", &self.api_base)
            .field("max_results", &self.max_results)
            .finish()
    }
}

impl YoutubeSearch {
    pub fn new(config: &YoutubeConfig) -> Result<Self> {
        let api_key = config.api_key.clone().ok_or_else(|| {
            ForgeError::Config(
                "YouTube API key not found. Set YOUTUBE_API_KEY env var or youtube.api_key"
                    .to_string(),
            )
        })?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(network::USER_AGENT)
            .build()?;

        Ok(Self {
            api_key: SecretString::from(api_key),
            api_base: config
                .api_base
                .clone()
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            max_results: config.max_results,
            client,
        })
    }

    async fn fetch(&self, query: &str) -> Result<Vec<VideoSummary>> {
        let url = format!("{}/search", self.api_base);
        let max_results = self.max_results.to_string();

        let response = self
            .client
            .get(&url)
            .query(&[
                ("key", self.api_key.expose_secret()),
                ("q", query),
                ("part", "snippet"),
                ("type", "video"),
                ("maxResults", max_results.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?;

        let body: SearchResponse = response.json().await?;
        Ok(body
            .items
            .into_iter()
            .filter_map(RawVideo::into_summary)
            .collect())
    }
}

#[async_trait]
impl VideoSearch for YoutubeSearch {
    async fn search(&self, query: &str) -> Vec<VideoSummary> {
        debug!(%query, "YouTube video search");
        match self.fetch(query).await {
            Ok(videos) => videos,
            Err(e) => {
                warn!(%query, error = %e, "YouTube search failed, returning no videos");
                Vec::new()
            }
        }
    }
}

// Response types

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<RawVideo>,
}

#[derive(Debug, Deserialize)]
struct RawVideo {
    id: VideoId,
    snippet: Snippet,
}

#[derive(Debug, Deserialize)]
struct VideoId {
    #[serde(rename = "videoId")]
    video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Snippet {
    title: String,
    #[serde(default)]
    description: String,
    #[serde(rename = "channelTitle", default)]
    channel_title: String,
    #[serde(default)]
    thumbnails: Thumbnails,
}

#[derive(Debug, Default, Deserialize)]
struct Thumbnails {
    high: Option<Thumbnail>,
    medium: Option<Thumbnail>,
    default: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
    url: String,
}

impl Thumbnails {
    /// Highest-resolution variant present
    fn best_url(self) -> String {
        self.high
            .or(self.medium)
            .or(self.default)
            .map(|t| t.url)
            .unwrap_or_default()
    }
}

impl RawVideo {
    /// None when the item carries no video identifier (nothing to link to)
    fn into_summary(self) -> Option<VideoSummary> {
        let video_id = self.id.video_id?;
        Some(VideoSummary {
            title: self.snippet.title,
            description: self.snippet.description,
            url: format!("{WATCH_URL_BASE}{video_id}"),
            channel: self.snippet.channel_title,
            thumbnail: self.snippet.thumbnails.best_url(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_item(json: &str) -> RawVideo {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_missing_key_is_config_error() {
        let config = YoutubeConfig::default();
        assert!(matches!(
            YoutubeSearch::new(&config),
            Err(ForgeError::Config(_))
        ));
    }

    #[test]
    fn test_watch_url_built_from_video_id() {
        let raw = raw_item(
            r#"{"id": {"videoId": "abc123"},
                "snippet": {"title": "MERN Auth Tutorial", "description": "step by step",
                            "channelTitle": "DevChannel",
                            "thumbnails": {"high": {"url": "https://i.ytimg.com/hi.jpg"}}}}"#,
        );
        let summary = raw.into_summary().unwrap();
        assert_eq!(summary.url, "https://www.youtube.com/watch?v=abc123");
        assert_eq!(summary.thumbnail, "https://i.ytimg.com/hi.jpg");
        assert_eq!(summary.channel, "DevChannel");
    }

    #[test]
    fn test_item_without_video_id_is_dropped() {
        let raw = raw_item(r#"{"id": {}, "snippet": {"title": "a channel result"}}"#);
        assert!(raw.into_summary().is_none());
    }

    #[test]
    fn test_thumbnail_falls_back_to_lower_resolutions() {
        let raw = raw_item(
            r#"{"id": {"videoId": "abc"},
                "snippet": {"title": "t",
                            "thumbnails": {"default": {"url": "https://i.ytimg.com/lo.jpg"}}}}"#,
        );
        assert_eq!(
            raw.into_summary().unwrap().thumbnail,
            "https://i.ytimg.com/lo.jpg"
        );
    }

    #[tokio::test]
    async fn test_unreachable_backend_returns_empty() {
        let config = YoutubeConfig {
            api_key: Some("yt-key".to_string()),
            api_base: Some("http://127.0.0.1:1".to_string()),
            timeout_secs: 1,
            ..YoutubeConfig::default()
        };
        let search = YoutubeSearch::new(&config).unwrap();
        assert!(search.search("blog platform").await.is_empty());
    }
}
