//! GitHub Repository Search
//!
//! Popularity-ranked repository lookup. Failures are absorbed here: the
//! pipeline always gets a (possibly empty) list, never an error, so one flaky
//! search cannot fail an otherwise-successful aggregate request.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::GithubConfig;
use crate::constants::network;
use crate::types::{ForgeError, RepositorySummary, Result};

const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Repository search seam; the pipeline depends on this, not on GitHub.
#[async_trait]
pub trait RepoSearch: Send + Sync {
    /// Search repositories by normalized query, most popular first.
    /// Returns an empty list on any transport or upstream failure.
    async fn search(&self, query: &str) -> Vec<RepositorySummary>;
}

pub type SharedRepoSearch = Arc<dyn RepoSearch>;

/// GitHub search backend
pub struct GithubSearch {
    token: SecretString,
    api_base: String,
    max_results: u8,
    client: reqwest::Client,
}

impl std::fmt::Debug for GithubSearch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GithubSearch")
            .field("token", &"[REDACTED]")
            .field("api_base", &self.api_base)
            .field("max_results", &self.max_results)
            .finish()
    }
}

impl GithubSearch {
    pub fn new(config: &GithubConfig) -> Result<Self> {
        let token = config.token.clone().ok_or_else(|| {
            ForgeError::Config(
                "GitHub token not found. Set GITHUB_TOKEN env var or github.token".to_string(),
            )
        })?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(network::USER_AGENT)
            .build()?;

        Ok(Self {
            token: SecretString::from(token),
            api_base: config
                .api_base
                .clone()
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            max_results: config.max_results,
            client,
        })
    }

    async fn fetch(&self, query: &str) -> Result<Vec<RepositorySummary>> {
        let url = format!("{}/search/repositories", self.api_base);
        let per_page = self.max_results.to_string();

        let response = self
            .client
            .get(&url)
            .header(
                "Authorization",
                format!("Bearer {}", self.token.expose_secret()),
            )
            .header("Accept", "application/vnd.github+json")
            .query(&[
                ("q", query),
                ("sort", "stars"),
                ("order", "desc"),
                ("per_page", per_page.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?;

        let body: SearchResponse = response.json().await?;
        Ok(body.items.into_iter().map(RawRepo::into_summary).collect())
    }
}

#[async_trait]
impl RepoSearch for GithubSearch {
    async fn search(&self, query: &str) -> Vec<RepositorySummary> {
        debug!(%query, "GitHub repository search");
        match self.fetch(query).await {
            Ok(repos) => repos,
            Err(e) => {
                warn!(%query, error = %e, "GitHub search failed, returning no repositories");
                Vec::new()
            }
        }
    }
}

// Response types

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<RawRepo>,
}

#[derive(Debug, Deserialize)]
struct RawRepo {
    name: String,
    full_name: String,
    stargazers_count: u64,
    html_url: String,
    language: Option<String>,
}

impl RawRepo {
    fn into_summary(self) -> RepositorySummary {
        RepositorySummary {
            name: self.name,
            full_name: self.full_name,
            stars: self.stargazers_count,
            url: self.html_url,
            language: self.language,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_token_is_config_error() {
        let config = GithubConfig::default();
        assert!(matches!(
            GithubSearch::new(&config),
            Err(ForgeError::Config(_))
        ));
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = GithubConfig {
            token: Some("ghp_secret".to_string()),
            ..GithubConfig::default()
        };
        let search = GithubSearch::new(&config).unwrap();
        let debug = format!("{:?}", search);
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("ghp_secret"));
    }

    #[test]
    fn test_raw_repo_mapping_preserves_url_and_stars() {
        let raw: RawRepo = serde_json::from_str(
            r#"{"name": "blog", "full_name": "octocat/blog", "stargazers_count": 1234,
                "html_url": "https://github.com/octocat/blog", "language": null}"#,
        )
        .unwrap();
        let summary = raw.into_summary();
        assert_eq!(summary.stars, 1234);
        assert_eq!(summary.url, "https://github.com/octocat/blog");
        assert_eq!(summary.language, None);
    }

    #[tokio::test]
    async fn test_unreachable_backend_returns_empty() {
        let config = GithubConfig {
            token: Some("ghp_secret".to_string()),
            api_base: Some("http://127.0.0.1:1".to_string()),
            timeout_secs: 1,
            ..GithubConfig::default()
        };
        let search = GithubSearch::new(&config).unwrap();
        assert!(search.search("blog platform").await.is_empty());
    }
}
