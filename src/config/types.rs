//! Configuration Types
//!
//! All configuration structures with sensible defaults.
//! Credentials may come from the config file or from the conventional
//! environment variables (GOOGLE_API_KEY, GITHUB_TOKEN, YOUTUBE_API_KEY);
//! `validate()` refuses to let the process run without all three.

use serde::{Deserialize, Serialize};

use crate::constants::{network, pipeline, search};
use crate::types::{ForgeError, Result};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Generative-text backend settings
    pub llm: LlmConfig,

    /// Code-hosting search settings
    pub github: GithubConfig,

    /// Video-hosting search settings
    pub youtube: YoutubeConfig,

    /// Pipeline tuning
    pub pipeline: PipelineConfig,
}

impl Config {
    /// Validate configuration values and required credentials.
    /// Returns `ForgeError::Config` on validation failure.
    pub fn validate(&self) -> Result<()> {
        if self.llm.timeout_secs == 0 {
            return Err(ForgeError::Config(
                "llm.timeout_secs must be greater than 0".to_string(),
            ));
        }
        if self.pipeline.fanout == 0 {
            return Err(ForgeError::Config(
                "pipeline.fanout must be greater than 0".to_string(),
            ));
        }

        let mut missing = Vec::new();
        if self.llm.api_key.is_none() {
            missing.push("llm.api_key (or GOOGLE_API_KEY)");
        }
        if self.github.token.is_none() {
            missing.push("github.token (or GITHUB_TOKEN)");
        }
        if self.youtube.api_key.is_none() {
            missing.push("youtube.api_key (or YOUTUBE_API_KEY)");
        }
        if !missing.is_empty() {
            return Err(ForgeError::Config(format!(
                "missing credentials: {}",
                missing.join(", ")
            )));
        }

        Ok(())
    }
}

// =============================================================================
// Generative Text
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Model name
    pub model: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// API key; never serialized back out
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    /// API base URL (for custom endpoints and test doubles)
    pub api_base: Option<String>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: "gemini-1.5-flash".to_string(),
            timeout_secs: network::DEFAULT_TIMEOUT_SECS,
            api_key: None,
            api_base: None,
        }
    }
}

// =============================================================================
// Search Backends
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GithubConfig {
    /// Personal access token; never serialized back out
    #[serde(skip_serializing)]
    pub token: Option<String>,
    /// API base URL
    pub api_base: Option<String>,
    /// Maximum results per query
    pub max_results: u8,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            token: None,
            api_base: None,
            max_results: search::MAX_REPO_RESULTS,
            timeout_secs: network::DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct YoutubeConfig {
    /// API key; never serialized back out
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    /// API base URL
    pub api_base: Option<String>,
    /// Maximum results per query
    pub max_results: u8,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for YoutubeConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base: None,
            max_results: search::MAX_VIDEO_RESULTS,
            timeout_secs: network::DEFAULT_TIMEOUT_SECS,
        }
    }
}

// =============================================================================
// Pipeline
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Maximum features enriched concurrently (1 = strictly sequential)
    pub fanout: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            fanout: pipeline::DEFAULT_FANOUT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_keys() -> Config {
        let mut config = Config::default();
        config.llm.api_key = Some("llm-key".to_string());
        config.github.token = Some("gh-token".to_string());
        config.youtube.api_key = Some("yt-key".to_string());
        config
    }

    #[test]
    fn test_validate_accepts_full_credentials() {
        assert!(config_with_keys().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_missing_credentials() {
        let mut config = config_with_keys();
        config.github.token = None;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("GITHUB_TOKEN"));
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = config_with_keys();
        config.llm.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_credentials_never_serialized() {
        let serialized = toml::to_string(&config_with_keys()).unwrap();
        assert!(!serialized.contains("llm-key"));
        assert!(!serialized.contains("gh-token"));
        assert!(!serialized.contains("yt-key"));
    }
}
