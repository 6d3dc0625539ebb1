//! Configuration Loader (Figment-based)
//!
//! Loads and merges configuration from multiple sources using Figment:
//! 1. Built-in defaults (Serialized)
//! 2. Config file (ideaforge.toml in the working directory, or an explicit path)
//! 3. Environment variables (IDEAFORGE_* prefix, double underscore between
//!    nesting levels so multi-word keys stay addressable:
//!    IDEAFORGE_LLM__TIMEOUT_SECS -> llm.timeout_secs)
//! 4. Conventional credential variables (GOOGLE_API_KEY, GITHUB_TOKEN,
//!    YOUTUBE_API_KEY) as fallbacks for keys the file/env left unset

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::env;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::types::Config;
use crate::types::{ForgeError, Result};

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with full resolution chain:
    /// defaults → file → env vars → credential fallbacks
    pub fn load() -> Result<Config> {
        Self::load_with_file(None)
    }

    /// Load configuration, optionally forcing a specific config file
    pub fn load_with_file(path: Option<&Path>) -> Result<Config> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        let file = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::default_config_path);
        if file.exists() {
            debug!("Loading config from: {}", file.display());
            figment = figment.merge(Toml::file(&file));
        }

        // e.g. IDEAFORGE_LLM__MODEL -> llm.model, IDEAFORGE_LLM__TIMEOUT_SECS
        // -> llm.timeout_secs (single underscores stay inside the key)
        figment = figment.merge(Env::prefixed("IDEAFORGE_").split("__").lowercase(true));

        let mut config: Config = figment
            .extract()
            .map_err(|e| ForgeError::Config(format!("Configuration error: {}", e)))?;

        Self::apply_credential_fallbacks(&mut config);

        // Validate configuration after loading
        config.validate()?;

        Ok(config)
    }

    /// Default config file path (working directory)
    pub fn default_config_path() -> PathBuf {
        PathBuf::from("ideaforge.toml")
    }

    /// Fill unset credentials from the conventional environment variables
    fn apply_credential_fallbacks(config: &mut Config) {
        if config.llm.api_key.is_none() {
            config.llm.api_key = env::var("GOOGLE_API_KEY").ok();
        }
        if config.github.token.is_none() {
            config.github.token = env::var("GITHUB_TOKEN").ok();
        }
        if config.youtube.api_key.is_none() {
            config.youtube.api_key = env::var("YOUTUBE_API_KEY").ok();
        }
    }

    /// Show current effective configuration (credentials redacted by serde)
    pub fn show_config(config: &Config, as_json: bool) -> Result<String> {
        if as_json {
            Ok(serde_json::to_string_pretty(config)?)
        } else {
            toml::to_string_pretty(config).map_err(|e| ForgeError::Config(e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn set_test_credentials() {
        // SAFETY: tests that touch process env run in this module only
        unsafe {
            std::env::set_var("GOOGLE_API_KEY", "test-google");
            std::env::set_var("GITHUB_TOKEN", "test-github");
            std::env::set_var("YOUTUBE_API_KEY", "test-youtube");
        }
    }

    #[test]
    fn test_load_with_env_credentials() {
        set_test_credentials();
        let config = ConfigLoader::load().unwrap();
        assert_eq!(config.llm.api_key.as_deref(), Some("test-google"));
        assert_eq!(config.llm.model, "gemini-1.5-flash");
    }

    #[test]
    fn test_file_overrides_defaults() {
        set_test_credentials();
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[llm]\nmodel = \"gemini-2.0-flash\"\n\n[pipeline]\nfanout = 2").unwrap();

        let config = ConfigLoader::load_with_file(Some(file.path())).unwrap();
        assert_eq!(config.llm.model, "gemini-2.0-flash");
        assert_eq!(config.pipeline.fanout, 2);
    }

    #[test]
    fn test_env_override_reaches_multi_word_keys() {
        set_test_credentials();
        // SAFETY: tests that touch process env run in this module only
        unsafe {
            std::env::set_var("IDEAFORGE_LLM__TIMEOUT_SECS", "123");
        }
        let config = ConfigLoader::load().unwrap();
        unsafe {
            std::env::remove_var("IDEAFORGE_LLM__TIMEOUT_SECS");
        }
        assert_eq!(config.llm.timeout_secs, 123);
    }

    #[test]
    fn test_show_config_redacts_credentials() {
        set_test_credentials();
        let config = ConfigLoader::load().unwrap();
        let rendered = ConfigLoader::show_config(&config, false).unwrap();
        assert!(!rendered.contains("test-google"));
        assert!(!rendered.contains("test-github"));
    }
}
