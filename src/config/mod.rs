//! Configuration
//!
//! Figment-backed configuration with credential validation at startup.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{Config, GithubConfig, LlmConfig, PipelineConfig, YoutubeConfig};
