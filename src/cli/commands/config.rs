//! Config Command
//!
//! Show the effective configuration (credentials redacted) and the config
//! file path.

use crate::config::{Config, ConfigLoader};
use crate::types::Result;

pub fn show(config: &Config, as_json: bool) -> Result<()> {
    println!("{}", ConfigLoader::show_config(config, as_json)?);
    Ok(())
}

pub fn path() {
    let file = ConfigLoader::default_config_path();
    let exists = if file.exists() { "✓" } else { "✗" };
    println!("Config file: {} {}", exists, file.display());
    println!("Environment overrides: IDEAFORGE_* (e.g. IDEAFORGE_LLM__MODEL, IDEAFORGE_LLM__TIMEOUT_SECS)");
    println!("Credentials: GOOGLE_API_KEY, GITHUB_TOKEN, YOUTUBE_API_KEY");
}
