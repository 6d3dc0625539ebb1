//! Health Command
//!
//! Check whether the generative backend is reachable before burning quota on
//! a real request.

use console::style;

use crate::ai::{GeminiProvider, TextProvider};
use crate::config::Config;
use crate::types::{ForgeError, Result};

pub async fn run(config: &Config) -> Result<()> {
    let provider = GeminiProvider::new(&config.llm)?;
    let (available, identity) = check(&provider).await;

    if available {
        println!("{} {} available", style("✓").green(), identity);
        Ok(())
    } else {
        println!("{} {} unavailable", style("✗").red(), identity);
        Err(ForgeError::LlmApi(format!("{identity} is unavailable")))
    }
}

/// Probe the provider and describe it as "name (model)".
pub(crate) async fn check(provider: &dyn TextProvider) -> (bool, String) {
    let identity = format!("{} ({})", provider.name(), provider.model());
    let available = provider.health_check().await.unwrap_or(false);
    (available, identity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::testing::CannedProvider;

    #[tokio::test]
    async fn test_check_reports_available_provider() {
        let (available, identity) = check(&CannedProvider::with_text("ok")).await;
        assert!(available);
        assert_eq!(identity, "canned (canned-model)");
    }

    #[tokio::test]
    async fn test_check_reports_failing_provider() {
        let (available, identity) = check(&CannedProvider::failing()).await;
        assert!(!available);
        assert_eq!(identity, "canned (canned-model)");
    }
}
