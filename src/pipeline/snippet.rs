//! Snippet Generator
//!
//! Generates a short illustrative code sample per feature. Never fails the
//! caller: an empty or failed generation degrades to sentinel text designed
//! to be inserted directly into the result field.

use tracing::warn;

use crate::ai::{SharedProvider, prompt};
use crate::constants::snippet::{NO_SNIPPET, SNIPPET_ERROR};

pub struct SnippetGenerator {
    provider: SharedProvider,
}

impl SnippetGenerator {
    pub fn new(provider: SharedProvider) -> Self {
        Self { provider }
    }

    /// Generate a snippet for one feature, verbatim and unparsed.
    pub async fn generate(&self, feature: &str, tech_stack: &str) -> String {
        match self
            .provider
            .generate(&prompt::code_snippet(feature, tech_stack))
            .await
        {
            Ok(Some(code)) => code,
            Ok(None) => NO_SNIPPET.to_string(),
            Err(e) => {
                warn!(%feature, error = %e, "Snippet generation failed");
                SNIPPET_ERROR.to_string()
            }
        }
    }
}
