//! Stack Advisor
//!
//! Asks the generative backend which tech stack the idea already implies and
//! which alternatives would fit, then parses the brace-delimited reply.

use tracing::info;

use crate::ai::{SharedProvider, parse, prompt};
use crate::types::{ForgeError, Result, StackAdvice};

pub struct StackAdvisor {
    provider: SharedProvider,
}

impl StackAdvisor {
    pub fn new(provider: SharedProvider) -> Self {
        Self { provider }
    }

    /// Detect the implied stack and suggest alternatives.
    ///
    /// Fails with `InvalidInput` on an empty idea, `UpstreamEmpty` when the
    /// backend returns no text, and `UpstreamFormat` when the reply carries
    /// no parseable brace-delimited object. None of these are retried.
    pub async fn detect(&self, idea: &str, project_type: Option<&str>) -> Result<StackAdvice> {
        let idea = idea.trim();
        if idea.is_empty() {
            return Err(ForgeError::invalid_input("Project idea is required"));
        }

        let reply = self
            .provider
            .generate(&prompt::stack_detection(idea, project_type))
            .await?
            .ok_or_else(|| ForgeError::upstream_empty("stack detection"))?;

        let advice: StackAdvice = parse::extract_brace_object(&reply, "stack detection")?;
        info!(
            detected = %advice.detected_stack,
            suggestions = advice.suggestions.len(),
            "Stack detection complete"
        );
        Ok(advice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::testing::CannedProvider;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_detect_parses_wrapped_reply() {
        let provider = Arc::new(CannedProvider::with_text(
            r#"Here you go:
{"detectedStack": "None", "suggestions": ["MERN Stack", "Django + React", "Rails"]}"#,
        ));
        let advisor = StackAdvisor::new(provider);

        let advice = advisor
            .detect("Build a blog platform", Some("Fullstack"))
            .await
            .unwrap();
        assert_eq!(advice.detected_stack, "None");
        assert_eq!(advice.suggestions.len(), 3);
    }

    #[tokio::test]
    async fn test_empty_idea_is_invalid_input() {
        let advisor = StackAdvisor::new(Arc::new(CannedProvider::with_text("{}")));
        let err = advisor.detect("   ", None).await.unwrap_err();
        assert!(matches!(err, ForgeError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_silent_backend_is_upstream_empty() {
        let advisor = StackAdvisor::new(Arc::new(CannedProvider::silent()));
        let err = advisor.detect("Build a blog platform", None).await.unwrap_err();
        assert!(matches!(err, ForgeError::UpstreamEmpty { .. }));
    }

    #[tokio::test]
    async fn test_braceless_reply_is_format_error() {
        let advisor = StackAdvisor::new(Arc::new(CannedProvider::with_text(
            "I recommend the MERN stack.",
        )));
        let err = advisor.detect("Build a blog platform", None).await.unwrap_err();
        assert!(matches!(err, ForgeError::UpstreamFormat { .. }));
    }
}
