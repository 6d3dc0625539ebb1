//! Feature Extractor
//!
//! Decomposes an idea into short feature titles via a bullet-list prompt.
//! An empty feature list is a valid terminal outcome; only a backend that
//! returns no text at all is an error.

use tracing::info;

use crate::ai::{SharedProvider, parse, prompt};
use crate::types::{ForgeError, Result};

pub struct FeatureExtractor {
    provider: SharedProvider,
}

impl FeatureExtractor {
    pub fn new(provider: SharedProvider) -> Self {
        Self { provider }
    }

    /// Extract ordered feature labels for the idea.
    ///
    /// Fails with `UpstreamEmpty` when the backend returns no text; a reply
    /// with zero bullet lines yields `Ok(vec![])`.
    pub async fn extract(
        &self,
        idea: &str,
        tech_stack: &str,
        project_type: Option<&str>,
    ) -> Result<Vec<String>> {
        let reply = self
            .provider
            .generate(&prompt::feature_breakdown(idea, tech_stack, project_type))
            .await?
            .ok_or_else(|| ForgeError::upstream_empty("feature extraction"))?;

        let features = parse::parse_bullet_lines(&reply);
        info!(count = features.len(), "Feature extraction complete");
        Ok(features)
    }
}
