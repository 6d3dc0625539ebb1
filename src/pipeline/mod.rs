//! Enrichment Pipeline
//!
//! The orchestrator: validates the idea, runs the idea-level lookups,
//! extracts features, then fans out per feature to the repository source,
//! the video source, and the snippet generator.
//!
//! Per-feature lookups carry no data dependency on one another, so the three
//! lookups of one feature run concurrently and features flow through an
//! order-preserving buffered stream. Output content and ordering are
//! identical to a strictly sequential run (fanout = 1).

mod advisor;
mod features;
mod snippet;

pub use advisor::StackAdvisor;
pub use features::FeatureExtractor;
pub use snippet::SnippetGenerator;

use futures::StreamExt;
use tracing::{debug, info};

use crate::ai::SharedProvider;
use crate::constants::pipeline::DEFAULT_FANOUT;
use crate::search::{SharedRepoSearch, SharedVideoSearch, query};
use crate::types::{EnrichmentResult, ForgeError, Result};

pub struct EnrichmentPipeline {
    extractor: FeatureExtractor,
    snippets: SnippetGenerator,
    repos: SharedRepoSearch,
    videos: SharedVideoSearch,
    fanout: usize,
}

impl EnrichmentPipeline {
    pub fn new(
        provider: SharedProvider,
        repos: SharedRepoSearch,
        videos: SharedVideoSearch,
    ) -> Self {
        Self::with_fanout(provider, repos, videos, DEFAULT_FANOUT)
    }

    /// Build a pipeline with an explicit per-feature concurrency cap.
    pub fn with_fanout(
        provider: SharedProvider,
        repos: SharedRepoSearch,
        videos: SharedVideoSearch,
        fanout: usize,
    ) -> Self {
        Self {
            extractor: FeatureExtractor::new(provider.clone()),
            snippets: SnippetGenerator::new(provider),
            repos,
            videos,
            fanout: fanout.max(1),
        }
    }

    /// Run the full enrichment for one idea.
    ///
    /// Only an empty idea (`InvalidInput`) and an outright failure of
    /// feature-text generation abort the request; every per-source lookup
    /// failure is absorbed by the source itself and shows up as emptiness
    /// or sentinel text in the result.
    pub async fn run(
        &self,
        idea: &str,
        tech_stack: &str,
        project_type: Option<&str>,
    ) -> Result<EnrichmentResult> {
        let idea = idea.trim();
        if idea.is_empty() {
            return Err(ForgeError::invalid_input("Project idea is required"));
        }

        // Idea-level lookups use the raw idea with the stack as hint
        let idea_query = query::normalize(idea, tech_stack);
        debug!(query = %idea_query, "Idea-level resource lookup");
        let (whole_repos, whole_videos) = tokio::join!(
            self.repos.search(&idea_query),
            self.videos.search(&idea_query)
        );

        let features = self.extractor.extract(idea, tech_stack, project_type).await?;
        if features.is_empty() {
            info!("No features extracted; returning idea-level resources only");
            return Ok(EnrichmentResult::without_features(whole_repos, whole_videos));
        }

        let enriched: Vec<_> = futures::stream::iter(features.clone())
            .map(|feature| {
                let feature_query = query::normalize(&feature, tech_stack);
                async move {
                    debug!(%feature, query = %feature_query, "Enriching feature");
                    let (repos, videos, code) = tokio::join!(
                        self.repos.search(&feature_query),
                        self.videos.search(&feature_query),
                        self.snippets.generate(&feature, tech_stack)
                    );
                    (feature, repos, videos, code)
                }
            })
            .buffered(self.fanout)
            .collect()
            .await;

        let mut result = EnrichmentResult {
            whole_project_repos: whole_repos,
            whole_project_videos: whole_videos,
            features,
            ..EnrichmentResult::default()
        };
        // Duplicate labels overwrite: last write wins, order lives in `features`
        for (feature, repos, videos, code) in enriched {
            result.feature_repos.insert(feature.clone(), repos);
            result.feature_videos.insert(feature.clone(), videos);
            result.feature_codes.insert(feature, code);
        }

        info!(
            features = result.features.len(),
            repos = result.whole_project_repos.len(),
            videos = result.whole_project_videos.len(),
            "Enrichment complete"
        );
        Ok(result)
    }
}

// =============================================================================
// Test Doubles
// =============================================================================


// =============================================================================
// Tests
// =============================================================================
