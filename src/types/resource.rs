//! Domain Types
//!
//! Wire-shaped result types for the enrichment pipeline. Field names are part
//! of the JSON boundary contract and must not change casually.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// =============================================================================
// Source Summaries
// =============================================================================

/// One repository hit from the code-hosting search backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositorySummary {
    /// Short repository name
    pub name: String,
    /// Owner-qualified name ("owner/repo")
    pub full_name: String,
    /// Star count at search time
    pub stars: u64,
    /// Browser URL of the repository
    pub url: String,
    /// Primary language, when the backend knows one
    pub language: Option<String>,
}

/// One video hit from the video-hosting search backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoSummary {
    pub title: String,
    pub description: String,
    /// Watch URL constructed from the backend's video identifier
    pub url: String,
    /// Channel that published the video
    pub channel: String,
    /// High-resolution thumbnail URL
    pub thumbnail: String,
}

// =============================================================================
// Stack Advice
// =============================================================================

/// Reply of the stack-detection operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackAdvice {
    /// Stack already implied by the idea text ("None" when nothing was detected)
    #[serde(rename = "detectedStack")]
    pub detected_stack: String,
    /// Alternative stack combinations, best first
    pub suggestions: Vec<String>,
}

// =============================================================================
// Enrichment Result
// =============================================================================

/// Aggregate result of one enrichment run.
///
/// Every list defaults to empty, never null: a failed lookup leaves an empty
/// sequence behind rather than an absent field. Feature order is carried by
/// `features`; the three maps are keyed by feature label, and a duplicate
/// label overwrites its earlier entry (last write wins).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnrichmentResult {
    /// Repositories matching the idea as a whole
    #[serde(rename = "wholeProjectRepos")]
    pub whole_project_repos: Vec<RepositorySummary>,
    /// Videos matching the idea as a whole
    #[serde(rename = "wholeProjectVideos")]
    pub whole_project_videos: Vec<VideoSummary>,
    /// Extracted feature labels, in extraction order
    pub features: Vec<String>,
    /// Per-feature repositories
    #[serde(rename = "featureRepos")]
    pub feature_repos: BTreeMap<String, Vec<RepositorySummary>>,
    /// Per-feature videos
    #[serde(rename = "featureVideos")]
    pub feature_videos: BTreeMap<String, Vec<VideoSummary>>,
    /// Per-feature generated snippets (or sentinel text)
    #[serde(rename = "featureCodes")]
    pub feature_codes: BTreeMap<String, String>,
}

impl EnrichmentResult {
    /// Terminal "no features" result: idea-level lists only, empty maps.
    /// This is a success outcome, not an error.
    pub fn without_features(
        repos: Vec<RepositorySummary>,
        videos: Vec<VideoSummary>,
    ) -> Self {
        Self {
            whole_project_repos: repos,
            whole_project_videos: videos,
            ..Self::default()
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_wire_field_names() {
        let mut result = EnrichmentResult::default();
        result.features.push("User Authentication".to_string());
        result
            .feature_codes
            .insert("User Authentication".to_string(), "fn login() {}".to_string());

        let json = serde_json::to_value(&result).unwrap();
        for key in [
            "wholeProjectRepos",
            "wholeProjectVideos",
            "features",
            "featureRepos",
            "featureVideos",
            "featureCodes",
        ] {
            assert!(json.get(key).is_some(), "missing wire field {key}");
        }
    }

    #[test]
    fn test_without_features_is_empty_but_well_formed() {
        let result = EnrichmentResult::without_features(vec![], vec![]);
        assert!(result.features.is_empty());
        assert!(result.feature_repos.is_empty());
        assert!(result.feature_videos.is_empty());
        assert!(result.feature_codes.is_empty());
    }

    #[test]
    fn test_stack_advice_wire_shape() {
        let advice: StackAdvice = serde_json::from_str(
            r#"{"detectedStack": "MERN Stack", "suggestions": ["MEAN Stack", "Django + React"]}"#,
        )
        .unwrap();
        assert_eq!(advice.detected_stack, "MERN Stack");
        assert_eq!(advice.suggestions.len(), 2);
    }
}
