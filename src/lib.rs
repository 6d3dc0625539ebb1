//! IdeaForge - AI-Driven Project Idea Enrichment
//!
//! Turns a free-text project idea into a bundle of starting resources:
//! a detected or suggested tech stack, a short ordered feature breakdown,
//! and per-feature example repositories, tutorial videos, and a generated
//! code snippet.
//!
//! ## Core Pieces
//!
//! - **Stack Advisor**: detects the stack an idea implies and suggests alternatives
//! - **Feature Extractor**: bullet-list decomposition of the idea into short titles
//! - **Enrichment Pipeline**: per-feature fan-out to GitHub search, YouTube
//!   search, and snippet generation, with bounded concurrency
//! - **Degraded-by-design lookups**: a failed search leaves an empty list, a
//!   failed snippet leaves sentinel text; only invalid input and a failed
//!   feature generation abort a request
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use ideaforge::{ConfigLoader, EnrichmentPipeline, GeminiProvider, GithubSearch, YoutubeSearch};
//!
//! let config = ConfigLoader::load()?;
//! let provider = Arc::new(GeminiProvider::new(&config.llm)?);
//! let pipeline = EnrichmentPipeline::new(
//!     provider,
//!     Arc::new(GithubSearch::new(&config.github)?),
//!     Arc::new(YoutubeSearch::new(&config.youtube)?),
//! );
//! let result = pipeline.run("Build a blog platform", "MERN Stack", None).await?;
//! ```
//!
//! ## Modules
//!
//! - [`ai`]: generative-text provider seam, prompts, reply parsers
//! - [`search`]: query normalization and the two search backends
//! - [`pipeline`]: stack advisor, feature extractor, snippet generator, orchestrator
//! - [`config`]: figment-backed configuration with credential validation

pub mod ai;
pub mod cli;
pub mod config;
pub mod constants;
pub mod pipeline;
pub mod search;
pub mod types;

// =============================================================================
// Core Re-exports
// =============================================================================

// Configuration
pub use config::{Config, ConfigLoader};

// Error Types
pub use types::error::{ErrorBody, ForgeError, Result};

// Domain Types
pub use types::{EnrichmentResult, RepositorySummary, StackAdvice, VideoSummary};

// =============================================================================
// Pipeline Re-exports
// =============================================================================

pub use pipeline::{EnrichmentPipeline, FeatureExtractor, SnippetGenerator, StackAdvisor};

// =============================================================================
// Capability Re-exports
// =============================================================================

pub use ai::{GeminiProvider, SharedProvider, TextProvider};
pub use search::{GithubSearch, RepoSearch, VideoSearch, YoutubeSearch};
