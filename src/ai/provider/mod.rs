//! Generative-Text Provider Abstraction
//!
//! Defines the TextProvider trait the pipeline components depend on. The
//! provider is an explicit constructor dependency everywhere (no process-wide
//! singleton), so tests substitute doubles freely.

mod gemini;

pub use gemini::GeminiProvider;

use async_trait::async_trait;
use std::sync::Arc;

use crate::types::Result;

/// Shared provider type for concurrent access across pipeline stages.
pub type SharedProvider = Arc<dyn TextProvider>;

/// Generative-text provider
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Generate free text from a prompt.
    ///
    /// `Ok(None)` means the backend answered but produced no text; callers
    /// decide per their own policy whether that is fatal.
    async fn generate(&self, prompt: &str) -> Result<Option<String>>;

    /// Provider name for logging
    fn name(&self) -> &str;

    /// Model name currently in use
    fn model(&self) -> &str;

    /// Check if the provider is available
    async fn health_check(&self) -> Result<bool>;
}
