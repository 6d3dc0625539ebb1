//! Unified Error Type System
//!
//! Centralized error types for the entire application.
//!
//! ## Error Taxonomy
//!
//! - **InvalidInput**: bad client request (empty idea) - surfaced as a client error
//! - **UpstreamEmpty**: a mandatory generative call returned no content - server error
//! - **UpstreamFormat**: a generative reply could not be parsed - server error
//! - Repository/video lookup and snippet failures are never represented here:
//!   they are absorbed at the component boundary as empty results or sentinel
//!   text, so a single flaky lookup cannot fail an aggregate request.
//!
//! ## Design Principles
//!
//! - Single unified error type (ForgeError) for the entire application
//! - Only the three fatal kinds above abort a request
//! - No panic/unwrap - all errors are recoverable

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ForgeError {
    // -------------------------------------------------------------------------
    // System Errors (auto From impl)
    // -------------------------------------------------------------------------
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // -------------------------------------------------------------------------
    // Request Errors
    // -------------------------------------------------------------------------
    /// The caller's input was unusable (e.g. empty idea text)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A mandatory generative-text call returned no content
    #[error("upstream returned no content for {operation}")]
    UpstreamEmpty { operation: String },

    /// A generative-text reply could not be parsed into the expected shape
    #[error("could not parse upstream reply for {operation}: {message}")]
    UpstreamFormat { operation: String, message: String },

    /// The generative backend rejected or failed a request outright
    #[error("LLM API error: {0}")]
    LlmApi(String),

    // -------------------------------------------------------------------------
    // Process Errors
    // -------------------------------------------------------------------------
    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ForgeError>;

impl ForgeError {
    /// Create an invalid-input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Create an upstream-empty error for a named operation
    pub fn upstream_empty(operation: impl Into<String>) -> Self {
        Self::UpstreamEmpty {
            operation: operation.into(),
        }
    }

    /// Create an upstream-format error for a named operation
    pub fn upstream_format(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::UpstreamFormat {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// Whether the caller (not an upstream service) is at fault.
    /// Drives the client-vs-server status split at the JSON boundary.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    /// Wire-format error body per the JSON boundary contract
    pub fn to_body(&self) -> ErrorBody {
        ErrorBody {
            error: self.to_string(),
        }
    }
}

/// The single error shape clients receive: `{"error": "..."}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

// =============================================================================
// Tests
// =============================================================================
