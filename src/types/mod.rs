//! Core Types
//!
//! Unified error type and wire-shaped domain types shared across the crate.

pub mod error;
pub mod resource;

pub use error::{ErrorBody, ForgeError, Result};
pub use resource::{EnrichmentResult, RepositorySummary, StackAdvice, VideoSummary};
