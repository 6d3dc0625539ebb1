//! Generative Text
//!
//! Provider abstraction, prompt templates, and the loose reply parsers.

pub mod parse;
pub mod prompt;
pub mod provider;

pub use provider::{GeminiProvider, SharedProvider, TextProvider};
