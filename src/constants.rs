//! Global Constants
//!
//! Centralized constants for configuration and tuning.
//! All magic numbers should be defined here with documentation.

/// Search constants (GitHub and YouTube)
pub mod search {
    /// Maximum repositories returned per query
    pub const MAX_REPO_RESULTS: u8 = 5;

    /// Maximum videos returned per query
    pub const MAX_VIDEO_RESULTS: u8 = 5;

    /// Maximum label tokens kept when building a search query
    pub const MAX_QUERY_TOKENS: usize = 5;

    /// Characters stripped from labels before querying search backends
    pub const STRIPPED_CHARS: [char; 3] = [':', '(', ')'];
}

/// Pipeline constants
pub mod pipeline {
    /// Maximum features enriched concurrently (1 = sequential reference behavior)
    pub const DEFAULT_FANOUT: usize = 4;

    /// Project type assumed when the caller gives none
    pub const DEFAULT_PROJECT_TYPE: &str = "Fullstack";
}

/// Code snippet sentinels, returned verbatim in result fields
pub mod snippet {
    /// The generative backend answered but produced no text
    pub const NO_SNIPPET: &str = "No code generated for this feature.";

    /// The generative backend call itself failed
    pub const SNIPPET_ERROR: &str = "Error generating code for this feature.";
}

/// HTTP/Network constants
pub mod network {
    /// Default request timeout (seconds)
    pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

    /// Connection timeout (seconds)
    pub const CONNECTION_TIMEOUT_SECS: u64 = 10;

    /// User-Agent sent to search backends (GitHub rejects requests without one)
    pub const USER_AGENT: &str = concat!("ideaforge/", env!("CARGO_PKG_VERSION"));
}
