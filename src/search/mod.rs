//! Resource Search
//!
//! Query normalization plus the two search backends behind trait seams.

mod github;
pub mod query;
mod youtube;

pub use github::{GithubSearch, RepoSearch, SharedRepoSearch};
pub use youtube::{SharedVideoSearch, VideoSearch, YoutubeSearch};
