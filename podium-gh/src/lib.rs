//! # GitHub Search Client
//!
//! Provides the GitHub issue/PR search integration for podium: a reqwest
//! based client, typed models for the search response, paginated fetching,
//! and normalization of raw search items into canonical records.

pub mod client;
pub mod consts;
pub mod endpoints;
pub mod models;
pub mod normalize;

// Re-export the client
pub use client::GitHubClient;
// Re-export models
pub use models::{SearchItem, SearchPullRequest, SearchResponse, SearchUser};
// Re-export the normalizer
pub use normalize::normalize_items;
