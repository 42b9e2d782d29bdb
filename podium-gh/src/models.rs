//! # Search API Models
//!
//! Typed models for the issue/PR search response. The fields here are the
//! boundary contract: a response missing any required field fails
//! deserialization loudly instead of leaking loosely-typed data into the
//! pipeline.

use chrono::{DateTime, Utc};
use podium_core::record::PrState;
use serde::Deserialize;

/// One page of the search response
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
  pub total_count: usize,
  pub items: Vec<SearchItem>,
}

/// Represents one issue-like item in the search results
#[derive(Debug, Clone, Deserialize)]
pub struct SearchItem {
  pub id: u64,
  pub title: String,
  pub html_url: String,
  pub state: PrState,
  pub user: SearchUser,
  pub created_at: DateTime<Utc>,

  /// Present on every item because the query is restricted to `type:pr`.
  pub pull_request: SearchPullRequest,
}

/// The author of a search result item
#[derive(Debug, Clone, Deserialize)]
pub struct SearchUser {
  pub login: String,
}

/// Pull-request-specific fields nested in a search item
#[derive(Debug, Clone, Deserialize)]
pub struct SearchPullRequest {
  pub merged_at: Option<DateTime<Utc>>,
}
