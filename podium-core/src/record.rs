//! # Canonical Pull Request Records
//!
//! The normalized, internal representation of one pull request, independent
//! of the raw shape returned by the search API. Records are derived once at
//! the API boundary and immutable afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// State of a pull request as reported by the search API.
///
/// A closed pull request may or may not have been merged; the merge status is
/// tracked separately via [`CanonicalRecord::is_merged`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrState {
  Open,
  Closed,
}

/// Normalized representation of one pull request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalRecord {
  pub id: u64,

  /// Reference in `owner/repo#number` form, unique within a report.
  #[serde(rename = "ref")]
  pub pr_ref: String,

  pub title: String,
  pub url: String,
  pub state: PrState,

  /// Author login, case-sensitive as returned by the search API.
  pub user: String,

  #[serde(rename = "isMerged")]
  pub is_merged: bool,

  #[serde(rename = "createdAt")]
  pub created_at: DateTime<Utc>,

  #[serde(rename = "mergedAt")]
  pub merged_at: Option<DateTime<Utc>>,
}
