//! # Leaderboard Aggregation
//!
//! Groups canonical records by author, computes per-user totals and the
//! completion flag, and assembles the final report structure. The leaderboard
//! map is keyed by the case-sensitive login as returned by the search API and
//! iterates in ascending username order.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::COMPLETION_THRESHOLD;
use crate::record::{CanonicalRecord, PrState};
use crate::roster::Roster;

/// Errors that can occur during aggregation.
#[derive(Debug, Error)]
pub enum AggregateError {
  /// A fetched pull request's author has no roster entry. This indicates a
  /// roster/query mismatch and is surfaced rather than silently miscounted.
  #[error("PR author '{0}' is not in the roster")]
  UnknownAuthor(String),
}

/// Per-participant rollup of pull request activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
  pub name: String,
  pub total: usize,
  pub merged: usize,
  pub open: usize,
  pub completed: bool,

  /// The participant's records, in fetch order.
  #[serde(rename = "pullRequests")]
  pub pull_requests: Vec<CanonicalRecord>,
}

impl UserSummary {
  fn new(name: &str) -> Self {
    Self {
      name: name.to_string(),
      total: 0,
      merged: 0,
      open: 0,
      completed: false,
      pull_requests: Vec::new(),
    }
  }
}

/// The final report: global totals plus one summary per active participant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardReport {
  pub total: usize,
  pub merged: usize,
  pub leaderboard: BTreeMap<String, UserSummary>,
}

/// Aggregate canonical records into a leaderboard report.
///
/// A single pass builds the per-user accumulators in record order, so each
/// summary's `pullRequests` preserves the relative order of the input.
/// Closed-but-unmerged pull requests count toward `total` only.
///
/// # Errors
///
/// Returns [`AggregateError::UnknownAuthor`] if a record's author cannot be
/// resolved against the roster (case-insensitively).
pub fn aggregate(records: Vec<CanonicalRecord>, roster: &Roster) -> Result<LeaderboardReport, AggregateError> {
  let mut leaderboard: BTreeMap<String, UserSummary> = BTreeMap::new();

  for record in records {
    let summary = match leaderboard.entry(record.user.clone()) {
      Entry::Vacant(entry) => {
        let name = roster
          .display_name(&record.user)
          .ok_or_else(|| AggregateError::UnknownAuthor(record.user.clone()))?;
        entry.insert(UserSummary::new(name))
      }
      Entry::Occupied(entry) => entry.into_mut(),
    };

    summary.total += 1;
    if record.is_merged {
      summary.merged += 1;
    }
    if record.state == PrState::Open {
      summary.open += 1;
    }
    summary.pull_requests.push(record);
  }

  for summary in leaderboard.values_mut() {
    summary.completed = summary.merged >= COMPLETION_THRESHOLD;
  }

  let total = leaderboard.values().map(|s| s.total).sum();
  let merged = leaderboard.values().map(|s| s.merged).sum();

  Ok(LeaderboardReport {
    total,
    merged,
    leaderboard,
  })
}
