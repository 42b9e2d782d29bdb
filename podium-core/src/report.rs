//! # Report Serialization
//!
//! Writes the final leaderboard report as pretty-printed JSON with 4-space
//! indentation. Key order is stable because the leaderboard map iterates in
//! username order, so identical inputs produce byte-identical output.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Serializer;
use serde_json::ser::PrettyFormatter;

use crate::leaderboard::LeaderboardReport;

/// Render a report as JSON with 4-space indentation.
pub fn to_json(report: &LeaderboardReport) -> Result<String> {
  let mut buf = Vec::new();
  let formatter = PrettyFormatter::with_indent(b"    ");
  let mut serializer = Serializer::with_formatter(&mut buf, formatter);
  report
    .serialize(&mut serializer)
    .context("Failed to serialize leaderboard report")?;
  String::from_utf8(buf).context("Leaderboard report was not valid UTF-8")
}

/// Write the report to `path`, overwriting any existing file.
///
/// # Errors
///
/// Returns an error if serialization or the file write fails; there is no
/// recovery, a failed write aborts the run.
pub fn write_report(report: &LeaderboardReport, path: &Path) -> Result<()> {
  let json = to_json(report)?;
  fs::write(path, json).with_context(|| format!("Failed to write report to {}", path.display()))
}

#[cfg(test)]
mod tests {
  use std::collections::BTreeMap;

  use super::*;
  use crate::leaderboard::UserSummary;
  use crate::record::{CanonicalRecord, PrState};

  fn sample_report() -> LeaderboardReport {
    let record = CanonicalRecord {
      id: 1,
      pr_ref: "octocat/hello-world#1".to_string(),
      title: "Add feature".to_string(),
      url: "https://github.com/octocat/hello-world/pull/1".to_string(),
      state: PrState::Closed,
      user: "amy".to_string(),
      is_merged: true,
      created_at: "2023-08-20T10:00:00Z".parse().expect("valid timestamp"),
      merged_at: Some("2023-08-21T10:00:00Z".parse().expect("valid timestamp")),
    };
    let mut leaderboard = BTreeMap::new();
    leaderboard.insert(
      "amy".to_string(),
      UserSummary {
        name: "Amy Lee".to_string(),
        total: 1,
        merged: 1,
        open: 0,
        completed: false,
        pull_requests: vec![record],
      },
    );
    LeaderboardReport {
      total: 1,
      merged: 1,
      leaderboard,
    }
  }

  #[test]
  fn test_report_round_trips() {
    let report = sample_report();
    let json = to_json(&report).expect("report should serialize");

    let parsed: LeaderboardReport = serde_json::from_str(&json).expect("report should parse back");
    assert_eq!(parsed.total, report.total);
    assert_eq!(parsed.merged, report.merged);
    assert_eq!(
      parsed.leaderboard.keys().collect::<Vec<_>>(),
      report.leaderboard.keys().collect::<Vec<_>>()
    );
  }

  #[test]
  fn test_identical_reports_serialize_identically() {
    let json_a = to_json(&sample_report()).expect("report should serialize");
    let json_b = to_json(&sample_report()).expect("report should serialize");
    assert_eq!(json_a, json_b);
  }

  #[test]
  fn test_output_uses_four_space_indentation() {
    let json = to_json(&sample_report()).expect("report should serialize");
    assert!(json.contains("\n    \"total\""));
  }

  #[test]
  fn test_write_report_overwrites_existing_file() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("leaderboard.json");

    std::fs::write(&path, "stale contents").expect("Failed to seed file");
    write_report(&sample_report(), &path).expect("report should be written");

    let contents = std::fs::read_to_string(&path).expect("Failed to read report");
    assert!(contents.starts_with('{'));
    assert!(contents.contains("\"Amy Lee\""));
  }
}
