//! # Pipeline Orchestration
//!
//! Runs the full leaderboard pipeline: roster load, search query build,
//! paginated fetch, normalization, aggregation, and report write. The fetch
//! happens on a tokio runtime driven with `block_on`, so the run stays
//! strictly sequential.

use std::path::Path;

use anyhow::{Context, Result};
use podium_core::consts::LEADERBOARD_FILE;
use podium_core::leaderboard::aggregate;
use podium_core::output::{print_info, print_success, print_warning};
use podium_core::query::search_query;
use podium_core::report::write_report;
use podium_core::roster::Roster;
use podium_gh::{GitHubClient, normalize_items};
use tokio::runtime::Runtime;
use tracing::debug;

use crate::cli::Cli;

/// Execute one leaderboard run against the real API.
pub fn run(cmd: &Cli) -> Result<()> {
  let client = GitHubClient::from_env()?;
  run_pipeline(&cmd.roster, &client, Path::new(LEADERBOARD_FILE))
}

/// The pipeline proper, with the client and report path injected so tests
/// can point it at a mock server and a scratch directory.
pub(crate) fn run_pipeline(roster_path: &Path, client: &GitHubClient, report_path: &Path) -> Result<()> {
  let roster = Roster::load(roster_path)?;
  print_info(&format!(
    "Loaded {} participants from {}",
    roster.len(),
    roster_path.display()
  ));

  let query = search_query(roster.usernames());
  debug!("Search query: {}", query);

  let rt = Runtime::new().context("Failed to create async runtime")?;
  let items = rt.block_on(client.search_pull_requests(&query))?;

  if items.is_empty() {
    print_warning("No PRs found");
    return Ok(());
  }

  let records = normalize_items(items)?;
  let report = aggregate(records, &roster)?;
  write_report(&report, report_path)?;

  print_success(&format!(
    "Wrote leaderboard for {} participants ({} PRs, {} merged) to {}",
    report.leaderboard.len(),
    report.total,
    report.merged,
    report_path.display()
  ));
  Ok(())
}

#[cfg(test)]
mod tests {
  use std::fs;
  use std::path::PathBuf;

  use serde_json::json;
  use tempfile::TempDir;
  use wiremock::matchers::{method, path};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use super::*;

  fn write_roster(dir: &TempDir) -> PathBuf {
    let roster_path = dir.path().join("roster.csv");
    fs::write(&roster_path, "username,name\namy,Amy Lee\n").expect("Failed to write roster");
    roster_path
  }

  /// Start a mock search endpoint on its own runtime; the runtime must stay
  /// alive for the server to keep answering.
  fn mock_search(rt: &Runtime, pages: Vec<serde_json::Value>) -> MockServer {
    rt.block_on(async {
      let server = MockServer::start().await;
      for (index, items) in pages.into_iter().enumerate() {
        Mock::given(method("GET"))
          .and(path("/search/issues"))
          .and(wiremock::matchers::query_param("page", (index + 1).to_string()))
          .respond_with(ResponseTemplate::new(200).set_body_json(json!({
              "total_count": 0,
              "items": items
          })))
          .mount(&server)
          .await;
      }
      server
    })
  }

  #[test]
  fn test_empty_fetch_writes_no_report() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let roster_path = write_roster(&dir);
    let report_path = dir.path().join("leaderboard.json");

    let rt = Runtime::new()?;
    let server = mock_search(&rt, vec![json!([])]);
    let client = GitHubClient::new(None)?.with_base_url(server.uri());

    run_pipeline(&roster_path, &client, &report_path)?;

    assert!(!report_path.exists());
    Ok(())
  }

  #[test]
  fn test_run_writes_report_for_fetched_pull_requests() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let roster_path = write_roster(&dir);
    let report_path = dir.path().join("leaderboard.json");

    let items = json!([
        {
            "id": 1,
            "title": "Add feature",
            "html_url": "https://github.com/octocat/hello-world/pull/1",
            "state": "closed",
            "user": { "login": "amy" },
            "created_at": "2023-08-26T19:01:12Z",
            "pull_request": { "merged_at": "2023-08-27T10:01:12Z" }
        },
        {
            "id": 2,
            "title": "Fix typo",
            "html_url": "https://github.com/octocat/hello-world/pull/2",
            "state": "open",
            "user": { "login": "amy" },
            "created_at": "2023-08-28T19:01:12Z",
            "pull_request": { "merged_at": null }
        }
    ]);

    let rt = Runtime::new()?;
    let server = mock_search(&rt, vec![items, json!([])]);
    let client = GitHubClient::new(None)?.with_base_url(server.uri());

    run_pipeline(&roster_path, &client, &report_path)?;

    let contents = fs::read_to_string(&report_path)?;
    let report: serde_json::Value = serde_json::from_str(&contents)?;
    assert_eq!(report["total"], 2);
    assert_eq!(report["merged"], 1);
    assert_eq!(report["leaderboard"]["amy"]["name"], "Amy Lee");
    assert_eq!(report["leaderboard"]["amy"]["open"], 1);
    Ok(())
  }
}
