//! Core constants shared across podium components.
//!
//! Event parameters live here so that a new event only needs a single edit:
//! the search window, the self-repo exclusion, and the output filename.

/// Base search clause applied to every run: pull requests only, created
/// within the event window, excluding the event's own demo repository.
pub const BASE_QUERY: &str = "type:pr created:2023-08-19..2023-09-30 -repo:cc-bhu/github-demo";

/// Filename the final report is written to, overwriting any previous run.
pub const LEADERBOARD_FILE: &str = "leaderboard.json";

/// Number of merged pull requests a participant needs to complete the event.
pub const COMPLETION_THRESHOLD: usize = 3;

/// Environment variable holding an optional GitHub API token.
pub const ENV_GITHUB_TOKEN: &str = "GITHUB_TOKEN";
