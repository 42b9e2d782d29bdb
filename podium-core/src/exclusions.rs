//! # Ineligibility List
//!
//! Static set of pull request references disqualified from scoring, e.g.
//! spam or duplicate submissions reported during the event. Maintained by
//! the event organizers; entries use the `owner/repo#number` reference form.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Pull request references excluded from the competition.
pub const INELIGIBLE_REFS: &[&str] = &[
  "cc-bhu/github-demo#12",
  "first-contributions/first-contributions#40984",
  "education/GitHubGraduation-2023#1877",
];

static INELIGIBLE: LazyLock<HashSet<&'static str>> = LazyLock::new(|| INELIGIBLE_REFS.iter().copied().collect());

/// Whether a pull request reference is excluded from scoring.
pub fn is_ineligible(pr_ref: &str) -> bool {
  INELIGIBLE.contains(pr_ref)
}
