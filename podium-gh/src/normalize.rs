//! # Record Normalization
//!
//! Maps raw search items into canonical records at the API boundary and
//! drops records on the ineligibility list. Normalization preserves the
//! input order apart from the drops.

use std::collections::HashSet;
use std::sync::LazyLock;

use anyhow::{Context, Result};
use podium_core::exclusions::is_ineligible;
use podium_core::record::CanonicalRecord;
use regex::Regex;
use tracing::debug;

use crate::models::SearchItem;

static PR_URL_REGEX: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"github\.com/([^/]+)/([^/]+)/pull/(\d+)").expect("Failed to compile PR URL regex"));

/// Derive an `owner/repo#number` reference from a pull request URL.
///
/// # Errors
///
/// Returns an error if the URL does not look like a GitHub pull request URL.
pub fn pr_ref_from_url(url: &str) -> Result<String> {
  let captures = PR_URL_REGEX
    .captures(url)
    .with_context(|| format!("Could not extract a PR reference from URL: {url}"))?;
  let owner = &captures[1];
  let repo = &captures[2];
  let number = &captures[3];
  Ok(format!("{owner}/{repo}#{number}"))
}

/// Normalize raw search items into canonical records, dropping ineligible
/// ones and duplicates.
///
/// References are unique in the output: if the search results shift between
/// page requests the same pull request can appear on two pages, and only the
/// first occurrence is kept.
///
/// # Errors
///
/// Returns an error if any item's URL cannot be parsed into a PR reference.
pub fn normalize_items(items: Vec<SearchItem>) -> Result<Vec<CanonicalRecord>> {
  let mut seen: HashSet<String> = HashSet::with_capacity(items.len());
  let mut records = Vec::with_capacity(items.len());
  for item in items {
    let record = normalize_item(item)?;
    if is_ineligible(&record.pr_ref) {
      debug!("Dropping ineligible PR {}", record.pr_ref);
      continue;
    }
    if !seen.insert(record.pr_ref.clone()) {
      debug!("Dropping duplicate PR {}", record.pr_ref);
      continue;
    }
    records.push(record);
  }
  Ok(records)
}

fn normalize_item(item: SearchItem) -> Result<CanonicalRecord> {
  let pr_ref = pr_ref_from_url(&item.html_url)?;
  Ok(CanonicalRecord {
    id: item.id,
    pr_ref,
    title: item.title,
    url: item.html_url,
    state: item.state,
    user: item.user.login,
    is_merged: item.pull_request.merged_at.is_some(),
    created_at: item.created_at,
    merged_at: item.pull_request.merged_at,
  })
}
