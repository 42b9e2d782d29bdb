//! GitHub issue/PR search endpoint implementation.

use anyhow::{Context, Result};
use tracing::{debug, info, instrument, trace, warn};

use crate::client::GitHubClient;
use crate::consts::SEARCH_PAGE_SIZE;
use crate::models::{SearchItem, SearchResponse};

impl GitHubClient {
  /// Fetch every search result for `query`, walking pages until the API
  /// returns an empty one.
  ///
  /// Pages are requested sequentially at a fixed page size; all items are
  /// accumulated into a single collection. There is no retry and no partial
  /// result: a failed page aborts the whole fetch.
  ///
  /// # Errors
  ///
  /// Returns an error if any page request fails to send, returns a
  /// non-success status, or cannot be parsed.
  #[instrument(skip(self, query), level = "debug")]
  pub async fn search_pull_requests(&self, query: &str) -> Result<Vec<SearchItem>> {
    let url = format!("{}/search/issues", self.base_url);
    trace!("GitHub API URL: {}", url);

    let mut items: Vec<SearchItem> = Vec::new();
    let mut page: u32 = 1;

    loop {
      debug!("Requesting search page {}", page);

      let response = self
        .get(&url)
        .query(&[
          ("q", query.to_string()),
          ("per_page", SEARCH_PAGE_SIZE.to_string()),
          ("page", page.to_string()),
        ])
        .send()
        .await
        .context(format!("GET {url} failed"))?;

      let status = response.status();
      debug!("GitHub API response status: {}", status);

      match status {
        reqwest::StatusCode::OK => {
          let body = response
            .json::<SearchResponse>()
            .await
            .context("Failed to parse GitHub search response")?;
          if body.items.is_empty() {
            break;
          }
          info!("Fetched page {} ({} items)", page, body.items.len());
          items.extend(body.items);
          page += 1;
        }
        reqwest::StatusCode::UNAUTHORIZED | reqwest::StatusCode::FORBIDDEN => {
          warn!("Authentication failed when accessing GitHub API");
          return Err(anyhow::anyhow!(
            "Authentication failed. Please check your GitHub credentials."
          ));
        }
        _ => {
          let error_text = response.text().await.unwrap_or_default();
          warn!("Unexpected GitHub API error: HTTP {} - {}", status, error_text);
          return Err(anyhow::anyhow!("Unexpected error: HTTP {status} - {error_text}"));
        }
      }
    }

    info!("Search returned {} pull requests", items.len());
    Ok(items)
  }
}
