//! # GitHub HTTP Client
//!
//! HTTP client for the GitHub search API, handling the optional token,
//! request defaults, and the per-request deadline.

use anyhow::{Context, Result};
use reqwest::{Client, RequestBuilder, header};

use crate::consts::{ACCEPT, API_BASE_URL, REQUEST_TIMEOUT, USER_AGENT};

/// Represents a GitHub API client
pub struct GitHubClient {
  pub(crate) client: Client,
  pub(crate) base_url: String,
  pub(crate) token: Option<String>,
}

impl GitHubClient {
  /// Create a new GitHub client with an optional API token.
  ///
  /// The search endpoint works anonymously, but anonymous callers share a
  /// much lower rate limit; a token raises it without any auth handshake.
  pub fn new(token: Option<String>) -> Result<Self> {
    let client = Client::builder()
      .timeout(REQUEST_TIMEOUT)
      .build()
      .context("Failed to build HTTP client")?;
    Ok(Self {
      client,
      base_url: API_BASE_URL.to_string(),
      token,
    })
  }

  /// Create a GitHub client, reading the token from `GITHUB_TOKEN` if set.
  pub fn from_env() -> Result<Self> {
    Self::new(std::env::var(podium_core::consts::ENV_GITHUB_TOKEN).ok())
  }

  /// Override the API base URL, e.g. to point at a mock server in tests.
  pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
    self.base_url = base_url.into();
    self
  }

  /// Build a GET request with the standard API headers applied.
  pub(crate) fn get(&self, url: &str) -> RequestBuilder {
    let request = self
      .client
      .get(url)
      .header(header::ACCEPT, ACCEPT)
      .header(header::USER_AGENT, USER_AGENT);
    match &self.token {
      Some(token) => request.bearer_auth(token),
      None => request,
    }
  }
}
