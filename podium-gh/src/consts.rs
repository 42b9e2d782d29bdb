//! Constants for the podium-gh client

use std::time::Duration;

/// Base URL for the official SaaS GitHub API
pub const API_BASE_URL: &str = "https://api.github.com";

/// User-Agent header value for the GitHub API client
pub const USER_AGENT: &str = concat!("podium/", env!("CARGO_PKG_VERSION"));

/// Accept header value for the GitHub API
pub const ACCEPT: &str = "application/vnd.github.v3+json";

/// Number of items requested per search page
pub const SEARCH_PAGE_SIZE: usize = 100;

/// Fixed per-request deadline for API calls
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
