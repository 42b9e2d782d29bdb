//! # GitHub API Endpoints
//!
//! Endpoint implementations for the GitHub resources podium talks to. Only
//! the issue/PR search endpoint is needed.

pub mod search;
