//! # Search Query Construction
//!
//! Builds the search query string sent to the issue/PR search endpoint: a
//! fixed base clause followed by an author clause and a cross-reference
//! exclusion clause per participant.

use crate::consts::BASE_QUERY;

/// Compose the full search query for the given participant usernames.
///
/// Each username contributes an `author:` clause plus a `-user:` clause so
/// that pull requests merely mentioning the participant in their own
/// repositories are not picked up. An empty username list yields the base
/// clause alone.
pub fn search_query<'a>(usernames: impl IntoIterator<Item = &'a str>) -> String {
  let mut clauses = vec![BASE_QUERY.to_string()];
  for username in usernames {
    clauses.push(format!("author:{username}"));
    clauses.push(format!("-user:{username}"));
  }
  clauses.join(" ")
}
