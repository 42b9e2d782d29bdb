//! # Event Roster
//!
//! Loads the participant roster from a CSV file and provides the
//! username-to-display-name mapping used during aggregation. Lookups are
//! case-insensitive because the search API echoes author logins in whatever
//! casing the account uses, while rosters are hand-maintained.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while loading the roster.
#[derive(Debug, Error)]
pub enum RosterError {
  #[error("roster file must have a .csv extension: '{0}'")]
  UnsupportedExtension(String),
  #[error("failed to read roster file: {0}")]
  Read(#[from] csv::Error),
}

/// One event participant, as read from the roster file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Participant {
  pub username: String,
  pub name: String,
}

/// Raw CSV row; both columns are optional so that incomplete rows can be
/// dropped instead of failing the whole file.
#[derive(Debug, Deserialize)]
struct RosterRow {
  username: Option<String>,
  name: Option<String>,
}

/// The event roster: participants in file order plus a case-insensitive
/// login-to-display-name index.
#[derive(Debug, Clone)]
pub struct Roster {
  participants: Vec<Participant>,
  display_names: HashMap<String, String>,
}

impl Roster {
  /// Load a roster from a CSV file with `username` and `name` columns.
  ///
  /// Rows with a missing or empty value in either column are dropped.
  ///
  /// # Errors
  ///
  /// Returns an error if the path does not end in `.csv` or the file cannot
  /// be read or parsed as CSV.
  pub fn load(path: &Path) -> Result<Self, RosterError> {
    if path.extension().and_then(|ext| ext.to_str()) != Some("csv") {
      return Err(RosterError::UnsupportedExtension(path.display().to_string()));
    }

    let mut reader = csv::Reader::from_path(path)?;
    let mut participants = Vec::new();
    for row in reader.deserialize::<RosterRow>() {
      let row = row?;
      match (row.username, row.name) {
        (Some(username), Some(name)) if !username.trim().is_empty() && !name.trim().is_empty() => {
          participants.push(Participant {
            username: username.trim().to_string(),
            name: name.trim().to_string(),
          });
        }
        incomplete => debug!("Dropping incomplete roster row: {incomplete:?}"),
      }
    }

    Ok(Self::from_participants(participants))
  }

  /// Build a roster from already-parsed participants.
  pub fn from_participants(participants: Vec<Participant>) -> Self {
    let display_names = participants
      .iter()
      .map(|p| (p.username.to_lowercase(), p.name.clone()))
      .collect();
    Self {
      participants,
      display_names,
    }
  }

  /// Usernames in roster order, for query construction.
  pub fn usernames(&self) -> impl Iterator<Item = &str> {
    self.participants.iter().map(|p| p.username.as_str())
  }

  /// Look up a participant's display name by login, ignoring case.
  pub fn display_name(&self, login: &str) -> Option<&str> {
    self.display_names.get(&login.to_lowercase()).map(String::as_str)
  }

  pub fn len(&self) -> usize {
    self.participants.len()
  }

  pub fn is_empty(&self) -> bool {
    self.participants.is_empty()
  }
}
