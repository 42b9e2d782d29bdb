//! # Podium Core
//!
//! Core library for the podium leaderboard generator, providing the roster,
//! canonical pull request records, search query construction, aggregation,
//! and report serialization shared across the workspace.

pub mod consts;
pub mod exclusions;
pub mod leaderboard;
pub mod output;
pub mod query;
pub mod record;
pub mod report;
pub mod roster;

// Re-export commonly used items
pub use leaderboard::{AggregateError, LeaderboardReport, UserSummary, aggregate};
pub use record::{CanonicalRecord, PrState};
pub use roster::{Participant, Roster, RosterError};
