//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete
//! types. Ports exist for:
//! - Battle storage (in-memory today, could swap to a document store)
//! - Roster lookup (owned by the external fighter service)
//! - Clock/Random (for testing)

mod error;
mod repos;
mod testing;
mod types;

pub use error::RepoError;
pub use repos::{BattleRepo, RosterRepo};
pub use testing::{ClockPort, RandomPort};
pub use types::RosterFighter;

#[cfg(test)]
pub use repos::{MockBattleRepo, MockRosterRepo};
#[cfg(test)]
pub use testing::MockClockPort;
