//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::{
    clock::{SystemClock, SystemRandom},
    persistence::{InMemoryBattles, InMemoryRoster},
    ports::{BattleRepo, ClockPort, RandomPort, RosterFighter, RosterRepo},
};
use crate::use_cases::BattleUseCases;

/// Main application state.
///
/// Holds the ports and the use cases wired onto them. A transport layer
/// (out of scope here) carries this as its shared state.
pub struct App {
    pub battles: Arc<dyn BattleRepo>,
    pub roster: Arc<dyn RosterRepo>,
    pub use_cases: BattleUseCases,
}

impl App {
    /// Compose the engine from explicit ports.
    pub fn new(
        battles: Arc<dyn BattleRepo>,
        roster: Arc<dyn RosterRepo>,
        clock: Arc<dyn ClockPort>,
        random: Arc<dyn RandomPort>,
    ) -> Self {
        let use_cases = BattleUseCases::new(
            Arc::clone(&battles),
            Arc::clone(&roster),
            clock,
            random,
        );
        Self {
            battles,
            roster,
            use_cases,
        }
    }

    /// In-memory composition: real clock and randomness, map-backed storage,
    /// roster seeded from the given fighters. Used by tests and local runs.
    pub fn in_memory(roster_seed: impl IntoIterator<Item = RosterFighter>) -> Self {
        Self::new(
            Arc::new(InMemoryBattles::new()),
            Arc::new(InMemoryRoster::seeded(roster_seed)),
            Arc::new(SystemClock::new()),
            Arc::new(SystemRandom::new()),
        )
    }
}
