//! Rumble domain - combat rules, the battle aggregate, and their invariants.
//!
//! Everything in this crate is synchronous, allocation-light, and free of
//! I/O. Randomness is injected into the resolver as a closure, so the whole
//! rule set is deterministic under test. The engine crate wires ports and
//! persistence around these types; transports talk to `rumble-shared`.

pub mod aggregates;
pub mod catalog;
pub mod combat;
pub mod entities;
pub mod error;
pub mod events;
pub mod ids;
pub mod value_objects;

pub use aggregates::{
    Battle, BattleStatus, MatchRules, Side, SideId, Substitution, TurnOutcome, Victory,
    DUEL_MAX_HP, TEAM_MAX_HP, TEAM_ROSTER_SIZE,
};
pub use catalog::{ActionKind, ComboTier, DamageRange, RejectReason};
pub use combat::{CombatError, CounterReport, DefenseReport, ResourceDeltas, RollFn, TurnEffects};
pub use entities::{FighterProfile, FighterState, COMBO_MAX, ENERGY_MAX, STARTING_ENERGY, ULTRA_MAX};
pub use error::DomainError;
pub use events::{BattleSummary, History, TurnRecord};
pub use ids::{BattleId, FighterId};
pub use value_objects::{FighterName, Guard, Meter, MoveSet};
