//! Aggregates - consistency boundaries with exclusive ownership of their state.

pub mod battle;

pub use battle::{
    Battle, BattleStatus, MatchRules, Side, SideId, Substitution, TurnOutcome, Victory,
    DUEL_MAX_HP, TEAM_MAX_HP, TEAM_ROSTER_SIZE,
};
