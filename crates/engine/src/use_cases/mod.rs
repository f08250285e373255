//! Use cases - user story orchestration over the ports.

pub mod battle;

pub use battle::{
    BattleError, BattleHistory, BattleUseCases, CreateBattle, ManageBattles, ReadBattle,
    SubmitAction,
};
