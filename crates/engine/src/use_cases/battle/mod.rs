//! Battle use cases - the operations a transport layer calls into.

mod act;
mod create;
mod manage;
mod read;

use std::sync::Arc;

use rumble_domain::{BattleId, CombatError, DomainError, FighterId};
use thiserror::Error;

use crate::infrastructure::ports::{BattleRepo, ClockPort, RandomPort, RepoError, RosterRepo};

pub use act::SubmitAction;
pub use create::CreateBattle;
pub use manage::ManageBattles;
pub use read::{BattleHistory, ReadBattle};

/// Everything a battle operation can answer with.
///
/// All variants except `Storage` are recoverable bad requests; the caller
/// gets enough detail to retry correctly (rejections carry the legal-move
/// list inside [`CombatError::ActionRejected`]).
#[derive(Debug, Error)]
pub enum BattleError {
    /// Unknown battle id.
    #[error("battle not found: {0}")]
    UnknownBattle(BattleId),

    /// Unknown fighter id in a creation request.
    #[error("fighter not found: {0}")]
    UnknownFighter(FighterId),

    /// Turn resolution refused the request (wrong turn, finished match,
    /// rejected action, non-participant).
    #[error(transparent)]
    Combat(#[from] CombatError),

    /// Creation input failed domain validation.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The storage port failed; not a caller error.
    #[error("storage error: {0}")]
    Storage(#[from] RepoError),
}

/// Bundle wiring every battle operation onto shared ports.
pub struct BattleUseCases {
    pub create: CreateBattle,
    pub act: SubmitAction,
    pub read: ReadBattle,
    pub manage: ManageBattles,
}

impl BattleUseCases {
    pub fn new(
        battles: Arc<dyn BattleRepo>,
        roster: Arc<dyn RosterRepo>,
        clock: Arc<dyn ClockPort>,
        random: Arc<dyn RandomPort>,
    ) -> Self {
        Self {
            create: CreateBattle::new(
                Arc::clone(&battles),
                roster,
                Arc::clone(&clock),
                Arc::clone(&random),
            ),
            act: SubmitAction::new(Arc::clone(&battles), clock, random),
            read: ReadBattle::new(Arc::clone(&battles)),
            manage: ManageBattles::new(battles),
        }
    }
}
