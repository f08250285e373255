//! Resolution error taxonomy.
//!
//! Every variant is a recoverable bad request: the battle is untouched and
//! the caller has what it needs to retry correctly. Nothing inside the
//! resolver itself can fail.

use thiserror::Error;

use crate::catalog::{ActionKind, RejectReason};
use crate::ids::FighterId;
use crate::value_objects::FighterName;

/// Why a requested turn could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CombatError {
    /// A winner was already decided; finished battles are read-only.
    #[error("battle is already finished")]
    MatchFinished,

    /// The named fighter exists but may not act right now (opponent's turn,
    /// or a benched teammate of the side whose turn it is).
    #[error("it is not {fighter}'s turn")]
    WrongTurn { fighter: FighterName },

    /// The named fighter is not seated in this battle at all.
    #[error("fighter {id} is not part of this battle")]
    NotParticipant { id: FighterId },

    /// The action is unknown or its precondition failed. Carries the moves
    /// that ARE currently legal so the client can grey out the rest.
    #[error("action rejected: {reason}")]
    ActionRejected {
        reason: RejectReason,
        legal: Vec<ActionKind>,
    },
}

impl CombatError {
    /// The legal-move list attached to a rejection, if this is one.
    pub fn legal_moves(&self) -> Option<&[ActionKind]> {
        match self {
            Self::ActionRejected { legal, .. } => Some(legal),
            _ => None,
        }
    }
}
