//! Battle reads - current state, ledger, and derived summary.

use std::sync::Arc;

use rumble_domain::{Battle, BattleId, BattleSummary, TurnRecord};

use crate::infrastructure::ports::BattleRepo;

use super::BattleError;

/// The ledger read model: full ordered turn list plus the derived summary.
#[derive(Debug, Clone)]
pub struct BattleHistory {
    pub turns: Vec<TurnRecord>,
    pub summary: BattleSummary,
}

/// Pure reads against persisted battles; no resolution logic involved.
pub struct ReadBattle {
    battles: Arc<dyn BattleRepo>,
}

impl ReadBattle {
    pub fn new(battles: Arc<dyn BattleRepo>) -> Self {
        Self { battles }
    }

    pub async fn get(&self, id: BattleId) -> Result<Battle, BattleError> {
        self.battles
            .get(id)
            .await?
            .ok_or(BattleError::UnknownBattle(id))
    }

    /// Full history in insertion order plus winner/last-known-state summary.
    pub async fn history(&self, id: BattleId) -> Result<BattleHistory, BattleError> {
        let battle = self.get(id).await?;
        Ok(BattleHistory {
            turns: battle.history().entries().to_vec(),
            summary: battle.summary(),
        })
    }
}
