//! Battle management - owner listings and explicit removal.

use std::sync::Arc;

use rumble_domain::{Battle, BattleId};

use crate::infrastructure::ports::BattleRepo;

use super::BattleError;

pub struct ManageBattles {
    battles: Arc<dyn BattleRepo>,
}

impl ManageBattles {
    pub fn new(battles: Arc<dyn BattleRepo>) -> Self {
        Self { battles }
    }

    /// Battles owned by the authenticated user, finished ones included.
    pub async fn list(&self, owner: &str) -> Result<Vec<Battle>, BattleError> {
        Ok(self.battles.list_for_owner(owner).await?)
    }

    /// Remove a battle document. Battles are never deleted implicitly.
    pub async fn delete(&self, id: BattleId) -> Result<(), BattleError> {
        if self.battles.get(id).await?.is_none() {
            return Err(BattleError::UnknownBattle(id));
        }
        self.battles.delete(id).await?;
        tracing::info!(battle_id = %id, "battle deleted");
        Ok(())
    }
}
