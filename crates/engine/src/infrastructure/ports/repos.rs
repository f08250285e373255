//! Repository port traits for battle and roster storage.

use async_trait::async_trait;
use rumble_domain::{Battle, BattleId, FighterId};

use super::error::RepoError;
use super::types::RosterFighter;

/// Battle document storage.
///
/// `save` stores the full aggregate snapshot; the engine performs a
/// read-modify-write per resolution and assumes at most one concurrent
/// writer per battle id (callers serialize, see the use-case docs).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BattleRepo: Send + Sync {
    async fn get(&self, id: BattleId) -> Result<Option<Battle>, RepoError>;
    async fn save(&self, battle: &Battle) -> Result<(), RepoError>;
    async fn delete(&self, id: BattleId) -> Result<(), RepoError>;
    async fn list_for_owner(&self, owner: &str) -> Result<Vec<Battle>, RepoError>;
}

/// Read access to the external fighter roster.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RosterRepo: Send + Sync {
    async fn get(&self, id: FighterId) -> Result<Option<RosterFighter>, RepoError>;
}
