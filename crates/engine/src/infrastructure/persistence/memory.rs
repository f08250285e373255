//! In-memory adapters backing the repository ports.
//!
//! The battle store keeps full aggregate snapshots keyed by id. It gives the
//! usual single-key consistency of a concurrent map; the at-most-one-writer-
//! per-battle contract is the caller's (see `SubmitAction`), the map itself
//! does not serialize resolutions.

use async_trait::async_trait;
use dashmap::DashMap;
use rumble_domain::{Battle, BattleId, FighterId};

use crate::infrastructure::ports::{BattleRepo, RepoError, RosterFighter, RosterRepo};

/// Battle storage backed by a concurrent map.
#[derive(Default)]
pub struct InMemoryBattles {
    battles: DashMap<BattleId, Battle>,
}

impl InMemoryBattles {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BattleRepo for InMemoryBattles {
    async fn get(&self, id: BattleId) -> Result<Option<Battle>, RepoError> {
        Ok(self.battles.get(&id).map(|entry| entry.value().clone()))
    }

    async fn save(&self, battle: &Battle) -> Result<(), RepoError> {
        self.battles.insert(battle.id(), battle.clone());
        Ok(())
    }

    async fn delete(&self, id: BattleId) -> Result<(), RepoError> {
        self.battles.remove(&id);
        Ok(())
    }

    async fn list_for_owner(&self, owner: &str) -> Result<Vec<Battle>, RepoError> {
        Ok(self
            .battles
            .iter()
            .filter(|entry| entry.value().owner() == owner)
            .map(|entry| entry.value().clone())
            .collect())
    }
}

/// Roster lookup backed by a seeded map. Stands in for the external fighter
/// service in tests and local runs.
#[derive(Default)]
pub struct InMemoryRoster {
    fighters: DashMap<FighterId, RosterFighter>,
}

impl InMemoryRoster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(fighters: impl IntoIterator<Item = RosterFighter>) -> Self {
        let roster = Self::new();
        for fighter in fighters {
            roster.fighters.insert(fighter.id, fighter);
        }
        roster
    }

    pub fn insert(&self, fighter: RosterFighter) {
        self.fighters.insert(fighter.id, fighter);
    }
}

#[async_trait]
impl RosterRepo for InMemoryRoster {
    async fn get(&self, id: FighterId) -> Result<Option<RosterFighter>, RepoError> {
        Ok(self.fighters.get(&id).map(|entry| entry.value().clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rumble_domain::{FighterName, FighterProfile, SideId};

    fn profile(name: &str) -> FighterProfile {
        FighterProfile::new(FighterId::new(), FighterName::new(name).unwrap())
    }

    #[tokio::test]
    async fn battle_round_trips_through_the_store() {
        let store = InMemoryBattles::new();
        let battle = Battle::duel(
            "user-1",
            profile("Ryoko"),
            profile("Kaede"),
            SideId::A,
            Utc::now(),
        )
        .unwrap();

        store.save(&battle).await.unwrap();
        let loaded = store.get(battle.id()).await.unwrap().unwrap();
        assert_eq!(loaded, battle);

        store.delete(battle.id()).await.unwrap();
        assert!(store.get(battle.id()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn listing_scopes_by_owner() {
        let store = InMemoryBattles::new();
        for owner in ["alice", "alice", "bob"] {
            let battle = Battle::duel(
                owner,
                profile("Ryoko"),
                profile("Kaede"),
                SideId::A,
                Utc::now(),
            )
            .unwrap();
            store.save(&battle).await.unwrap();
        }

        assert_eq!(store.list_for_owner("alice").await.unwrap().len(), 2);
        assert_eq!(store.list_for_owner("carol").await.unwrap().len(), 0);
    }

    #[tokio::test]
    async fn roster_returns_seeded_fighters() {
        let id = FighterId::new();
        let roster = InMemoryRoster::seeded([
            RosterFighter::new(id, "Ryoko").with_move_names("C1", "C2", "U"),
        ]);

        let fighter = roster.get(id).await.unwrap().unwrap();
        assert_eq!(fighter.name, "Ryoko");
        assert_eq!(fighter.ultra_name.as_deref(), Some("U"));
        assert!(roster.get(FighterId::new()).await.unwrap().is_none());
    }
}
