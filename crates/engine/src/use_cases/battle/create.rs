//! Battle creation - duel and team.

use std::sync::Arc;

use rumble_domain::{
    Battle, FighterId, FighterName, FighterProfile, MoveSet, SideId, TEAM_ROSTER_SIZE,
};

use crate::infrastructure::ports::{BattleRepo, ClockPort, RandomPort, RosterFighter, RosterRepo};

use super::BattleError;

/// Creates battles from roster references.
///
/// Both constructors resolve every fighter id against the roster port, seat
/// the fighters at their opening state, and draw the opening side
/// uniformly at random.
pub struct CreateBattle {
    battles: Arc<dyn BattleRepo>,
    roster: Arc<dyn RosterRepo>,
    clock: Arc<dyn ClockPort>,
    random: Arc<dyn RandomPort>,
}

impl CreateBattle {
    pub fn new(
        battles: Arc<dyn BattleRepo>,
        roster: Arc<dyn RosterRepo>,
        clock: Arc<dyn ClockPort>,
        random: Arc<dyn RandomPort>,
    ) -> Self {
        Self {
            battles,
            roster,
            clock,
            random,
        }
    }

    /// Create a 1-vs-1 battle between two distinct roster fighters.
    pub async fn duel(
        &self,
        owner: &str,
        fighter_a: FighterId,
        fighter_b: FighterId,
    ) -> Result<Battle, BattleError> {
        let profile_a = self.profile(fighter_a).await?;
        let profile_b = self.profile(fighter_b).await?;

        let battle = Battle::duel(
            owner,
            profile_a,
            profile_b,
            self.first_turn(),
            self.clock.now(),
        )?;
        self.battles.save(&battle).await?;

        tracing::info!(battle_id = %battle.id(), owner, "duel created");
        Ok(battle)
    }

    /// Create a 3-vs-3 team battle between six distinct roster fighters.
    pub async fn team(
        &self,
        owner: &str,
        side_a: [FighterId; TEAM_ROSTER_SIZE],
        side_b: [FighterId; TEAM_ROSTER_SIZE],
    ) -> Result<Battle, BattleError> {
        let mut profiles_a = Vec::with_capacity(side_a.len());
        for id in side_a {
            profiles_a.push(self.profile(id).await?);
        }
        let mut profiles_b = Vec::with_capacity(side_b.len());
        for id in side_b {
            profiles_b.push(self.profile(id).await?);
        }

        let battle = Battle::team(
            owner,
            profiles_a,
            profiles_b,
            self.first_turn(),
            self.clock.now(),
        )?;
        self.battles.save(&battle).await?;

        tracing::info!(battle_id = %battle.id(), owner, "team battle created");
        Ok(battle)
    }

    async fn profile(&self, id: FighterId) -> Result<FighterProfile, BattleError> {
        let fighter = self
            .roster
            .get(id)
            .await?
            .ok_or(BattleError::UnknownFighter(id))?;
        into_profile(fighter)
    }

    fn first_turn(&self) -> SideId {
        if self.random.gen_range(0, 1) == 0 {
            SideId::A
        } else {
            SideId::B
        }
    }
}

/// Copy the roster row into a battle-seating profile. Move labels come along
/// only when the roster names all three.
fn into_profile(fighter: RosterFighter) -> Result<FighterProfile, BattleError> {
    let name = FighterName::new(fighter.name)?;
    let mut profile = FighterProfile::new(fighter.id, name);
    if let (Some(combo1), Some(combo2), Some(ultra)) =
        (fighter.combo1_name, fighter.combo2_name, fighter.ultra_name)
    {
        profile = profile.with_moves(MoveSet::new(combo1, combo2, ultra));
    }
    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::{FixedClock, MaxRandom, MinRandom};
    use crate::infrastructure::ports::{MockBattleRepo, MockRosterRepo};
    use chrono::{TimeZone, Utc};
    use rumble_domain::BattleStatus;

    fn fixed_clock() -> Arc<FixedClock> {
        Arc::new(FixedClock(
            Utc.with_ymd_and_hms(2025, 3, 1, 18, 0, 0).unwrap(),
        ))
    }

    fn roster_with(fighters: Vec<RosterFighter>) -> MockRosterRepo {
        let mut roster = MockRosterRepo::new();
        roster.expect_get().returning(move |id| {
            Ok(fighters.iter().find(|f| f.id == id).cloned())
        });
        roster
    }

    #[tokio::test]
    async fn duel_seats_both_fighters_and_saves() {
        let a = FighterId::new();
        let b = FighterId::new();
        let roster = roster_with(vec![
            RosterFighter::new(a, "Ryoko"),
            RosterFighter::new(b, "Kaede"),
        ]);
        let mut battles = MockBattleRepo::new();
        battles.expect_save().times(1).returning(|_| Ok(()));

        let create = CreateBattle::new(
            Arc::new(battles),
            Arc::new(roster),
            fixed_clock(),
            Arc::new(MinRandom),
        );

        let battle = create.duel("user-1", a, b).await.unwrap();
        assert_eq!(battle.owner(), "user-1");
        assert_eq!(battle.status(), BattleStatus::InProgress);
        // MinRandom draws 0 -> side A opens.
        assert_eq!(battle.turn_owner(), SideId::A);
        assert_eq!(battle.side(SideId::A).active().name().as_str(), "Ryoko");
        assert_eq!(battle.side(SideId::B).active().name().as_str(), "Kaede");
    }

    #[tokio::test]
    async fn opening_side_follows_the_draw() {
        let a = FighterId::new();
        let b = FighterId::new();
        let roster = roster_with(vec![
            RosterFighter::new(a, "Ryoko"),
            RosterFighter::new(b, "Kaede"),
        ]);
        let mut battles = MockBattleRepo::new();
        battles.expect_save().returning(|_| Ok(()));

        let create = CreateBattle::new(
            Arc::new(battles),
            Arc::new(roster),
            fixed_clock(),
            Arc::new(MaxRandom),
        );

        let battle = create.duel("user-1", a, b).await.unwrap();
        assert_eq!(battle.turn_owner(), SideId::B);
    }

    #[tokio::test]
    async fn unknown_fighter_is_an_invalid_reference() {
        let a = FighterId::new();
        let missing = FighterId::new();
        let roster = roster_with(vec![RosterFighter::new(a, "Ryoko")]);
        let battles = MockBattleRepo::new();

        let create = CreateBattle::new(
            Arc::new(battles),
            Arc::new(roster),
            fixed_clock(),
            Arc::new(MinRandom),
        );

        let err = create.duel("user-1", a, missing).await.unwrap_err();
        assert!(matches!(err, BattleError::UnknownFighter(id) if id == missing));
    }

    #[tokio::test]
    async fn duplicate_fighters_fail_validation() {
        let a = FighterId::new();
        let roster = roster_with(vec![RosterFighter::new(a, "Ryoko")]);
        let battles = MockBattleRepo::new();

        let create = CreateBattle::new(
            Arc::new(battles),
            Arc::new(roster),
            fixed_clock(),
            Arc::new(MinRandom),
        );

        let err = create.duel("user-1", a, a).await.unwrap_err();
        assert!(matches!(err, BattleError::Domain(_)));
    }

    #[tokio::test]
    async fn team_copies_move_labels_from_the_roster() {
        let ids_a = [FighterId::new(), FighterId::new(), FighterId::new()];
        let ids_b = [FighterId::new(), FighterId::new(), FighterId::new()];
        let mut fighters = Vec::new();
        for (i, id) in ids_a.iter().chain(ids_b.iter()).enumerate() {
            fighters.push(
                RosterFighter::new(*id, format!("Fighter {i}")).with_move_names(
                    "Puño Cometa",
                    "Dragón Ascendente",
                    "Cero Absoluto",
                ),
            );
        }
        let roster = roster_with(fighters);
        let mut battles = MockBattleRepo::new();
        battles.expect_save().times(1).returning(|_| Ok(()));

        let create = CreateBattle::new(
            Arc::new(battles),
            Arc::new(roster),
            fixed_clock(),
            Arc::new(MinRandom),
        );

        let battle = create.team("user-1", ids_a, ids_b).await.unwrap();
        let active = battle.side(SideId::A).active();
        assert_eq!(active.hp().value(), 100);
        assert_eq!(
            active.moves().map(|m| m.ultra.as_str()),
            Some("Cero Absoluto")
        );
    }
}
