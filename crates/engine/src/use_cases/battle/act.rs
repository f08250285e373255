//! Action submission - the write path of a running battle.

use std::sync::Arc;

use rumble_domain::{BattleId, FighterId, TurnOutcome};

use crate::infrastructure::ports::{BattleRepo, ClockPort, RandomPort};

use super::BattleError;

/// Runs one resolution: load, resolve, store.
///
/// The resolution itself is synchronous and in-memory; the only awaits are
/// the two storage hops. Callers MUST serialize submissions per battle id
/// (a per-battle lock or single-writer queue) - the engine performs a plain
/// read-modify-write and provides no isolation of its own.
pub struct SubmitAction {
    battles: Arc<dyn BattleRepo>,
    clock: Arc<dyn ClockPort>,
    random: Arc<dyn RandomPort>,
}

impl SubmitAction {
    pub fn new(
        battles: Arc<dyn BattleRepo>,
        clock: Arc<dyn ClockPort>,
        random: Arc<dyn RandomPort>,
    ) -> Self {
        Self {
            battles,
            clock,
            random,
        }
    }

    /// Resolve `action` for `fighter` in `battle_id`.
    ///
    /// Success persists the new battle snapshot and returns the effects
    /// bundle. Every error leaves the stored battle exactly as it was.
    pub async fn execute(
        &self,
        battle_id: BattleId,
        fighter: FighterId,
        action: &str,
    ) -> Result<TurnOutcome, BattleError> {
        let mut battle = self
            .battles
            .get(battle_id)
            .await?
            .ok_or(BattleError::UnknownBattle(battle_id))?;

        let random = Arc::clone(&self.random);
        let mut roll = move |low: u32, high: u32| random.gen_range(low, high);

        let outcome = battle
            .execute_action(fighter, action, &mut roll, self.clock.now())
            .inspect_err(|error| {
                tracing::warn!(%battle_id, %fighter, action, %error, "action rejected");
            })?;

        self.battles.save(&battle).await?;

        tracing::info!(
            %battle_id,
            attacker = %outcome.record.attacker(),
            action = outcome.record.action().id(),
            damage = outcome.record.damage(),
            winner = outcome.winner.as_ref().map(|v| v.fighter.as_str()),
            "turn resolved"
        );
        Ok(outcome)
    }
}
