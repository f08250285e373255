//! Single-action resolution between two engaged fighters.
//!
//! This is the fighter-level half of the engine: given the acting fighter,
//! the opposing fighter, and a validated-by-name action, it applies the
//! catalog row plus every reactive effect in one pass. Battle-level concerns
//! (turn ownership, win detection, substitution, history) live on the
//! [`crate::aggregates::Battle`] aggregate, which calls in here on cloned
//! slots and commits only on success.
//!
//! Randomness is injected: `roll(low, high)` must return a uniform integer
//! in the inclusive range. Production wires a real RNG, tests script the
//! draws.

use crate::catalog::{
    self, ActionKind, ComboTier, RejectReason, CHARGE_ENERGY_GAIN, COUNTER_DAMAGE,
    COUNTER_ENERGY_COST, DEFENSE_ENERGY_BONUS, DEFENSE_ULTRA_BONUS, MITIGATION_PERCENT,
    VULNERABLE_ULTRA_BONUS,
};
use crate::entities::FighterState;
use crate::value_objects::Guard;

use super::effects::{CounterReport, DefenseReport, ResourceDeltas, TurnEffects};

/// Injected uniform roll source: `roll(low, high)` is inclusive on both ends.
pub type RollFn<'a> = &'a mut dyn FnMut(u32, u32) -> u32;

/// Resolve one action of `actor` against `opponent`.
///
/// On success both fighters are mutated and the effects bundle is returned.
/// On rejection neither fighter is touched - the caller relies on that to
/// keep failed turns free of partial updates.
pub(crate) fn resolve_action(
    actor: &mut FighterState,
    opponent: &mut FighterState,
    action: ActionKind,
    roll: RollFn<'_>,
) -> Result<TurnEffects, RejectReason> {
    // Preconditions are checked against the unmutated actor; the guard reset
    // below only happens once the turn is known to go through.
    catalog::check(actor, action)?;

    let before = actor.clone();

    // Guards expire at the start of the holder's own turn.
    actor.expire_guard();

    let mut tier = None;
    let mut raw_damage = 0;

    match action {
        ActionKind::BasicAttack | ActionKind::StrongAttack => {
            actor.spend_energy(action.energy_cost());
            actor.gain_combo(action.combo_gain());
            actor.gain_ultra(action.ultra_gain());
            if let Some(range) = action.damage() {
                raw_damage = range.roll(roll);
            }
        }
        ActionKind::Combo => {
            // check() guarantees a tier exists for the current gauge.
            let fired = ComboTier::for_gauge(actor.combo().value())
                .unwrap_or(ComboTier::Standard);
            actor.spend_energy(action.energy_cost());
            actor.spend_combo(fired.combo_cost());
            actor.gain_ultra(action.ultra_gain());
            raw_damage = fired.damage().roll(roll);
            tier = Some(fired);
        }
        ActionKind::Defend => {
            actor.spend_energy(action.energy_cost());
            actor.set_guard(Guard::Defending);
        }
        ActionKind::ChargeEnergy => {
            actor.gain_energy(CHARGE_ENERGY_GAIN);
            actor.gain_ultra(action.ultra_gain());
            actor.set_guard(Guard::Vulnerable);
        }
        ActionKind::Ultra => {
            actor.spend_ultra();
            if let Some(range) = action.damage() {
                raw_damage = range.roll(roll);
            }
        }
    }

    let move_label = match action {
        ActionKind::Combo => actor.move_label(tier),
        ActionKind::Ultra => actor.move_label(None),
        _ => None,
    };

    let mut defense = None;
    let mut counter = None;
    let mut realized = raw_damage;
    let mut vulnerable_bonus = 0;

    if action.is_offensive() {
        if opponent.guard().is_defending() {
            let (low, high) = MITIGATION_PERCENT;
            let percent = roll(low, high);
            let mitigated = raw_damage * percent / 100;
            realized = raw_damage - mitigated;
            opponent.gain_energy(DEFENSE_ENERGY_BONUS);
            opponent.gain_ultra(DEFENSE_ULTRA_BONUS);
            defense = Some(DefenseReport { mitigated, percent });

            // A heavy hit on a charged defender is answered in the same turn.
            // The counter never cancels or reorders the primary attack.
            if action.invites_counter() && opponent.energy().has(COUNTER_ENERGY_COST) {
                opponent.spend_energy(COUNTER_ENERGY_COST);
                actor.take_damage(COUNTER_DAMAGE);
                counter = Some(CounterReport {
                    damage: COUNTER_DAMAGE,
                    energy_cost: COUNTER_ENERGY_COST,
                });
            }
        }

        opponent.take_damage(realized);

        if opponent.guard().is_vulnerable() && realized > 0 {
            opponent.gain_ultra(VULNERABLE_ULTRA_BONUS);
            vulnerable_bonus = VULNERABLE_ULTRA_BONUS;
        }
    }

    Ok(TurnEffects {
        action,
        tier,
        move_label,
        damage: realized,
        defense,
        counter,
        vulnerable_bonus,
        actor_deltas: ResourceDeltas::between(&before, actor),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{FighterProfile, FighterState};
    use crate::ids::FighterId;
    use crate::value_objects::{FighterName, MoveSet};

    fn fighter(name: &str) -> FighterState {
        FighterState::new(
            FighterProfile::new(FighterId::new(), FighterName::new(name).unwrap()),
            300,
        )
    }

    /// Roll source returning queued values, asserting each stays in range.
    fn scripted(values: Vec<u32>) -> impl FnMut(u32, u32) -> u32 {
        let mut queue = values.into_iter();
        move |low, high| {
            let v = queue.next().expect("unexpected extra roll");
            assert!(v >= low && v <= high, "scripted roll {v} outside [{low}, {high}]");
            v
        }
    }

    fn roll_max(_low: u32, high: u32) -> u32 {
        high
    }

    #[test]
    fn basic_attack_applies_table_row() {
        let mut actor = fighter("Ryoko");
        let mut opponent = fighter("Kaede");
        let mut roll = scripted(vec![14]);

        let effects =
            resolve_action(&mut actor, &mut opponent, ActionKind::BasicAttack, &mut roll)
                .unwrap();

        assert_eq!(effects.damage, 14);
        assert_eq!(opponent.hp().value(), 286);
        assert_eq!(actor.energy().value(), 40);
        assert_eq!(actor.combo().value(), 10);
        assert_eq!(actor.ultra().value(), 7);
        assert_eq!(effects.actor_deltas.energy, -10);
        assert_eq!(effects.actor_deltas.combo, 10);
        assert_eq!(effects.actor_deltas.ultra, 7);
    }

    #[test]
    fn rejection_leaves_both_fighters_untouched() {
        let mut actor = fighter("Ryoko");
        let mut opponent = fighter("Kaede");
        actor.spend_energy(45); // 5 left
        let actor_before = actor.clone();
        let opponent_before = opponent.clone();
        let mut roll = roll_max;

        let err = resolve_action(&mut actor, &mut opponent, ActionKind::StrongAttack, &mut roll)
            .unwrap_err();

        assert_eq!(
            err,
            RejectReason::InsufficientEnergy {
                required: 20,
                available: 5
            }
        );
        assert_eq!(actor, actor_before);
        assert_eq!(opponent, opponent_before);
    }

    #[test]
    fn advanced_combo_spends_forty_and_uses_tier_two_range() {
        let mut actor = fighter("Ryoko");
        let mut opponent = fighter("Kaede");
        actor.gain_combo(65);
        actor.spend_energy(10); // energy 40, per scenario
        let mut roll = scripted(vec![62]);

        let effects =
            resolve_action(&mut actor, &mut opponent, ActionKind::Combo, &mut roll).unwrap();

        assert_eq!(effects.tier, Some(ComboTier::Advanced));
        assert_eq!(effects.damage, 62);
        assert_eq!(actor.combo().value(), 25); // 65 - 40
        assert_eq!(actor.energy().value(), 10); // 40 - 30
        assert_eq!(actor.ultra().value(), 9);
    }

    #[test]
    fn defending_mitigates_and_grants_bonuses() {
        let mut actor = fighter("Ryoko");
        let mut opponent = fighter("Kaede");
        opponent.spend_energy(50);
        opponent.set_guard(Guard::Defending);
        // damage 16, mitigation 50%
        let mut roll = scripted(vec![16, 50]);

        let effects =
            resolve_action(&mut actor, &mut opponent, ActionKind::BasicAttack, &mut roll)
                .unwrap();

        assert_eq!(effects.damage, 8);
        assert_eq!(effects.defense, Some(DefenseReport { mitigated: 8, percent: 50 }));
        assert_eq!(opponent.hp().value(), 292);
        assert_eq!(opponent.energy().value(), 10);
        assert_eq!(opponent.ultra().value(), 8);
        // Basic attacks never invite a counter.
        assert_eq!(effects.counter, None);
    }

    #[test]
    fn strong_attack_into_defense_draws_exactly_one_counter() {
        let mut actor = fighter("Ryoko");
        let mut opponent = fighter("Kaede");
        opponent.set_guard(Guard::Defending);
        let mut roll = scripted(vec![28, 60]);

        let effects =
            resolve_action(&mut actor, &mut opponent, ActionKind::StrongAttack, &mut roll)
                .unwrap();

        assert_eq!(
            effects.counter,
            Some(CounterReport { damage: 5, energy_cost: 10 })
        );
        assert_eq!(actor.hp().value(), 295);
        // full at 50, defense bonus clamps away, counter costs 10
        assert_eq!(opponent.energy().value(), 40);
    }

    #[test]
    fn counter_requires_energy_after_the_defense_bonus() {
        let mut actor = fighter("Ryoko");
        let mut opponent = fighter("Kaede");
        opponent.spend_energy(45); // 5 left; +10 bonus puts them at 15 >= 10
        opponent.set_guard(Guard::Defending);
        let mut roll = scripted(vec![25, 55]);

        let effects =
            resolve_action(&mut actor, &mut opponent, ActionKind::StrongAttack, &mut roll)
                .unwrap();

        assert!(effects.counter.is_some());
        assert_eq!(opponent.energy().value(), 5);
    }

    #[test]
    fn vulnerable_opponent_gains_ultra_on_any_damaging_hit() {
        let mut actor = fighter("Ryoko");
        let mut opponent = fighter("Kaede");
        opponent.set_guard(Guard::Vulnerable);
        let mut roll = scripted(vec![13]);

        let effects =
            resolve_action(&mut actor, &mut opponent, ActionKind::BasicAttack, &mut roll)
                .unwrap();

        assert_eq!(effects.vulnerable_bonus, 5);
        assert_eq!(opponent.ultra().value(), 5);
    }

    #[test]
    fn charge_energy_clamps_and_exposes() {
        let mut actor = fighter("Ryoko");
        let mut opponent = fighter("Kaede");
        let mut roll = roll_max; // never consulted

        let effects =
            resolve_action(&mut actor, &mut opponent, ActionKind::ChargeEnergy, &mut roll)
                .unwrap();

        assert_eq!(actor.energy().value(), 50); // 50 + 30 clamped
        assert_eq!(actor.ultra().value(), 5);
        assert_eq!(actor.guard(), Guard::Vulnerable);
        assert_eq!(effects.damage, 0);
        assert_eq!(effects.actor_deltas.energy, 0);
    }

    #[test]
    fn actors_own_guard_expires_before_the_action() {
        let mut actor = fighter("Ryoko");
        let mut opponent = fighter("Kaede");
        actor.set_guard(Guard::Defending);
        let mut roll = scripted(vec![12]);

        resolve_action(&mut actor, &mut opponent, ActionKind::BasicAttack, &mut roll).unwrap();

        assert_eq!(actor.guard(), Guard::Normal);
    }

    #[test]
    fn ultra_drains_gauge_and_latches() {
        let mut actor = fighter("Ryoko");
        let mut opponent = fighter("Kaede");
        actor.gain_ultra(100);
        let mut roll = scripted(vec![110]);

        let effects =
            resolve_action(&mut actor, &mut opponent, ActionKind::Ultra, &mut roll).unwrap();

        assert_eq!(effects.damage, 110);
        assert_eq!(actor.ultra().value(), 0);
        assert!(actor.ultra_spent());
        assert_eq!(opponent.hp().value(), 190);

        // A full gauge can never fund a second ultra.
        actor.gain_ultra(100);
        let err = resolve_action(&mut actor, &mut opponent, ActionKind::Ultra, &mut roll)
            .unwrap_err();
        assert_eq!(err, RejectReason::UltraAlreadySpent);
    }

    #[test]
    fn ultra_label_comes_from_the_roster_moves() {
        let moves = MoveSet::new("Puño Cometa", "Dragón Ascendente", "Cero Absoluto");
        let profile = FighterProfile::new(
            FighterId::new(),
            FighterName::new("Kaede").unwrap(),
        )
        .with_moves(moves);
        let mut actor = FighterState::new(profile, 300);
        let mut opponent = fighter("Ryoko");
        actor.gain_ultra(100);
        let mut roll = scripted(vec![95]);

        let effects =
            resolve_action(&mut actor, &mut opponent, ActionKind::Ultra, &mut roll).unwrap();

        assert_eq!(effects.move_label.as_deref(), Some("Cero Absoluto"));
    }

    #[test]
    fn meters_stay_bounded_for_any_draw() {
        // Exhaustively walk the extreme draws on a defended strong attack.
        for (dmg, pct) in [(22, 50), (22, 70), (28, 50), (28, 70)] {
            let mut actor = fighter("Ryoko");
            let mut opponent = fighter("Kaede");
            opponent.set_guard(Guard::Defending);
            let mut roll = scripted(vec![dmg, pct]);

            resolve_action(&mut actor, &mut opponent, ActionKind::StrongAttack, &mut roll)
                .unwrap();

            for f in [&actor, &opponent] {
                assert!(f.hp().value() <= f.hp().max());
                assert!(f.energy().value() <= f.energy().max());
                assert!(f.combo().value() <= f.combo().max());
                assert!(f.ultra().value() <= f.ultra().max());
            }
        }
    }
}
