//! Fighter state - one combatant slot inside a battle.
//!
//! # Rustic DDD Design
//!
//! - **Private fields**: all mutation goes through crate-internal methods so
//!   only the resolver can touch a fighter mid-battle
//! - **Newtypes**: `FighterName` for the validated display name, `Meter` for
//!   every bounded resource
//! - **Valid by construction**: `new()` deals a fresh slot at full health and
//!   energy with empty gauges

use serde::{Deserialize, Serialize};

use crate::catalog::ComboTier;
use crate::ids::FighterId;
use crate::value_objects::{FighterName, Guard, Meter, MoveSet};

/// Energy gauge upper bound, shared by both match modes.
pub const ENERGY_MAX: u32 = 50;

/// Combo gauge upper bound.
pub const COMBO_MAX: u32 = 100;

/// Ultra gauge upper bound; the ultra move requires a full gauge.
pub const ULTRA_MAX: u32 = 100;

/// Energy every fighter starts a battle with.
pub const STARTING_ENERGY: u32 = 50;

/// Roster data needed to seat a fighter in a battle.
///
/// Produced by the roster lookup port; the battle copies what it needs and
/// never reads the roster again.
#[derive(Debug, Clone)]
pub struct FighterProfile {
    pub id: FighterId,
    pub name: FighterName,
    /// Display labels for named moves; cosmetic, optional.
    pub moves: Option<MoveSet>,
}

impl FighterProfile {
    pub fn new(id: FighterId, name: FighterName) -> Self {
        Self {
            id,
            name,
            moves: None,
        }
    }

    pub fn with_moves(mut self, moves: MoveSet) -> Self {
        self.moves = Some(moves);
        self
    }
}

/// Mutable combat state of one fighter for the duration of a battle.
///
/// # Invariants
///
/// - every meter stays inside `[0, max]` after any mutation
/// - `name` and `moves` are copied at battle creation and never change
/// - `ultra_spent` latches: once true it stays true for the whole match,
///   including after the fighter is benched and redeployed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FighterState {
    id: FighterId,
    name: FighterName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    moves: Option<MoveSet>,
    hp: Meter,
    energy: Meter,
    combo: Meter,
    ultra: Meter,
    guard: Guard,
    ultra_spent: bool,
}

impl FighterState {
    /// Seat a roster fighter: full hp for the mode, full starting energy,
    /// empty combo and ultra gauges, no guard.
    pub fn new(profile: FighterProfile, max_hp: u32) -> Self {
        Self {
            id: profile.id,
            name: profile.name,
            moves: profile.moves,
            hp: Meter::full(max_hp),
            energy: Meter::new(STARTING_ENERGY, ENERGY_MAX),
            combo: Meter::empty(COMBO_MAX),
            ultra: Meter::empty(ULTRA_MAX),
            guard: Guard::Normal,
            ultra_spent: false,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn id(&self) -> FighterId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &FighterName {
        &self.name
    }

    pub fn moves(&self) -> Option<&MoveSet> {
        self.moves.as_ref()
    }

    pub fn hp(&self) -> Meter {
        self.hp
    }

    pub fn energy(&self) -> Meter {
        self.energy
    }

    pub fn combo(&self) -> Meter {
        self.combo
    }

    pub fn ultra(&self) -> Meter {
        self.ultra
    }

    pub fn guard(&self) -> Guard {
        self.guard
    }

    pub fn ultra_spent(&self) -> bool {
        self.ultra_spent
    }

    /// A fighter with no hit points left is out of the match.
    pub fn is_down(&self) -> bool {
        self.hp.is_empty()
    }

    /// Display label for the move a resolved action used, if the roster named
    /// one. `tier` distinguishes the two combo labels.
    pub fn move_label(&self, tier: Option<ComboTier>) -> Option<String> {
        let moves = self.moves.as_ref()?;
        match tier {
            Some(ComboTier::Standard) => Some(moves.combo1.clone()),
            Some(ComboTier::Advanced) => Some(moves.combo2.clone()),
            None => Some(moves.ultra.clone()),
        }
    }

    // =========================================================================
    // Mutation - crate-internal, resolver only
    // =========================================================================

    /// Reset an expiring guard at the start of this fighter's own turn.
    pub(crate) fn expire_guard(&mut self) {
        if self.guard.expires_on_own_turn() {
            self.guard = Guard::Normal;
        }
    }

    pub(crate) fn set_guard(&mut self, guard: Guard) {
        self.guard = guard;
    }

    /// Apply damage, clamped at zero hp. Returns the hp actually removed.
    pub(crate) fn take_damage(&mut self, amount: u32) -> u32 {
        self.hp.spend(amount)
    }

    pub(crate) fn gain_energy(&mut self, amount: u32) {
        self.energy.gain(amount);
    }

    pub(crate) fn spend_energy(&mut self, amount: u32) {
        self.energy.spend(amount);
    }

    pub(crate) fn gain_combo(&mut self, amount: u32) {
        self.combo.gain(amount);
    }

    pub(crate) fn spend_combo(&mut self, amount: u32) {
        self.combo.spend(amount);
    }

    pub(crate) fn gain_ultra(&mut self, amount: u32) {
        self.ultra.gain(amount);
    }

    /// Consume the full ultra gauge and latch the once-per-match flag.
    pub(crate) fn spend_ultra(&mut self) {
        self.ultra.drain();
        self.ultra_spent = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(name: &str) -> FighterProfile {
        FighterProfile::new(FighterId::new(), FighterName::new(name).unwrap())
    }

    #[test]
    fn fresh_fighter_starts_at_the_opening_state() {
        let fighter = FighterState::new(profile("Ryoko"), 300);
        assert_eq!(fighter.hp().value(), 300);
        assert_eq!(fighter.energy().value(), STARTING_ENERGY);
        assert_eq!(fighter.combo().value(), 0);
        assert_eq!(fighter.ultra().value(), 0);
        assert_eq!(fighter.guard(), Guard::Normal);
        assert!(!fighter.ultra_spent());
    }

    #[test]
    fn damage_clamps_at_zero() {
        let mut fighter = FighterState::new(profile("Ryoko"), 100);
        assert_eq!(fighter.take_damage(250), 100);
        assert!(fighter.is_down());
    }

    #[test]
    fn spend_ultra_latches_flag() {
        let mut fighter = FighterState::new(profile("Ryoko"), 100);
        fighter.gain_ultra(ULTRA_MAX);
        fighter.spend_ultra();
        assert_eq!(fighter.ultra().value(), 0);
        assert!(fighter.ultra_spent());
    }

    #[test]
    fn guard_expires_only_when_set() {
        let mut fighter = FighterState::new(profile("Ryoko"), 100);
        fighter.set_guard(Guard::Defending);
        fighter.expire_guard();
        assert_eq!(fighter.guard(), Guard::Normal);
    }

    #[test]
    fn move_label_uses_roster_names() {
        let moves = MoveSet::new("Puño Cometa", "Dragón Ascendente", "Cero Absoluto");
        let with_moves = FighterState::new(profile("Kaede").with_moves(moves), 100);
        assert_eq!(
            with_moves.move_label(Some(ComboTier::Advanced)).as_deref(),
            Some("Dragón Ascendente")
        );
        assert_eq!(
            with_moves.move_label(None).as_deref(),
            Some("Cero Absoluto")
        );

        let without = FighterState::new(profile("Kaede"), 100);
        assert_eq!(without.move_label(None), None);
    }
}
