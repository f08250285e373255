//! Action catalog - the fixed table of moves a fighter can attempt.
//!
//! Each row pins an action's precondition, damage range, and resource deltas.
//! Rejection never guesses: [`check`] returns the precise reason, and
//! [`legal_moves`] re-evaluates every row against the fighter's current
//! resources so callers can tell the player what IS possible right now.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::entities::FighterState;

/// Flat counter-attack damage dealt by a defender with enough energy.
pub const COUNTER_DAMAGE: u32 = 5;

/// Energy a counter-attack costs the defender.
pub const COUNTER_ENERGY_COST: u32 = 10;

/// Energy granted to a defender who absorbs a hit.
pub const DEFENSE_ENERGY_BONUS: u32 = 10;

/// Ultra granted to a defender who absorbs a hit.
pub const DEFENSE_ULTRA_BONUS: u32 = 8;

/// Mitigation percent range drawn when a hit lands on a defending fighter.
pub const MITIGATION_PERCENT: (u32, u32) = (50, 70);

/// Ultra granted to a vulnerable fighter for any hit that deals damage.
pub const VULNERABLE_ULTRA_BONUS: u32 = 5;

/// Energy restored by Charge Energy (clamped at the gauge cap).
pub const CHARGE_ENERGY_GAIN: u32 = 30;

/// Inclusive uniform damage range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageRange {
    pub low: u32,
    pub high: u32,
}

impl DamageRange {
    pub const fn new(low: u32, high: u32) -> Self {
        Self { low, high }
    }

    /// Draw a damage value through the injected roll source.
    pub fn roll(&self, roll: &mut dyn FnMut(u32, u32) -> u32) -> u32 {
        roll(self.low, self.high)
    }
}

/// The two combo damage tiers, selected by the current combo gauge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComboTier {
    /// Combo gauge in [30, 60]
    Standard,
    /// Combo gauge in [61, 100]
    Advanced,
}

impl ComboTier {
    /// Tier unlocked by the given combo gauge, if any.
    pub fn for_gauge(combo: u32) -> Option<Self> {
        match combo {
            30..=60 => Some(Self::Standard),
            61..=100 => Some(Self::Advanced),
            _ => None,
        }
    }

    pub fn damage(&self) -> DamageRange {
        match self {
            Self::Standard => DamageRange::new(35, 45),
            Self::Advanced => DamageRange::new(55, 70),
        }
    }

    /// Combo gauge consumed when this tier fires.
    pub fn combo_cost(&self) -> u32 {
        match self {
            Self::Standard => 30,
            Self::Advanced => 40,
        }
    }
}

/// The six actions of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    BasicAttack,
    StrongAttack,
    Combo,
    Defend,
    ChargeEnergy,
    Ultra,
}

impl ActionKind {
    pub const ALL: [Self; 6] = [
        Self::BasicAttack,
        Self::StrongAttack,
        Self::Combo,
        Self::Defend,
        Self::ChargeEnergy,
        Self::Ultra,
    ];

    /// Stable wire identifier.
    pub fn id(&self) -> &'static str {
        match self {
            Self::BasicAttack => "basic_attack",
            Self::StrongAttack => "strong_attack",
            Self::Combo => "combo",
            Self::Defend => "defend",
            Self::ChargeEnergy => "charge_energy",
            Self::Ultra => "ultra",
        }
    }

    /// Product display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::BasicAttack => "Ataque Básico",
            Self::StrongAttack => "Ataque Fuerte",
            Self::Combo => "Combo",
            Self::Defend => "Defensa",
            Self::ChargeEnergy => "Cargar Energía",
            Self::Ultra => "Ultra",
        }
    }

    /// Parse an action from its wire identifier or display label.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        Self::ALL
            .into_iter()
            .find(|a| a.id().eq_ignore_ascii_case(input) || a.label() == input)
    }

    /// Whether the action deals damage to the opponent.
    pub fn is_offensive(&self) -> bool {
        matches!(
            self,
            Self::BasicAttack | Self::StrongAttack | Self::Combo | Self::Ultra
        )
    }

    /// Heavy hits give a defending opponent the opening for a counter-attack.
    pub fn invites_counter(&self) -> bool {
        matches!(self, Self::StrongAttack | Self::Combo)
    }

    /// Energy the action costs to attempt.
    pub fn energy_cost(&self) -> u32 {
        match self {
            Self::BasicAttack => 10,
            Self::StrongAttack => 20,
            Self::Combo => 30,
            Self::Defend => 5,
            Self::ChargeEnergy | Self::Ultra => 0,
        }
    }

    /// Combo gauge gained on use (attacks only).
    pub fn combo_gain(&self) -> u32 {
        match self {
            Self::BasicAttack => 10,
            Self::StrongAttack => 15,
            _ => 0,
        }
    }

    /// Ultra gauge gained on use.
    pub fn ultra_gain(&self) -> u32 {
        match self {
            Self::BasicAttack => 7,
            Self::StrongAttack => 6,
            Self::Combo => 9,
            Self::ChargeEnergy => 5,
            Self::Defend | Self::Ultra => 0,
        }
    }

    /// Fixed damage range, for the actions whose damage does not depend on
    /// the combo gauge.
    pub fn damage(&self) -> Option<DamageRange> {
        match self {
            Self::BasicAttack => Some(DamageRange::new(12, 16)),
            Self::StrongAttack => Some(DamageRange::new(22, 28)),
            Self::Ultra => Some(DamageRange::new(90, 110)),
            _ => None,
        }
    }
}

/// Why an action was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RejectReason {
    #[error("unknown action: {name}")]
    UnknownAction { name: String },
    #[error("not enough energy: need {required}, have {available}")]
    InsufficientEnergy { required: u32, available: u32 },
    #[error("combo gauge too low: need {required}, have {available}")]
    InsufficientCombo { required: u32, available: u32 },
    #[error("ultra gauge not full: {available}/100")]
    UltraNotCharged { available: u32 },
    #[error("ultra move already spent this match")]
    UltraAlreadySpent,
}

/// Evaluate one row's precondition against the fighter's current resources.
pub fn check(fighter: &FighterState, action: ActionKind) -> Result<(), RejectReason> {
    let energy = fighter.energy().value();
    let required = action.energy_cost();
    if action == ActionKind::Combo {
        let combo = fighter.combo().value();
        if ComboTier::for_gauge(combo).is_none() {
            return Err(RejectReason::InsufficientCombo {
                required: 30,
                available: combo,
            });
        }
    }
    if action == ActionKind::Ultra {
        if fighter.ultra_spent() {
            return Err(RejectReason::UltraAlreadySpent);
        }
        if !fighter.ultra().is_full() {
            return Err(RejectReason::UltraNotCharged {
                available: fighter.ultra().value(),
            });
        }
    }
    if energy < required {
        return Err(RejectReason::InsufficientEnergy {
            required,
            available: energy,
        });
    }
    Ok(())
}

/// Every catalog row whose precondition currently holds, in table order.
pub fn legal_moves(fighter: &FighterState) -> Vec<ActionKind> {
    ActionKind::ALL
        .into_iter()
        .filter(|action| check(fighter, *action).is_ok())
        .collect()
}
