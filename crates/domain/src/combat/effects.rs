//! What a resolved turn did - the effects bundle handed back to the caller
//! and stamped onto the history record.

use serde::{Deserialize, Serialize};

use crate::catalog::{ActionKind, ComboTier};
use crate::entities::FighterState;

/// Mitigation applied because the defender held a Defending guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefenseReport {
    /// Damage absorbed by the guard.
    pub mitigated: u32,
    /// The drawn mitigation percent, in [50, 70].
    pub percent: u32,
}

/// Automatic counter-attack thrown by a defending fighter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CounterReport {
    /// Damage dealt back to the attacker.
    pub damage: u32,
    /// Energy the counter cost the defender.
    pub energy_cost: u32,
}

/// Signed change of the actor's resources over one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceDeltas {
    pub hp: i64,
    pub energy: i64,
    pub combo: i64,
    pub ultra: i64,
}

impl ResourceDeltas {
    pub(crate) fn between(before: &FighterState, after: &FighterState) -> Self {
        let diff = |b: u32, a: u32| i64::from(a) - i64::from(b);
        Self {
            hp: diff(before.hp().value(), after.hp().value()),
            energy: diff(before.energy().value(), after.energy().value()),
            combo: diff(before.combo().value(), after.combo().value()),
            ultra: diff(before.ultra().value(), after.ultra().value()),
        }
    }
}

/// Everything one resolved action did, minus the state snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnEffects {
    pub action: ActionKind,
    /// Combo tier that fired, when the action was a combo.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier: Option<ComboTier>,
    /// Roster display label for the move, when the roster names one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub move_label: Option<String>,
    /// Damage the defender actually took, post-mitigation.
    pub damage: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defense: Option<DefenseReport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counter: Option<CounterReport>,
    /// Ultra granted to the defender for taking a hit while Vulnerable.
    pub vulnerable_bonus: u32,
    pub actor_deltas: ResourceDeltas,
}
