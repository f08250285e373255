//! Response payloads and the error-code mapping of the engine taxonomy.
//!
//! Everything here converts straight from domain types; a transport layer
//! serializes these and nothing else. Snapshots come from the ledger, so a
//! view never leaks live aggregate state.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use rumble_domain::{
    ActionKind, Battle, BattleStatus, BattleSummary, CombatError, FighterState, Guard, Meter,
    Side, SideId, Substitution, TurnOutcome, TurnRecord, Victory,
};

// =============================================================================
// Error contract
// =============================================================================

/// Wire classification of every engine error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Unknown battle or fighter id.
    InvalidReference,
    /// The fighter is not part of the battle.
    NotParticipant,
    /// The fighter acted out of turn.
    WrongTurn,
    /// The match already has a winner.
    MatchFinished,
    /// Precondition failed or unknown action name.
    ActionRejected,
    /// Storage failure; not a caller error.
    StorageFailure,
}

/// One selectable move, as the client renders it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionOption {
    pub id: String,
    pub label: String,
}

impl From<ActionKind> for ActionOption {
    fn from(action: ActionKind) -> Self {
        Self {
            id: action.id().to_string(),
            label: action.label().to_string(),
        }
    }
}

/// Error payload. Rejections carry the currently-legal moves so the client
/// can grey out the rest without a second round trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub code: ErrorCode,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legal_actions: Option<Vec<ActionOption>>,
}

impl ErrorBody {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            legal_actions: None,
        }
    }

    /// The `InvalidReference` case lives at the engine boundary (unknown ids
    /// never reach the resolver), so it gets an explicit constructor.
    pub fn invalid_reference(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidReference, message)
    }
}

impl From<&CombatError> for ErrorBody {
    fn from(error: &CombatError) -> Self {
        let code = match error {
            CombatError::MatchFinished => ErrorCode::MatchFinished,
            CombatError::WrongTurn { .. } => ErrorCode::WrongTurn,
            CombatError::NotParticipant { .. } => ErrorCode::NotParticipant,
            CombatError::ActionRejected { .. } => ErrorCode::ActionRejected,
        };
        let legal_actions = error
            .legal_moves()
            .map(|legal| legal.iter().copied().map(ActionOption::from).collect());
        Self {
            code,
            message: error.to_string(),
            legal_actions,
        }
    }
}

// =============================================================================
// State views
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeterView {
    pub value: u32,
    pub max: u32,
}

impl From<Meter> for MeterView {
    fn from(meter: Meter) -> Self {
        Self {
            value: meter.value(),
            max: meter.max(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FighterView {
    pub id: Uuid,
    pub name: String,
    pub hp: MeterView,
    pub energy: MeterView,
    pub combo: MeterView,
    pub ultra: MeterView,
    pub guard: Guard,
    pub ultra_spent: bool,
    pub down: bool,
}

impl From<&FighterState> for FighterView {
    fn from(fighter: &FighterState) -> Self {
        Self {
            id: fighter.id().to_uuid(),
            name: fighter.name().to_string(),
            hp: fighter.hp().into(),
            energy: fighter.energy().into(),
            combo: fighter.combo().into(),
            ultra: fighter.ultra().into(),
            guard: fighter.guard(),
            ultra_spent: fighter.ultra_spent(),
            down: fighter.is_down(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SideView {
    pub fighters: Vec<FighterView>,
    pub active_index: usize,
}

impl From<&Side> for SideView {
    fn from(side: &Side) -> Self {
        Self {
            fighters: side.fighters().iter().map(FighterView::from).collect(),
            active_index: side.active_index(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VictoryView {
    pub side: SideId,
    pub fighter: String,
}

impl From<&Victory> for VictoryView {
    fn from(victory: &Victory) -> Self {
        Self {
            side: victory.side,
            fighter: victory.fighter.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleView {
    pub id: Uuid,
    pub mode: BattleMode,
    pub status: BattleStatus,
    pub turn_owner: SideId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<VictoryView>,
    pub round: u32,
    pub side_a: SideView,
    pub side_b: SideView,
    pub turns: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BattleMode {
    Duel,
    Team,
}

impl From<&Battle> for BattleView {
    fn from(battle: &Battle) -> Self {
        Self {
            id: battle.id().to_uuid(),
            mode: if battle.rules().is_team() {
                BattleMode::Team
            } else {
                BattleMode::Duel
            },
            status: battle.status(),
            turn_owner: battle.turn_owner(),
            winner: battle.winner().map(VictoryView::from),
            round: battle.round(),
            side_a: battle.side(SideId::A).into(),
            side_b: battle.side(SideId::B).into(),
            turns: battle.history().len() as u32,
        }
    }
}

// =============================================================================
// Turn and ledger views
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnView {
    pub seq: u32,
    pub attacker: String,
    pub defender: String,
    pub action: ActionOption,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub move_label: Option<String>,
    pub damage: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damage_reduced: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counter_damage: Option<u32>,
    pub attacker_after: FighterView,
    pub defender_after: FighterView,
}

impl From<&TurnRecord> for TurnView {
    fn from(record: &TurnRecord) -> Self {
        let effects = record.effects();
        Self {
            seq: record.seq(),
            attacker: record.attacker().to_string(),
            defender: record.defender().to_string(),
            action: record.action().into(),
            move_label: effects.move_label.clone(),
            damage: record.damage(),
            damage_reduced: effects.defense.map(|d| d.mitigated),
            counter_damage: effects.counter.map(|c| c.damage),
            attacker_after: record.attacker_after().into(),
            defender_after: record.defender_after().into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubstitutionView {
    pub side: SideId,
    pub incoming: String,
    pub round: u32,
}

impl From<&Substitution> for SubstitutionView {
    fn from(substitution: &Substitution) -> Self {
        Self {
            side: substitution.side,
            incoming: substitution.incoming.to_string(),
            round: substitution.round,
        }
    }
}

/// What "execute action" answers with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnReport {
    pub turn: TurnView,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<VictoryView>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub substitution: Option<SubstitutionView>,
}

impl From<&TurnOutcome> for TurnReport {
    fn from(outcome: &TurnOutcome) -> Self {
        Self {
            turn: (&outcome.record).into(),
            winner: outcome.winner.as_ref().map(VictoryView::from),
            substitution: outcome.substitution.as_ref().map(SubstitutionView::from),
        }
    }
}

/// What the ledger read answers with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryView {
    pub turns: Vec<TurnView>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<VictoryView>,
    pub fighters: Vec<FighterView>,
}

impl HistoryView {
    pub fn new(records: &[TurnRecord], summary: &BattleSummary) -> Self {
        Self {
            turns: records.iter().map(TurnView::from).collect(),
            winner: summary.winner.as_ref().map(VictoryView::from),
            fighters: summary.fighters.iter().map(FighterView::from).collect(),
        }
    }
}
