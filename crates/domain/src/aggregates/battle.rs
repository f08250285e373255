//! Battle aggregate - match state machine and the only mutation path.
//!
//! # Rustic DDD Design
//!
//! - **Private fields**: participants, turn order, and the ledger are owned
//!   exclusively by the aggregate; nothing mutates them from outside
//! - **Valid by construction**: constructors validate roster shape and
//!   distinctness, and seat every fighter at the standard opening state
//! - **Atomic transitions**: `execute_action` works on cloned slots and
//!   commits only on success, so a rejected turn leaves the aggregate
//!   bit-for-bit unchanged
//!
//! Both match modes run through the same resolver; they differ only in the
//! `MatchRules` parameter object (max hp, roster size) and in how the active
//! slot is derived. Turn ownership is per-side: in team mode the acting
//! fighter is implied by the side's active index, never chosen by the caller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::{self, ActionKind, RejectReason};
use crate::combat::{self, CombatError, RollFn};
use crate::entities::{FighterProfile, FighterState};
use crate::error::DomainError;
use crate::events::{BattleSummary, History, TurnRecord};
use crate::ids::{BattleId, FighterId};
use crate::value_objects::FighterName;

/// Hit points per fighter in a duel.
pub const DUEL_MAX_HP: u32 = 300;

/// Hit points per fighter in a team battle.
pub const TEAM_MAX_HP: u32 = 100;

/// Roster slots per side in a team battle.
pub const TEAM_ROSTER_SIZE: usize = 3;

/// The two sides of a battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SideId {
    A,
    B,
}

impl SideId {
    pub fn opponent(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }

    fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
        }
    }
}

/// Mode parameters. Duels and team battles share every rule except these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRules {
    max_hp: u32,
    roster_size: usize,
}

impl MatchRules {
    pub fn duel() -> Self {
        Self {
            max_hp: DUEL_MAX_HP,
            roster_size: 1,
        }
    }

    pub fn team() -> Self {
        Self {
            max_hp: TEAM_MAX_HP,
            roster_size: TEAM_ROSTER_SIZE,
        }
    }

    pub fn max_hp(&self) -> u32 {
        self.max_hp
    }

    pub fn roster_size(&self) -> usize {
        self.roster_size
    }

    pub fn is_team(&self) -> bool {
        self.roster_size > 1
    }
}

/// Match lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BattleStatus {
    InProgress,
    Finished,
}

/// Who won, once the match is decided.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Victory {
    pub side: SideId,
    /// Name of the fighter who landed the deciding blow.
    pub fighter: FighterName,
}

/// A bench promotion in team mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Substitution {
    pub side: SideId,
    /// Fighter stepping in for the knocked-out one.
    pub incoming: FighterName,
    /// Round number after the substitution.
    pub round: u32,
}

/// Result bundle of one successful resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnOutcome {
    /// The ledger record appended for this turn (includes the effects).
    pub record: TurnRecord,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<Victory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub substitution: Option<Substitution>,
}

/// One side's roster plus its active slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Side {
    fighters: Vec<FighterState>,
    active: usize,
}

impl Side {
    fn new(profiles: Vec<FighterProfile>, max_hp: u32) -> Self {
        Self {
            fighters: profiles
                .into_iter()
                .map(|p| FighterState::new(p, max_hp))
                .collect(),
            active: 0,
        }
    }

    /// The fighter currently deployed for this side.
    pub fn active(&self) -> &FighterState {
        &self.fighters[self.active]
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Roster in fixed deployment order.
    pub fn fighters(&self) -> &[FighterState] {
        &self.fighters
    }

    pub fn find(&self, id: FighterId) -> Option<&FighterState> {
        self.fighters.iter().find(|f| f.id() == id)
    }

    pub fn has_living(&self) -> bool {
        self.fighters.iter().any(|f| !f.is_down())
    }

    fn put_active(&mut self, fighter: FighterState) {
        self.fighters[self.active] = fighter;
    }

    /// Deploy the first living roster member, in fixed order. `None` means
    /// the side is swept.
    fn promote_next_living(&mut self) -> Option<&FighterState> {
        let next = self.fighters.iter().position(|f| !f.is_down())?;
        self.active = next;
        Some(&self.fighters[next])
    }
}

/// The aggregate root. Created per match, mutated only through
/// [`Battle::execute_action`], read-only once finished.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Battle {
    id: BattleId,
    /// Authenticated user the battle belongs to; used only for list scoping.
    owner: String,
    rules: MatchRules,
    sides: [Side; 2],
    turn_owner: SideId,
    status: BattleStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    winner: Option<Victory>,
    /// Substitution cycle counter; starts at 1, team mode only moves it.
    round: u32,
    history: History,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Battle {
    /// Create a 1-vs-1 battle.
    pub fn duel(
        owner: impl Into<String>,
        fighter_a: FighterProfile,
        fighter_b: FighterProfile,
        first_turn: SideId,
        now: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        Self::new(
            owner,
            MatchRules::duel(),
            vec![fighter_a],
            vec![fighter_b],
            first_turn,
            now,
        )
    }

    /// Create a 3-vs-3 team battle.
    pub fn team(
        owner: impl Into<String>,
        side_a: Vec<FighterProfile>,
        side_b: Vec<FighterProfile>,
        first_turn: SideId,
        now: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        Self::new(owner, MatchRules::team(), side_a, side_b, first_turn, now)
    }

    fn new(
        owner: impl Into<String>,
        rules: MatchRules,
        side_a: Vec<FighterProfile>,
        side_b: Vec<FighterProfile>,
        first_turn: SideId,
        now: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        if side_a.len() != rules.roster_size() || side_b.len() != rules.roster_size() {
            return Err(DomainError::validation(format!(
                "Each side must field exactly {} fighter(s)",
                rules.roster_size()
            )));
        }

        let mut seen = Vec::with_capacity(side_a.len() + side_b.len());
        for profile in side_a.iter().chain(side_b.iter()) {
            if seen.contains(&profile.id) {
                return Err(DomainError::validation(format!(
                    "Fighter {} appears more than once",
                    profile.id
                )));
            }
            seen.push(profile.id);
        }

        Ok(Self {
            id: BattleId::new(),
            owner: owner.into(),
            rules,
            sides: [
                Side::new(side_a, rules.max_hp()),
                Side::new(side_b, rules.max_hp()),
            ],
            turn_owner: first_turn,
            status: BattleStatus::InProgress,
            winner: None,
            round: 1,
            history: History::new(),
            created_at: now,
            updated_at: now,
        })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn id(&self) -> BattleId {
        self.id
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn rules(&self) -> MatchRules {
        self.rules
    }

    pub fn side(&self, id: SideId) -> &Side {
        &self.sides[id.index()]
    }

    pub fn turn_owner(&self) -> SideId {
        self.turn_owner
    }

    pub fn status(&self) -> BattleStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status == BattleStatus::Finished
    }

    pub fn winner(&self) -> Option<&Victory> {
        self.winner.as_ref()
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Which side a fighter is seated on, active or benched.
    pub fn side_of(&self, fighter: FighterId) -> Option<SideId> {
        self.seat_of(fighter).map(|(side, _)| side)
    }

    fn seat_of(&self, fighter: FighterId) -> Option<(SideId, &FighterState)> {
        for id in [SideId::A, SideId::B] {
            if let Some(seated) = self.side(id).find(fighter) {
                return Some((id, seated));
            }
        }
        None
    }

    /// Outcome so far plus the last known state of every participant.
    pub fn summary(&self) -> BattleSummary {
        BattleSummary {
            winner: self.winner.clone(),
            turns: self.history.len() as u32,
            fighters: self
                .sides
                .iter()
                .flat_map(|side| side.fighters().iter().cloned())
                .collect(),
        }
    }

    /// Moves the named fighter could legally attempt right now.
    pub fn legal_moves(&self, side: SideId) -> Vec<ActionKind> {
        catalog::legal_moves(self.side(side).active())
    }

    // =========================================================================
    // The one mutation path
    // =========================================================================

    /// Resolve one requested action as a single atomic transition.
    ///
    /// Validates ownership and turn order, delegates the fighter-level work
    /// to the combat resolver on cloned slots, then commits: win detection,
    /// bench substitution, turn flip, and the ledger append all land
    /// together. Any error path leaves the aggregate untouched.
    pub fn execute_action(
        &mut self,
        actor: FighterId,
        action: &str,
        roll: RollFn<'_>,
        now: DateTime<Utc>,
    ) -> Result<TurnOutcome, CombatError> {
        if self.is_finished() {
            return Err(CombatError::MatchFinished);
        }

        let (side_id, seated) = self
            .seat_of(actor)
            .ok_or(CombatError::NotParticipant { id: actor })?;
        if side_id != self.turn_owner || self.side(side_id).active().id() != actor {
            // Participant, but either the other side acts next or the fighter
            // is benched behind the side's active slot.
            return Err(CombatError::WrongTurn {
                fighter: seated.name().clone(),
            });
        }

        let Some(kind) = ActionKind::parse(action) else {
            return Err(self.rejection(
                side_id,
                RejectReason::UnknownAction {
                    name: action.to_string(),
                },
            ));
        };

        let opponent_id = side_id.opponent();
        let mut attacker = self.side(side_id).active().clone();
        let mut defender = self.side(opponent_id).active().clone();

        let effects = combat::resolve_action(&mut attacker, &mut defender, kind, roll)
            .map_err(|reason| self.rejection(side_id, reason))?;

        // Commit phase - no error can occur past this point.
        let record = TurnRecord::new(
            self.history.next_seq(),
            attacker.name().clone(),
            defender.name().clone(),
            effects,
            attacker.clone(),
            defender.clone(),
        );

        let defender_down = defender.is_down();
        self.sides[side_id.index()].put_active(attacker.clone());
        self.sides[opponent_id.index()].put_active(defender);

        let mut winner = None;
        let mut substitution = None;
        if defender_down {
            match self.sides[opponent_id.index()].promote_next_living() {
                Some(incoming) => {
                    let incoming = incoming.name().clone();
                    self.round += 1;
                    substitution = Some(Substitution {
                        side: opponent_id,
                        incoming,
                        round: self.round,
                    });
                }
                None => {
                    let victory = Victory {
                        side: side_id,
                        fighter: attacker.name().clone(),
                    };
                    self.status = BattleStatus::Finished;
                    self.winner = Some(victory.clone());
                    winner = Some(victory);
                }
            }
        }

        // The turn never advances past the winning blow.
        if self.status == BattleStatus::InProgress {
            self.turn_owner = opponent_id;
        }

        self.history.append(record.clone());
        self.updated_at = now;

        Ok(TurnOutcome {
            record,
            winner,
            substitution,
        })
    }

    /// Build a rejection carrying the currently-legal moves for the side.
    fn rejection(&self, side: SideId, reason: RejectReason) -> CombatError {
        CombatError::ActionRejected {
            reason,
            legal: self.legal_moves(side),
        }
    }
}
