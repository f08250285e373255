//! History ledger - the append-only record of everything that happened.
//!
//! Entries are immutable once appended and sequence numbers are dense,
//! 1-based, and assigned at append time. Snapshots are full copies of both
//! engaged fighters, so later state changes can never rewrite the past.

use serde::{Deserialize, Serialize};

use crate::aggregates::Victory;
use crate::catalog::ActionKind;
use crate::combat::TurnEffects;
use crate::entities::FighterState;
use crate::value_objects::FighterName;

/// One resolved turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnRecord {
    seq: u32,
    attacker: FighterName,
    defender: FighterName,
    effects: TurnEffects,
    attacker_after: FighterState,
    defender_after: FighterState,
}

impl TurnRecord {
    pub(crate) fn new(
        seq: u32,
        attacker: FighterName,
        defender: FighterName,
        effects: TurnEffects,
        attacker_after: FighterState,
        defender_after: FighterState,
    ) -> Self {
        Self {
            seq,
            attacker,
            defender,
            effects,
            attacker_after,
            defender_after,
        }
    }

    /// 1-based position in the ledger.
    pub fn seq(&self) -> u32 {
        self.seq
    }

    pub fn attacker(&self) -> &FighterName {
        &self.attacker
    }

    pub fn defender(&self) -> &FighterName {
        &self.defender
    }

    pub fn action(&self) -> ActionKind {
        self.effects.action
    }

    /// Realized damage, post-mitigation.
    pub fn damage(&self) -> u32 {
        self.effects.damage
    }

    pub fn effects(&self) -> &TurnEffects {
        &self.effects
    }

    /// Attacker state right after resolution (full copy, never a reference).
    pub fn attacker_after(&self) -> &FighterState {
        &self.attacker_after
    }

    /// Defender state right after resolution (full copy, never a reference).
    pub fn defender_after(&self) -> &FighterState {
        &self.defender_after
    }
}

/// Append-only sequence of resolved turns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History {
    entries: Vec<TurnRecord>,
}

impl History {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Sequence number the next appended record must carry.
    pub fn next_seq(&self) -> u32 {
        self.entries.len() as u32 + 1
    }

    /// Append a record. The aggregate builds records with [`Self::next_seq`],
    /// which keeps the ledger dense by construction.
    pub(crate) fn append(&mut self, record: TurnRecord) {
        debug_assert_eq!(record.seq, self.next_seq());
        self.entries.push(record);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&TurnRecord> {
        self.entries.last()
    }

    /// Full ordered ledger; insertion order is the canonical ordering.
    pub fn entries(&self) -> &[TurnRecord] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &TurnRecord> {
        self.entries.iter()
    }
}

/// Derived read model: outcome so far plus the last known state of every
/// participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<Victory>,
    pub turns: u32,
    pub fighters: Vec<FighterState>,
}
