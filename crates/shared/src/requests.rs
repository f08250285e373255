//! Request payloads a transport accepts and hands to the engine.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Start a 1-vs-1 battle between two distinct roster fighters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDuelRequest {
    pub fighter_a: Uuid,
    pub fighter_b: Uuid,
}

/// Start a 3-vs-3 team battle; rosters deploy in the given order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeamBattleRequest {
    pub side_a: [Uuid; 3],
    pub side_b: [Uuid; 3],
}

/// Submit one action for the named fighter.
///
/// `action` is a catalog identifier ("basic_attack") or display label
/// ("Ataque Básico"); unknown values come back as a rejection carrying the
/// currently-legal list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitActionRequest {
    pub fighter_id: Uuid,
    pub action: String,
}
