//! Data types crossing port boundaries.

use rumble_domain::FighterId;
use serde::{Deserialize, Serialize};

/// A fighter as the external roster store describes one.
///
/// The engine copies what it needs into the battle at creation time; the
/// move labels are cosmetic and optional (duel-era rosters predate them).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterFighter {
    pub id: FighterId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub combo1_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub combo2_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ultra_name: Option<String>,
}

impl RosterFighter {
    pub fn new(id: FighterId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            combo1_name: None,
            combo2_name: None,
            ultra_name: None,
        }
    }

    pub fn with_move_names(
        mut self,
        combo1: impl Into<String>,
        combo2: impl Into<String>,
        ultra: impl Into<String>,
    ) -> Self {
        self.combo1_name = Some(combo1.into());
        self.combo2_name = Some(combo2.into());
        self.ultra_name = Some(ultra.into());
        self
    }
}
