//! Validated name newtypes and cosmetic move labels.
//!
//! `FighterName` is valid by construction: non-empty, trimmed, bounded.
//! `MoveSet` carries the roster's display labels for a fighter's special
//! moves; it is copied into the battle at creation and never read by
//! resolution logic.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Maximum length for a fighter's display name
const MAX_NAME_LENGTH: usize = 100;

/// A validated fighter display name (non-empty, <=100 chars, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FighterName(String);

impl FighterName {
    /// Create a new validated fighter name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the name is empty after trimming
    /// or exceeds 100 characters.
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Fighter name cannot be empty"));
        }
        if trimmed.len() > MAX_NAME_LENGTH {
            return Err(DomainError::validation(format!(
                "Fighter name cannot exceed {} characters",
                MAX_NAME_LENGTH
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FighterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for FighterName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<FighterName> for String {
    fn from(name: FighterName) -> Self {
        name.0
    }
}

/// Display labels for a fighter's named moves.
///
/// Cosmetic only: the history ledger stamps these onto turn records so the
/// client can show "Dragón Ascendente" instead of "combo". Rosters without
/// named moves simply omit the set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveSet {
    /// Label for the standard combo tier
    pub combo1: String,
    /// Label for the advanced combo tier
    pub combo2: String,
    /// Label for the ultra move
    pub ultra: String,
}

impl MoveSet {
    pub fn new(
        combo1: impl Into<String>,
        combo2: impl Into<String>,
        ultra: impl Into<String>,
    ) -> Self {
        Self {
            combo1: combo1.into(),
            combo2: combo2.into(),
            ultra: ultra.into(),
        }
    }
}
