//! Guard status - the transient stance a fighter holds between turns.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A fighter's defensive posture.
///
/// `Defending` and `Vulnerable` last until the start of that fighter's own
/// next turn; the resolver resets them to `Normal` before validating the
/// fighter's action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Guard {
    #[default]
    Normal,
    /// Set by Defend: incoming hits are partially absorbed and may trigger a
    /// counter-attack.
    Defending,
    /// Set by Charge Energy: any hit taken grants the fighter bonus ultra.
    Vulnerable,
}

impl Guard {
    pub fn is_defending(&self) -> bool {
        matches!(self, Self::Defending)
    }

    pub fn is_vulnerable(&self) -> bool {
        matches!(self, Self::Vulnerable)
    }

    /// Guards expire at the start of the holder's own turn, not the opponent's.
    pub fn expires_on_own_turn(&self) -> bool {
        !matches!(self, Self::Normal)
    }
}

impl fmt::Display for Guard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Normal => "normal",
            Self::Defending => "defending",
            Self::Vulnerable => "vulnerable",
        };
        write!(f, "{label}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_normal() {
        assert_eq!(Guard::default(), Guard::Normal);
        assert!(!Guard::default().expires_on_own_turn());
    }

    #[test]
    fn non_normal_guards_expire() {
        assert!(Guard::Defending.expires_on_own_turn());
        assert!(Guard::Vulnerable.expires_on_own_turn());
    }
}
