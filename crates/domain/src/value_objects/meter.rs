//! Bounded resource meter.
//!
//! Every mutable combat resource (hit points, energy, combo, ultra) is a
//! `Meter`: an integer pinned to `[0, max]`. All mutation goes through
//! [`Meter::gain`] and [`Meter::spend`], which clamp, so no sequence of
//! operations can leave a value out of range.

use serde::{Deserialize, Serialize};

/// An integer resource clamped to `[0, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meter {
    value: u32,
    max: u32,
}

impl Meter {
    /// Create a meter at an arbitrary starting value (clamped to `max`).
    pub fn new(value: u32, max: u32) -> Self {
        Self {
            value: value.min(max),
            max,
        }
    }

    /// Create a meter filled to its maximum.
    pub fn full(max: u32) -> Self {
        Self { value: max, max }
    }

    /// Create a meter at zero.
    pub fn empty(max: u32) -> Self {
        Self { value: 0, max }
    }

    /// Current value.
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Upper bound.
    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn is_empty(&self) -> bool {
        self.value == 0
    }

    pub fn is_full(&self) -> bool {
        self.value == self.max
    }

    /// Whether at least `amount` is available to spend.
    pub fn has(&self, amount: u32) -> bool {
        self.value >= amount
    }

    /// Add up to `amount`, clamping at `max`. Returns what was actually added.
    pub fn gain(&mut self, amount: u32) -> u32 {
        let gained = amount.min(self.max - self.value);
        self.value += gained;
        gained
    }

    /// Remove up to `amount`, clamping at zero. Returns what was actually removed.
    pub fn spend(&mut self, amount: u32) -> u32 {
        let spent = amount.min(self.value);
        self.value -= spent;
        spent
    }

    /// Empty the meter, returning what it held.
    pub fn drain(&mut self) -> u32 {
        let held = self.value;
        self.value = 0;
        held
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_to_max() {
        let meter = Meter::new(120, 100);
        assert_eq!(meter.value(), 100);
    }

    #[test]
    fn gain_clamps_at_max() {
        let mut meter = Meter::new(40, 50);
        assert_eq!(meter.gain(30), 10);
        assert_eq!(meter.value(), 50);
        assert!(meter.is_full());
    }

    #[test]
    fn spend_clamps_at_zero() {
        let mut meter = Meter::new(5, 50);
        assert_eq!(meter.spend(20), 5);
        assert_eq!(meter.value(), 0);
        assert!(meter.is_empty());
    }

    #[test]
    fn has_checks_availability() {
        let meter = Meter::new(10, 50);
        assert!(meter.has(10));
        assert!(!meter.has(11));
    }

    #[test]
    fn drain_empties_and_reports() {
        let mut meter = Meter::full(100);
        assert_eq!(meter.drain(), 100);
        assert!(meter.is_empty());
    }
}
