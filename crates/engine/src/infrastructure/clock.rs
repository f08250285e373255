//! Clock and random implementations.

use chrono::{DateTime, Utc};

use crate::infrastructure::ports::{ClockPort, RandomPort};

/// System clock - uses real time.
#[derive(Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl ClockPort for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// System random - uses real randomness.
#[derive(Default)]
pub struct SystemRandom;

impl SystemRandom {
    pub fn new() -> Self {
        Self
    }
}

impl RandomPort for SystemRandom {
    fn gen_range(&self, low: u32, high: u32) -> u32 {
        use rand::Rng;
        rand::thread_rng().gen_range(low..=high)
    }
}

/// Fixed clock for testing.
#[cfg(test)]
pub struct FixedClock(pub DateTime<Utc>);

#[cfg(test)]
impl ClockPort for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Always draws the top of the range. Deterministic max-damage tests.
#[cfg(test)]
pub struct MaxRandom;

#[cfg(test)]
impl RandomPort for MaxRandom {
    fn gen_range(&self, _low: u32, high: u32) -> u32 {
        high
    }
}

/// Always draws the bottom of the range.
#[cfg(test)]
pub struct MinRandom;

#[cfg(test)]
impl RandomPort for MinRandom {
    fn gen_range(&self, low: u32, _high: u32) -> u32 {
        low
    }
}
