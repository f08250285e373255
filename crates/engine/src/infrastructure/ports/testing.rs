//! Testability ports for injecting time and randomness.

use chrono::{DateTime, Utc};

#[cfg_attr(test, mockall::automock)]
pub trait ClockPort: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Uniform integer draws, inclusive on both ends.
pub trait RandomPort: Send + Sync {
    fn gen_range(&self, low: u32, high: u32) -> u32;
}
